//! Block cipher modes of operation.
//!
//! [`engine::ModeEngine`] is the streaming core: it carries partial units
//! across calls and emits output through a caller-supplied sink. The
//! per-mode modules add one-shot helpers that run a whole buffer through
//! an engine in a single call. Every mode operates on top of a block
//! cipher through the [`BlockCipher`](crate::provider::BlockCipher)
//! trait.

pub mod cbc;
pub mod cfb;
pub mod ecb;
pub mod engine;
pub mod ofb;

use blockflow_types::{CipherError, Direction, Mode};

use crate::options::CipherOptions;
use crate::provider::BlockCipher;

/// Drive a fresh engine over one buffer and flush.
fn crypt_buffer<C: BlockCipher>(
    cipher: C,
    mode: Mode,
    direction: Direction,
    key: &[u8],
    iv: Option<&[u8]>,
    shift_width: Option<usize>,
    data: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let mut options = CipherOptions::new()
        .mode(mode)
        .direction(direction)
        .key(key);
    if let Some(iv) = iv {
        options = options.iv(iv);
    }
    if let Some(width) = shift_width {
        options = options.shift_width(width);
    }
    let mut engine = options.resolve(cipher)?.engine();
    let mut out = Vec::with_capacity(data.len());
    engine.feed(data, |bytes| {
        out.extend_from_slice(bytes);
        Ok(())
    })?;
    engine.flush()?;
    Ok(out)
}
