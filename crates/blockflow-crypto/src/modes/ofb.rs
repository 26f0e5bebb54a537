//! OFB (Output Feedback) mode of operation.
//!
//! The register is fed the raw keystream rather than any ciphertext, so the
//! keystream depends only on the key and IV. Encryption and decryption are
//! the same XOR, and the block primitive runs forward for both. Defined in
//! NIST SP 800-38A.

use blockflow_types::{CipherError, Direction, Mode};

use crate::provider::BlockCipher;

/// Apply OFB to `data` with full-block feedback.
///
/// OFB is its own inverse: apply once to encrypt, apply again with the same
/// key and IV to decrypt. `iv` must be exactly one block. Sub-block shift
/// widths go through [`CipherOptions`](crate::options::CipherOptions)
/// directly.
pub fn ofb_crypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let width = cipher.block_size();
    super::crypt_buffer(
        cipher,
        Mode::Ofb,
        Direction::Encrypt,
        key,
        Some(iv),
        Some(width),
        data,
    )
}
