//! The streaming mode-of-operation engine.
//!
//! One [`ModeEngine`] transforms one direction of one byte stream. It
//! buffers input until a full processing unit is available (a block for
//! ECB/CBC, a shift-width segment for CFB/OFB), transforms each completed
//! unit, and hands it to the caller's sink immediately. Splitting a
//! message across any number of `feed` calls, down to one byte per call,
//! yields byte-identical output.

use std::sync::Arc;

use blockflow_types::{CipherError, Direction, Mode};
use zeroize::Zeroize;

use crate::options::CipherConfig;
use crate::provider::BlockCipher;
use crate::util::{shift_register, xor_bytes};

/// Streaming encoder/decoder for one cipher stream.
///
/// Built from a resolved [`CipherConfig`](crate::options::CipherConfig);
/// the key schedule is shared read-only with the config and any sibling
/// engines. Units are strictly sequential: each transform depends on the
/// feedback register left by the previous one.
pub struct ModeEngine<C: BlockCipher> {
    cipher: Arc<C>,
    schedule: Arc<C::Schedule>,
    mode: Mode,
    direction: Direction,
    /// Processing unit size: block size for ECB/CBC, shift width for CFB/OFB.
    unit: usize,
    block_size: usize,
    /// Bytes waiting for a full unit.
    pending: Vec<u8>,
    pending_len: usize,
    /// Running IV/feedback register for CBC/CFB/OFB; zero for ECB.
    feedback: Vec<u8>,
    /// Workspace for the primitive's output.
    scratch: Vec<u8>,
}

impl<C: BlockCipher> Drop for ModeEngine<C> {
    fn drop(&mut self) {
        self.pending.zeroize();
        self.feedback.zeroize();
        self.scratch.zeroize();
    }
}

impl<C: BlockCipher> ModeEngine<C> {
    pub(crate) fn from_config(config: &CipherConfig<C>) -> Self {
        let block_size = config.cipher.block_size();
        let mut feedback = vec![0u8; block_size];
        if !config.iv.is_empty() {
            feedback.copy_from_slice(&config.iv);
        }
        ModeEngine {
            cipher: Arc::clone(&config.cipher),
            schedule: config.active_schedule(),
            mode: config.mode,
            direction: config.direction,
            unit: config.shift_width,
            block_size,
            pending: vec![0u8; block_size],
            pending_len: 0,
            feedback,
            scratch: vec![0u8; block_size],
        }
    }

    /// Feed `input` through the engine, emitting each completed unit to
    /// `sink`.
    ///
    /// Bytes short of a full unit are buffered for the next call. The
    /// first sink error aborts the call immediately; the unit already
    /// handed to the sink counts as consumed (the feedback register has
    /// advanced), so a caller that retries must not replay it.
    pub fn feed(
        &mut self,
        input: &[u8],
        mut sink: impl FnMut(&[u8]) -> Result<(), CipherError>,
    ) -> Result<(), CipherError> {
        let unit = self.unit;
        let mut pos = 0;

        // Top up a previously buffered partial unit first.
        if self.pending_len > 0 {
            let want = unit - self.pending_len;
            let take = want.min(input.len());
            self.pending[self.pending_len..self.pending_len + take]
                .copy_from_slice(&input[..take]);
            self.pending_len += take;
            pos = take;
            if self.pending_len < unit {
                return Ok(());
            }
            self.pending_len = 0;
            self.crypt_pending(&mut sink)?;
        }

        // Whole units straight from the caller's buffer.
        while pos + unit <= input.len() {
            self.pending[..unit].copy_from_slice(&input[pos..pos + unit]);
            self.crypt_pending(&mut sink)?;
            pos += unit;
        }

        // Stash the tail for the next call.
        if pos < input.len() {
            let rest = input.len() - pos;
            self.pending[..rest].copy_from_slice(&input[pos..]);
            self.pending_len = rest;
        }
        Ok(())
    }

    /// Finish the stream.
    ///
    /// All four modes reject a buffered partial unit: nothing in this
    /// design pads, so trailing bytes that never filled a unit are a
    /// caller error. With nothing buffered, flush succeeds and emits
    /// nothing.
    pub fn flush(&mut self) -> Result<(), CipherError> {
        if self.pending_len > 0 {
            return Err(CipherError::IncompleteBlock {
                buffered: self.pending_len,
            });
        }
        Ok(())
    }

    /// Discard buffered-but-unprocessed bytes.
    ///
    /// The feedback register is left alone: it reflects units the peer has
    /// already consumed, and rewinding it would silently desynchronize the
    /// stream. Only the unprocessed tail is dropped.
    pub fn clear(&mut self) {
        // Slice-level zeroize: the buffer keeps its length for reuse.
        self.pending.as_mut_slice().zeroize();
        self.pending_len = 0;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The processing unit size: shift width for CFB/OFB, block size
    /// otherwise.
    pub fn unit_size(&self) -> usize {
        self.unit
    }

    /// Number of bytes buffered toward the next unit.
    pub fn buffered(&self) -> usize {
        self.pending_len
    }

    /// Transform the full unit sitting in `pending[..unit]` and emit it.
    ///
    /// The caller has already cleared `pending_len`: once the transform
    /// runs, the unit is consumed no matter what the sink returns.
    fn crypt_pending(
        &mut self,
        sink: &mut impl FnMut(&[u8]) -> Result<(), CipherError>,
    ) -> Result<(), CipherError> {
        let unit = self.unit;
        let block = self.block_size;
        match self.mode {
            Mode::Ecb => {
                self.scratch.copy_from_slice(&self.pending[..block]);
                match self.direction {
                    Direction::Encrypt => {
                        self.cipher.encrypt_block(&self.schedule, &mut self.scratch)?
                    }
                    Direction::Decrypt => {
                        self.cipher.decrypt_block(&self.schedule, &mut self.scratch)?
                    }
                }
            }
            Mode::Cbc => match self.direction {
                Direction::Encrypt => {
                    // C_i = E(P_i XOR C_{i-1})
                    self.scratch.copy_from_slice(&self.pending[..block]);
                    xor_bytes(&mut self.scratch, &self.feedback);
                    self.cipher.encrypt_block(&self.schedule, &mut self.scratch)?;
                    self.feedback.copy_from_slice(&self.scratch);
                }
                Direction::Decrypt => {
                    // P_i = D(C_i) XOR C_{i-1}; the ciphertext block, not
                    // the plaintext, seeds the next unit's feedback.
                    self.scratch.copy_from_slice(&self.pending[..block]);
                    self.cipher.decrypt_block(&self.schedule, &mut self.scratch)?;
                    xor_bytes(&mut self.scratch, &self.feedback);
                    self.feedback.copy_from_slice(&self.pending[..block]);
                }
            },
            Mode::Cfb => {
                self.scratch.copy_from_slice(&self.feedback);
                self.cipher.encrypt_block(&self.schedule, &mut self.scratch)?;
                xor_bytes(&mut self.scratch[..unit], &self.pending[..unit]);
                // The ciphertext segment enters the register on both
                // paths: scratch holds it when encrypting, pending when
                // decrypting.
                match self.direction {
                    Direction::Encrypt => shift_register(&mut self.feedback, &self.scratch, unit),
                    Direction::Decrypt => shift_register(&mut self.feedback, &self.pending, unit),
                }
            }
            Mode::Ofb => {
                self.scratch.copy_from_slice(&self.feedback);
                self.cipher.encrypt_block(&self.schedule, &mut self.scratch)?;
                // The raw keystream re-enters the register before the data
                // XOR overwrites it; encrypt and decrypt are the same
                // transform.
                shift_register(&mut self.feedback, &self.scratch, unit);
                xor_bytes(&mut self.scratch[..unit], &self.pending[..unit]);
            }
        }
        sink(&self.scratch[..unit])
    }
}
