//! Reference cipher for tests: XOR with a block-sized key.
//!
//! Deliberately trivial so expected vectors can be computed by hand, and
//! strict about schedule direction: each derived schedule remembers the
//! direction it was derived for, and the block transforms assert they are
//! handed the matching one. An engine that requests the wrong schedule
//! fails loudly in every test that uses it.

use blockflow_types::{CipherError, Direction};
use zeroize::Zeroize;

use crate::provider::BlockCipher;
use crate::util::xor_bytes;

pub(crate) struct XorCipher {
    block: usize,
}

impl XorCipher {
    pub(crate) fn new(block: usize) -> Self {
        XorCipher { block }
    }
}

#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub(crate) struct XorSchedule {
    pub(crate) key: Vec<u8>,
    #[zeroize(skip)]
    pub(crate) direction: Direction,
}

impl BlockCipher for XorCipher {
    type Schedule = XorSchedule;

    fn block_size(&self) -> usize {
        self.block
    }

    fn min_key_size(&self) -> usize {
        self.block
    }

    fn max_key_size(&self) -> Option<usize> {
        Some(self.block)
    }

    fn derive_schedule(
        &self,
        key: &[u8],
        direction: Direction,
    ) -> Result<XorSchedule, CipherError> {
        if key.len() != self.block {
            return Err(CipherError::InvalidKeyLength {
                min: self.block,
                max: Some(self.block),
                got: key.len(),
            });
        }
        Ok(XorSchedule {
            key: key.to_vec(),
            direction,
        })
    }

    fn encrypt_block(
        &self,
        schedule: &XorSchedule,
        block: &mut [u8],
    ) -> Result<(), CipherError> {
        assert_eq!(
            schedule.direction,
            Direction::Encrypt,
            "encrypt_block handed a decryption schedule"
        );
        if block.len() != self.block {
            return Err(CipherError::InvalidBlockLength {
                expected: self.block,
                got: block.len(),
            });
        }
        xor_bytes(block, &schedule.key);
        Ok(())
    }

    fn decrypt_block(
        &self,
        schedule: &XorSchedule,
        block: &mut [u8],
    ) -> Result<(), CipherError> {
        assert_eq!(
            schedule.direction,
            Direction::Decrypt,
            "decrypt_block handed an encryption schedule"
        );
        if block.len() != self.block {
            return Err(CipherError::InvalidBlockLength {
                expected: self.block,
                got: block.len(),
            });
        }
        xor_bytes(block, &schedule.key);
        Ok(())
    }
}
