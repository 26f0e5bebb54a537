//! ECB (Electronic Codebook) mode of operation.
//!
//! **Security warning**: ECB encrypts equal plaintext blocks to equal
//! ciphertext blocks and therefore leaks data patterns. It is provided
//! for completeness and compatibility; prefer a chained mode.

use blockflow_types::{CipherError, Direction, Mode};

use crate::provider::BlockCipher;

/// Encrypt data in ECB mode.
///
/// The input length must be a multiple of the block size; no padding is
/// applied.
pub fn ecb_encrypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    super::crypt_buffer(
        cipher,
        Mode::Ecb,
        Direction::Encrypt,
        key,
        None,
        None,
        plaintext,
    )
}

/// Decrypt data in ECB mode.
///
/// The input length must be a multiple of the block size.
pub fn ecb_decrypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    super::crypt_buffer(
        cipher,
        Mode::Ecb,
        Direction::Decrypt,
        key,
        None,
        None,
        ciphertext,
    )
}
