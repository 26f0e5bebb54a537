//! CFB (Cipher Feedback) mode of operation.
//!
//! The block primitive only ever runs forward: it encrypts the feedback
//! register to produce a keystream segment, and the ciphertext segment is
//! shifted back into the register. Decryption shifts in the *received*
//! ciphertext, which is the asymmetry that keeps the two sides in step.
//! Defined in NIST SP 800-38A, which also covers the sub-block segment
//! variants (CFB-8 etc.) reachable here through
//! [`CipherOptions::shift_width`](crate::options::CipherOptions::shift_width).

use blockflow_types::{CipherError, Direction, Mode};

use crate::provider::BlockCipher;

/// Encrypt data in CFB mode with full-block feedback.
///
/// `iv` must be exactly one block. Sub-block segment sizes go through
/// [`CipherOptions`](crate::options::CipherOptions) directly.
pub fn cfb_encrypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let width = cipher.block_size();
    super::crypt_buffer(
        cipher,
        Mode::Cfb,
        Direction::Encrypt,
        key,
        Some(iv),
        Some(width),
        plaintext,
    )
}

/// Decrypt data in CFB mode with full-block feedback.
pub fn cfb_decrypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let width = cipher.block_size();
    super::crypt_buffer(
        cipher,
        Mode::Cfb,
        Direction::Decrypt,
        key,
        Some(iv),
        Some(width),
        ciphertext,
    )
}
