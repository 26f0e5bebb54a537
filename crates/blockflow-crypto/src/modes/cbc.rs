//! CBC (Cipher Block Chaining) mode of operation.
//!
//! Each plaintext block is XORed with the previous ciphertext block
//! before encryption, chaining every block to all earlier ones. Defined
//! in NIST SP 800-38A.

use blockflow_types::{CipherError, Direction, Mode};

use crate::provider::BlockCipher;

/// Encrypt data in CBC mode.
///
/// `iv` must be exactly one block. The input length must be a multiple of
/// the block size; no padding is applied here, callers pad beforehand.
pub fn cbc_encrypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    super::crypt_buffer(
        cipher,
        Mode::Cbc,
        Direction::Encrypt,
        key,
        Some(iv),
        None,
        plaintext,
    )
}

/// Decrypt data in CBC mode.
///
/// `iv` must be exactly one block; the input length must be a multiple of
/// the block size.
pub fn cbc_decrypt<C: BlockCipher>(
    cipher: C,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    super::crypt_buffer(
        cipher,
        Mode::Cbc,
        Direction::Decrypt,
        key,
        Some(iv),
        None,
        ciphertext,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testcipher::XorCipher;

    const KEY: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

    // With the XOR cipher: C_i = P_i ^ C_{i-1} ^ key, C_0 = iv.
    #[test]
    fn test_cbc_two_block_vector() {
        let pt = [0x10, 0x20, 0x30, 0x40, 0x11, 0x21, 0x31, 0x41];
        let ct = cbc_encrypt(XorCipher::new(4), &KEY, &[0; 4], &pt).unwrap();
        assert_eq!(ct, [0x11, 0x22, 0x33, 0x44, 0x01, 0x01, 0x01, 0x01]);

        let back = cbc_decrypt(XorCipher::new(4), &KEY, &[0; 4], &ct).unwrap();
        assert_eq!(back, pt);
    }

    #[test]
    fn test_cbc_round_trip_with_iv() {
        let iv = [0xa5, 0x5a, 0xff, 0x00];
        let pt = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd];
        let ct = cbc_encrypt(XorCipher::new(4), &KEY, &iv, &pt).unwrap();
        let back = cbc_decrypt(XorCipher::new(4), &KEY, &iv, &ct).unwrap();
        assert_eq!(back, pt);
    }

    #[test]
    fn test_cbc_chaining_dependency() {
        // Same first block, different second block: block 1 ciphertext
        // matches, block 2 differs.
        let pt_a = [0x10, 0x20, 0x30, 0x40, 0x11, 0x21, 0x31, 0x41];
        let pt_b = [0x10, 0x20, 0x30, 0x40, 0x99, 0x88, 0x77, 0x66];
        let ct_a = cbc_encrypt(XorCipher::new(4), &KEY, &[0; 4], &pt_a).unwrap();
        let ct_b = cbc_encrypt(XorCipher::new(4), &KEY, &[0; 4], &pt_b).unwrap();
        assert_eq!(ct_a[..4], ct_b[..4]);
        assert_ne!(ct_a[4..], ct_b[4..]);
    }

    #[test]
    fn test_cbc_first_block_avalanche() {
        // Flipping one plaintext bit in block 1 changes block 1 and every
        // later ciphertext block.
        let pt = [0x10, 0x20, 0x30, 0x40, 0x11, 0x21, 0x31, 0x41, 0x12, 0x22, 0x32, 0x42];
        let mut flipped = pt;
        flipped[2] ^= 0x08;
        let ct = cbc_encrypt(XorCipher::new(4), &KEY, &[0; 4], &pt).unwrap();
        let ct_flipped = cbc_encrypt(XorCipher::new(4), &KEY, &[0; 4], &flipped).unwrap();
        assert_ne!(ct[..4], ct_flipped[..4]);
        assert_ne!(ct[4..8], ct_flipped[4..8]);
        assert_ne!(ct[8..], ct_flipped[8..]);
    }

    #[test]
    fn test_cbc_rejects_ragged_input() {
        let err = cbc_encrypt(XorCipher::new(4), &KEY, &[0; 4], &[1, 2, 3, 4, 5, 6]).unwrap_err();
        assert!(matches!(err, CipherError::IncompleteBlock { buffered: 2 }));
    }
}
