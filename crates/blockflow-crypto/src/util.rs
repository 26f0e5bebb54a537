//! Byte-buffer helpers shared by the mode engine and cipher primitives.

/// XOR `src` into `dst` in place. The slices must have equal length.
pub fn xor_bytes(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Shift `reg` left by `shift` bytes, splicing `tail[..shift]` in on the
/// right: the leftmost `shift` bytes are dropped, the remaining bytes move
/// to the front, and the tail fills the vacated positions.
///
/// `shift == reg.len()` replaces the register contents entirely.
pub fn shift_register(reg: &mut [u8], tail: &[u8], shift: usize) {
    debug_assert!(shift <= reg.len());
    debug_assert!(shift <= tail.len());
    let len = reg.len();
    if shift == len {
        reg.copy_from_slice(&tail[..len]);
        return;
    }
    reg.copy_within(shift.., 0);
    reg[len - shift..].copy_from_slice(&tail[..shift]);
}

/// Byte-swap every aligned 2-byte word of `buf` in place.
///
/// A trailing byte that does not fill a word is left untouched. Cipher
/// primitives that consume little-endian 16-bit words call this around
/// the block transform.
pub fn swap_bytes_u16(buf: &mut [u8]) {
    for word in buf.chunks_exact_mut(2) {
        word.swap(0, 1);
    }
}

/// Byte-swap every aligned 4-byte word of `buf` in place.
///
/// Trailing bytes that do not fill a word are left untouched.
pub fn swap_bytes_u32(buf: &mut [u8]) {
    for word in buf.chunks_exact_mut(4) {
        word.reverse();
    }
}
