//! Trait-based provider mechanism for block cipher primitives.
//!
//! A [`BlockCipher`] is a descriptor for one concrete algorithm: its block
//! and key geometry, key-schedule derivation, and the two single-block
//! transforms. The mode engine is generic over this trait and never
//! inspects the schedule it is handed.

use blockflow_types::{CipherError, Direction};

/// A block cipher primitive (e.g. DES, Blowfish, IDEA).
///
/// Implementations are cheap, stateless values describing one algorithm.
/// All key material lives in the associated [`Schedule`](Self::Schedule)
/// type, which is derived once per key and direction and then shared
/// read-only by the engines that use it. Schedule types are expected to
/// zeroize their round-key material on drop.
pub trait BlockCipher: Send + Sync {
    /// The expanded key schedule this cipher derives from a raw key.
    type Schedule: Send + Sync;

    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Smallest accepted raw key length in bytes.
    fn min_key_size(&self) -> usize;

    /// Largest accepted raw key length in bytes; `None` means unbounded.
    fn max_key_size(&self) -> Option<usize>;

    /// Expand a raw key into the round-key material for one direction.
    ///
    /// Ciphers whose schedules do not depend on direction may ignore the
    /// argument and return the same material for both.
    fn derive_schedule(
        &self,
        key: &[u8],
        direction: Direction,
    ) -> Result<Self::Schedule, CipherError>;

    /// Encrypt exactly one block in-place.
    fn encrypt_block(
        &self,
        schedule: &Self::Schedule,
        block: &mut [u8],
    ) -> Result<(), CipherError>;

    /// Decrypt exactly one block in-place.
    fn decrypt_block(
        &self,
        schedule: &Self::Schedule,
        block: &mut [u8],
    ) -> Result<(), CipherError>;
}
