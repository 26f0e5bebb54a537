#![doc = "Block-cipher mode-of-operation engine: ECB, CBC, CFB, and OFB framing over pluggable block primitives."]

// Core trait
pub mod provider;

// Byte-buffer helpers
pub mod util;

// Option validation and key-schedule resolution
pub mod options;

// Modes of operation
pub mod modes;

pub mod cipher {
    //! Unified cipher interface.
    pub use super::modes::engine::ModeEngine;
    pub use super::options::{CipherConfig, CipherOptions};
    pub use super::provider::BlockCipher;
}

#[cfg(test)]
pub(crate) mod testcipher;
