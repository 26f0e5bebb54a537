use crate::algorithm::Mode;

/// Errors produced by option resolution, cipher primitives, and the mode
/// engine.
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    // Option resolution errors
    #[error("direction not set")]
    MissingDirection,
    #[error("mode not set")]
    MissingMode,
    #[error("key not set")]
    MissingKey,
    #[error("invalid key length: expected {min}..{}, got {got}", .max.map_or_else(String::new, |m| format!("={m}")))]
    InvalidKeyLength {
        min: usize,
        max: Option<usize>,
        got: usize,
    },
    #[error("iv required for {mode:?} mode")]
    IvRequired { mode: Mode },
    #[error("invalid iv length: expected {expected}, got {got}")]
    InvalidIvLength { expected: usize, got: usize },
    #[error("shift width required for {mode:?} mode")]
    ShiftWidthRequired { mode: Mode },
    #[error("invalid shift width: got {got}, block size is {block_size}")]
    InvalidShiftWidth { block_size: usize, got: usize },

    // Cipher primitive errors
    #[error("invalid block length: expected {expected}, got {got}")]
    InvalidBlockLength { expected: usize, got: usize },

    // Stream errors
    #[error("incomplete final block: {buffered} bytes buffered")]
    IncompleteBlock { buffered: usize },
    #[error("sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CipherError {
    /// Wrap a sink failure for propagation out of `feed`.
    pub fn sink(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        CipherError::Sink(err.into())
    }
}
