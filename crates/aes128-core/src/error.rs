//! Error types for the cipher's input validation.

use thiserror::Error;

/// Failures the cipher can report.
///
/// Both variants are caller-input shape checks, raised before any round
/// transform runs; there are no internal fault paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AesError {
    /// The supplied key is not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },
    /// The supplied block is not exactly 16 bytes.
    #[error("AES block must be 16 bytes, got {len}")]
    InvalidBlockLength {
        /// Length of the rejected block.
        len: usize,
    },
}

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, AesError>;
