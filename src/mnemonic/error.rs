//! Mnemonic encoding errors.

use crate::checksum::HashError;
use crate::entropy::EntropyError;
use thiserror::Error;

/// Errors that can occur while producing a mnemonic.
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// The requested word count is not one of 12, 15, 18, 21, or 24.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    /// Caller-supplied entropy has a non-standard length.
    #[error("invalid entropy length {0} bytes, must be 16, 20, 24, 28, or 32")]
    InvalidEntropyLength(usize),

    /// The randomness provider could not supply the requested bytes.
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(#[from] EntropyError),

    /// The checksum digest could not be computed.
    #[error("checksum hash failure: {0}")]
    HashFailure(#[from] HashError),

    /// The assembled bit sequence did not have the expected shape.
    #[error("bit layout invariant violated: {0}")]
    BitLayout(String),
}
