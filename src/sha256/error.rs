//! SHA-256 error types

use thiserror::Error;

/// Errors raised by the hashing core and the length-extension toolkit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Compression was handed something other than one 64-byte block
    #[error("invalid block length: expected 64 bytes, got {got}")]
    InvalidBlockLength {
        /// Length that was supplied
        got: usize,
    },

    /// Digest bytes could not be turned back into an 8-word state
    #[error("invalid digest length: expected 32 bytes, got {got}")]
    InvalidDigestLength {
        /// Length that was supplied
        got: usize,
    },

    /// Rotation amount outside `1..32`
    #[error("invalid rotation amount: {amount} (must be in 1..32)")]
    InvalidRotation {
        /// Requested rotation
        amount: u32,
    },

    /// Hashing can only resume on a block boundary
    #[error("cannot resume hashing at byte {len}: not a multiple of 64")]
    UnalignedResume {
        /// Byte count that was requested
        len: u64,
    },

    /// Digest text was not valid hex
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Forged message length does not fit the 64-bit length field
    #[error("forged message length overflows u64 (original {original_len} bytes, suffix {suffix_len} bytes)")]
    LengthOverflow {
        /// Length of the original message
        original_len: u64,
        /// Length of the appended suffix
        suffix_len: usize,
    },

    /// Candidate length range is empty
    #[error("invalid original length range: {min}..={max}")]
    InvalidLengthRange {
        /// Lower bound
        min: u64,
        /// Upper bound
        max: u64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
