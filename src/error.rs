//! Error types for the block codec.

use thiserror::Error;

/// Errors produced while encoding or correcting codewords.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input violates the codec's contract (e.g. a character outside
    /// the 8-bit symbol range, or a bit sequence that is not 16 bits long).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The syndrome matched neither a single matrix column nor the XOR of
    /// any column pair, so the fault pattern could not be identified.
    #[error("uncorrectable codeword: syndrome {syndrome:#04x} matches no single column or column pair")]
    Uncorrectable {
        /// The non-zero syndrome that failed to resolve, packed with row 0
        /// in the most significant bit.
        syndrome: u8,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
