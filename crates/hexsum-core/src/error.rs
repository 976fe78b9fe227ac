//! # Error Types
//!
//! Computing a digest cannot fail. The only fallible operations in this
//! crate parse hex text back into bytes, and they report through
//! [`DigestError`].

use thiserror::Error;

/// Errors from parsing hex-encoded digests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The hex string does not have the length the target type requires.
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required number of hex characters.
        expected: usize,
        /// Number of characters actually supplied.
        actual: usize,
    },

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {found:?} at position {position}")]
    InvalidHexChar {
        /// Zero-based character offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}
