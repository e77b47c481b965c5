//! Error types for placeholder-hash encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a placeholder hash.
///
/// Every error is terminal for the call that raised it; no partial hash or
/// image is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacehashError {
    /// A component count outside the supported range was requested.
    #[error("{component} component count {value} must be within 1..=9")]
    InvalidParameter {
        /// Which component axis ("x" or "y").
        component: &'static str,
        /// The rejected count.
        value: u32,
    },

    /// A base83 encode was requested with too few digits for the value.
    #[error("value {value} does not fit in {length} base83 digits")]
    InvalidLength {
        /// The value that was to be encoded.
        value: u64,
        /// The requested digit count.
        length: usize,
    },

    /// A character outside the base83 alphabet was encountered while decoding.
    #[error("character {0:?} is not a base83 digit")]
    InvalidCharacter(char),

    /// The hash string is structurally malformed.
    #[error("malformed hash: {reason}")]
    InvalidHash {
        /// What was wrong with the hash.
        reason: &'static str,
    },

    /// An internal consistency check failed while assembling a hash.
    ///
    /// Seeing this indicates a bug in the encoder, not bad input.
    #[error("encoder invariant violated: {reason}")]
    EncodingInvariant {
        /// The violated invariant.
        reason: &'static str,
    },
}
