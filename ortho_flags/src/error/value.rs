//! Conversion failures raised by typed flag values.

use thiserror::Error;

/// A raw token that could not be converted into the bound type.
///
/// Values never modify their binding when they return this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The token is not a recognised boolean literal.
    #[error("invalid boolean value {input:?}")]
    Bool {
        /// Rejected token.
        input: String,
    },

    /// The token is not a number of the expected type.
    #[error("invalid {kind} value {input:?}: {reason}")]
    Number {
        /// Rejected token.
        input: String,
        /// Name of the numeric type, such as `u16`.
        kind: &'static str,
        /// Explanation reported by the numeric parser.
        reason: String,
    },

    /// The token is not a duration literal.
    #[error("invalid duration value {input:?}: {reason}")]
    Duration {
        /// Rejected token.
        input: String,
        /// Explanation reported by the duration parser.
        reason: String,
    },
}
