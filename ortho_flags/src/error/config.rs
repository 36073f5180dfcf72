//! Configuration faults detected while translating flag declarations.

use thiserror::Error;

/// Mistakes in the flag declarations themselves.
///
/// These are never caused by the user's command line. [`crate::FlagSet::parse`]
/// panics with the rendered message whatever the
/// [`crate::ErrorHandling`] policy is, so they surface during development.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A flag was declared without a name.
    #[error("flag name must not be empty (prefix {prefix:?})")]
    EmptyName {
        /// Prefix of the offending flag.
        prefix: String,
    },

    /// A flag was declared with an empty prefix.
    #[error("flag prefix must not be empty for flag {name:?}")]
    EmptyPrefix {
        /// Name of the offending flag.
        name: String,
    },

    /// A registration helper received neither a short nor a long name.
    #[error("flag must have a short or a long name")]
    Unnamed,

    /// Two flags translate to the same option name.
    #[error("duplicate flag name {name:?}: {first} conflicts with {second}")]
    DuplicateName {
        /// Shared option name.
        name: String,
        /// Invocation of the flag registered first.
        first: String,
        /// Invocation of the flag registered second.
        second: String,
    },

    /// The positional argument bounds cannot be satisfied.
    #[error("minimum positional arguments ({min}) exceeds maximum ({max})")]
    PositionalBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}
