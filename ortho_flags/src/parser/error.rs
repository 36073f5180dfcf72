//! Syntax and bounds errors reported by the tokenizer.

use thiserror::Error;

/// The command line does not match the declared options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A token looks like an option but no option has that name.
    #[error("unknown option: {option}")]
    UnknownOption {
        /// Offending token, without any `=value` suffix.
        option: String,
    },

    /// An option requiring an argument ended the command line.
    #[error("option requires an argument: {option}")]
    MissingArgument {
        /// Invocation of the option.
        option: String,
    },

    /// An option taking no argument was given `=value`.
    #[error("option does not take an argument: {option}")]
    UnexpectedArgument {
        /// Invocation of the option.
        option: String,
    },

    /// Fewer positional arguments than the configured minimum.
    #[error("too few positional arguments: expected at least {min}, got {got}")]
    TooFewPositionals {
        /// Configured minimum.
        min: usize,
        /// Number of positional arguments found.
        got: usize,
    },

    /// More positional arguments than the configured maximum.
    #[error("too many positional arguments: expected at most {max}, got {got}")]
    TooManyPositionals {
        /// Configured maximum.
        max: usize,
        /// Number of positional arguments found.
        got: usize,
    },
}
