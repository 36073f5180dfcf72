//! Primary error enum returned by [`crate::FlagSet::parse`].

use thiserror::Error;

use super::ValueError;
use crate::parser::ParseError;

/// Outcome of a failed [`crate::FlagSet::parse`].
///
/// [`FlagsError::HelpRequested`] is not a failure: it tells the caller that
/// a help flag was seen. Under [`crate::ErrorHandling::ExitOnError`] it
/// becomes the usage screen and exit status `0` and is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FlagsError {
    /// The command line is syntactically invalid.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A flag received a value its type rejected.
    #[error("invalid value for {flag}: {source}")]
    Value {
        /// Invocation of the flag, such as `--count`.
        flag: String,
        /// Conversion failure reported by the value.
        #[source]
        source: ValueError,
    },

    /// The user asked for help.
    #[error("help requested")]
    HelpRequested,
}

impl FlagsError {
    /// Returns `true` for [`FlagsError::HelpRequested`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_flags::{ErrorHandling, FlagSet};
    ///
    /// let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError);
    /// flags.auto_help(('h', "help"), ["Show this help message and exit."]);
    /// let err = flags.parse(["--help"]).unwrap_err();
    /// assert!(err.is_help_request());
    /// ```
    #[must_use]
    pub const fn is_help_request(&self) -> bool {
        matches!(self, Self::HelpRequested)
    }
}
