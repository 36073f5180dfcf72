//! Typed values that flags write into.
//!
//! A [`FlagValue`] turns a raw command-line token into a typed value stored
//! in a [`Binding`] and renders the current value back to text for the help
//! screen. Short and long flags that stand for the same setting share one
//! [`SharedValue`], so both spellings update the same variable.

mod binding;
mod kinds;

use std::fmt;
use std::rc::Rc;

pub use binding::Binding;
pub use kinds::{
    BoolValue, DurationValue, HelpValue, Numeric, NumberValue, StringListValue, StringValue,
};

use crate::error::ValueError;
use crate::flag::OptionKind;

/// A writable flag value.
///
/// `Display` renders the current value the way the help screen shows it.
pub trait FlagValue: fmt::Display {
    /// Parses `raw` and stores it in the binding.
    ///
    /// May be called more than once when a flag is repeated.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `raw` does not belong to the value's
    /// grammar. The binding is left untouched in that case.
    fn set(&self, raw: &str) -> Result<(), ValueError>;

    /// Translation strategy used by flags built from this value.
    fn option_kind(&self) -> OptionKind {
        OptionKind::RequiredValue
    }

    /// Argument name shown in the help screen, with its leading space.
    fn argument_name(&self) -> &'static str {
        " VALUE"
    }

    /// Returns `true` for the help sentinel.
    fn is_help(&self) -> bool {
        self.option_kind() == OptionKind::AutoHelp
    }
}

/// Reference-counted [`FlagValue`] shared between descriptors.
pub type SharedValue = Rc<dyn FlagValue>;

/// Parses a boolean literal, treating the empty string as `true`.
pub(crate) fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    match raw {
        "" | "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ValueError::Bool {
            input: other.to_owned(),
        }),
    }
}
