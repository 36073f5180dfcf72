//! Flag descriptors and their translation into tokenizer options.
//!
//! A descriptor couples presentation metadata (prefix, name, description,
//! argument name) with a [`SharedValue`] and an [`OptionKind`] telling the
//! flag set which [`OptionSpec`] to hand to the tokenizer. Short flags
//! ([`ShortFlag`]) may be clustered behind one prefix, long flags
//! ([`LongFlag`]) always stand alone.
//!
//! Descriptions may mention the argument in backticks, as in
//! ``"Write output to `FILE`."``; the first all-caps token found that way in
//! the first paragraph replaces the default argument name in the help
//! screen. The `@DEFAULT_VALUE@` placeholder inside any paragraph is
//! replaced with the bound value when the help screen is rendered.

mod long;
mod short;

use std::sync::LazyLock;

use regex::Regex;

pub use long::LongFlag;
pub use short::ShortFlag;

use crate::error::ConfigError;
use crate::parser::OptionSpec;
use crate::value::SharedValue;

/// Strategy used to translate a descriptor into an [`OptionSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Help flag: matched early, stops parsing and requests help.
    AutoHelp,
    /// Boolean switch: groupable when short, `--name[=BOOL]` when long.
    Boolean,
    /// Flag that always takes an argument.
    RequiredValue,
    /// Flag whose argument is optional and must be joined with `=`.
    OptionalValue,
}

/// Behaviour shared by [`ShortFlag`] and [`LongFlag`].
pub trait Descriptor {
    /// Builds the option handed to the tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPrefix`] or [`ConfigError::EmptyName`]
    /// when the descriptor cannot be invoked.
    fn make_option(&self) -> Result<OptionSpec, ConfigError>;

    /// Prefix followed by name, such as `-v` or `--verbose`.
    fn invocation(&self) -> String;

    /// Synopsis for the help screen, such as `-o FILE` or `--verbose[=true|false]`.
    fn usage(&self) -> String;

    /// Help paragraphs.
    fn description(&self) -> &[String];

    /// Value written when the flag is parsed.
    fn value(&self) -> &SharedValue;
}

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static ARGUMENT_NAME_IN_DOCS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("`([A-Z0-9_-]+)`").expect("argument name pattern compiles"));

/// Returns the backtick-quoted argument name found in the first paragraph,
/// or `default` when there is none.
///
/// Only defaults starting with a space, the marker of a flag that takes a
/// separate argument, are replaced.
#[must_use]
pub fn argument_name_from_docs(description: &[String], default: &str) -> String {
    if !default.starts_with(' ') {
        return default.to_owned();
    }
    description
        .first()
        .and_then(|paragraph| ARGUMENT_NAME_IN_DOCS.captures(paragraph))
        .and_then(|captures| captures.get(1))
        .map_or_else(|| default.to_owned(), |name| format!(" {}", name.as_str()))
}

/// Argument name used by flags whose argument is optional, such as `[=STRING]`.
fn optional_argument_name(value: &SharedValue) -> String {
    format!("[={}]", value.argument_name().trim_start())
}
