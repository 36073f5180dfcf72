//! Usage screen and error message rendering.
//!
//! A [`UsagePrinter`] renders the help screen shown for
//! [`crate::FlagsError::HelpRequested`] and the short message printed for
//! any other error. Both work on [`UsageFlag`] entries: flags whose
//! rendered descriptions are identical, typically the short and long
//! spelling of one setting, collapse into a single entry such as
//! `-h, --help`.

mod printer;
mod wrap;

pub use printer::DefaultUsagePrinter;

use crate::error::FlagsError;
use crate::flag::Descriptor;
use crate::flagset::FlagSet;
use crate::value::SharedValue;

/// Placeholder replaced with the current value of the flag in descriptions,
/// as in ``"Timeout (default: `@DEFAULT_VALUE@`)."``.
pub const DEFAULT_VALUE_PLACEHOLDER: &str = "@DEFAULT_VALUE@";

/// Renders the help screen and error messages of a [`FlagSet`].
pub trait UsagePrinter {
    /// Full help screen.
    fn usage(&self, flags: &FlagSet) -> String;

    /// Message printed for `err` under [`crate::ErrorHandling::ExitOnError`].
    fn error(&self, flags: &FlagSet, err: &FlagsError) -> String;
}

/// One entry of the help screen's flag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageFlag {
    /// Synopsis of the first flag with this description, such as `-o FILE`.
    pub synopsis: String,
    /// Synopses of the later flags with the same description.
    pub aliases: Vec<String>,
    /// Wrapped and indented description.
    pub description: String,
}

impl UsageFlag {
    /// Synopsis followed by the aliases, separated by `", "`.
    #[must_use]
    pub fn invocations(&self) -> String {
        std::iter::once(&self.synopsis)
            .chain(&self.aliases)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Renders description paragraphs for the flag list.
///
/// [`DEFAULT_VALUE_PLACEHOLDER`] is replaced with the current value, then
/// each paragraph is wrapped and indented; paragraphs are separated by a
/// blank line.
#[must_use]
pub fn render_description(description: &[String], value: &SharedValue) -> String {
    description
        .iter()
        .map(|text| {
            if text.contains(DEFAULT_VALUE_PLACEHOLDER) {
                let current = value.to_string();
                wrap::paragraph(
                    &text.replace(DEFAULT_VALUE_PLACEHOLDER, &current),
                    wrap::FLAG_INDENT,
                )
            } else {
                wrap::paragraph(text, wrap::FLAG_INDENT)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl FlagSet {
    /// Flag list entries in registration order, short flags first.
    ///
    /// Flags without a description are left out. A flag whose rendered
    /// description matches an earlier entry becomes one of its aliases.
    #[must_use]
    pub fn usage_flags(&self) -> Vec<UsageFlag> {
        let mut entries: Vec<UsageFlag> = Vec::new();
        for descriptor in self.descriptors() {
            let description = render_description(descriptor.description(), descriptor.value());
            if description.is_empty() {
                continue;
            }
            let synopsis = descriptor.usage();
            let Some(primary) = entries
                .iter_mut()
                .find(|entry| entry.description == description)
            else {
                entries.push(UsageFlag {
                    synopsis,
                    aliases: Vec::new(),
                    description,
                });
                continue;
            };
            primary.aliases.push(synopsis);
        }
        entries
    }

    /// Command line showing the help screen, such as `curl --help`.
    ///
    /// Help flags are grouped by rendered description like the flag list.
    /// With exactly one group the long spelling is preferred; with none, or
    /// with several unrelated help flags, there is no single answer and
    /// `None` is returned.
    #[must_use]
    pub fn help_invocation(&self) -> Option<String> {
        let shorts: Vec<(String, String)> = self
            .short_flags
            .iter()
            .filter(|flag| flag.value.is_help())
            .map(help_entry)
            .collect();
        let longs: Vec<(String, String)> = self
            .long_flags
            .iter()
            .filter(|flag| flag.value.is_help())
            .map(help_entry)
            .collect();

        let mut descriptions = shorts.iter().chain(&longs).map(|(text, _)| text);
        let first = descriptions.next()?;
        if descriptions.any(|text| text != first) {
            return None;
        }
        let (_, invocation) = longs.first().or_else(|| shorts.first())?;
        Some(format!("{} {invocation}", self.program_name))
    }
}

fn help_entry(flag: &impl Descriptor) -> (String, String) {
    (
        render_description(flag.description(), flag.value()),
        flag.invocation(),
    )
}

#[cfg(test)]
mod tests;
