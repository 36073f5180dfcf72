//! The default usage screen layout.

use super::UsagePrinter;
use super::wrap::{INDENT, paragraph};
use crate::error::FlagsError;
use crate::flagset::FlagSet;

/// Usage screen with `Usage`, `Description`, `Flags` and `Examples`
/// sections.
///
/// Section contents are indented by four columns and flag descriptions by
/// eight; prose is wrapped at column 72. Paragraphs starting with four
/// spaces are printed as they are, which suits command-line examples.
///
/// # Examples
///
/// ```
/// use ortho_flags::{Binding, DefaultUsagePrinter, ErrorHandling, FlagSet};
///
/// let mut printer = DefaultUsagePrinter::new();
/// printer.add_description(["Transfers a URL."]);
///
/// let mut flags = FlagSet::new("curl", ErrorHandling::ContinueOnError);
/// flags.auto_help(('h', "help"), ["Show this help message and exit."]);
/// flags.set_min_max_positional_args(1, 1);
/// flags.usage_printer = Box::new(printer);
///
/// let usage = flags.usage_string();
/// assert!(usage.starts_with("\nUsage\n\n    curl [flags] arg\n"));
/// assert!(usage.contains("\n    -h, --help\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultUsagePrinter {
    /// Paragraphs of the `Description` section.
    pub description: Vec<String>,

    /// Paragraphs of the `Examples` section.
    pub examples: Vec<String>,

    /// Replaces the positional argument hint derived from the bounds,
    /// such as `URL` or `[FILE ...]`.
    pub positional_arguments_usage: String,
}

impl DefaultUsagePrinter {
    /// Creates a printer without description or examples.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: Vec::new(),
            examples: Vec::new(),
            positional_arguments_usage: String::new(),
        }
    }

    /// Appends paragraphs to the `Description` section.
    pub fn add_description<I, S>(&mut self, paragraphs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description.extend(paragraphs.into_iter().map(Into::into));
        self
    }

    /// Appends paragraphs to the `Examples` section.
    pub fn add_examples<I, S>(&mut self, paragraphs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples.extend(paragraphs.into_iter().map(Into::into));
        self
    }

    /// Positional argument hint with its leading space, or an empty string
    /// when no positional argument is accepted.
    #[must_use]
    pub fn positional_usage(&self, flags: &FlagSet) -> String {
        let (min, max) = (flags.min_positional_args, flags.max_positional_args);
        if max < min || max == 0 {
            return String::new();
        }
        if !self.positional_arguments_usage.is_empty() {
            return format!(" {}", self.positional_arguments_usage);
        }
        let hint = match (min, max) {
            (0, 1) => "[arg]",
            (1, 1) => "arg",
            (0, _) => "[arg ...]",
            _ => "arg [arg ...]",
        };
        format!(" {hint}")
    }
}

impl UsagePrinter for DefaultUsagePrinter {
    fn usage(&self, flags: &FlagSet) -> String {
        let entries = flags.usage_flags();
        let flags_hint = if entries.is_empty() { "" } else { " [flags]" };
        let mut out = String::new();

        section(&mut out, "Usage");
        section(
            &mut out,
            &format!(
                "{INDENT}{}{flags_hint}{}",
                flags.program_name,
                self.positional_usage(flags)
            ),
        );

        if !self.description.is_empty() {
            section(&mut out, "Description");
            for text in &self.description {
                section(&mut out, &paragraph(text, INDENT));
            }
        }

        if !entries.is_empty() {
            section(&mut out, "Flags");
            for entry in &entries {
                section(&mut out, &format!("{INDENT}{}", entry.invocations()));
                section(&mut out, &entry.description);
            }
        }

        if !self.examples.is_empty() {
            section(&mut out, "Examples");
            for text in &self.examples {
                section(&mut out, &paragraph(text, INDENT));
            }
        }

        out.push('\n');
        out
    }

    fn error(&self, flags: &FlagSet, err: &FlagsError) -> String {
        let program = &flags.program_name;
        let mut out = format!("{program}: {err}\n");
        if let Some(invocation) = flags.help_invocation() {
            out.push_str(&format!(
                "{program}: try `{invocation}' for more help.\n"
            ));
        }
        out
    }
}

/// Appends `block` surrounded by newlines, so consecutive blocks are
/// separated by one blank line.
fn section(out: &mut String, block: &str) {
    out.push('\n');
    out.push_str(block);
    out.push('\n');
}
