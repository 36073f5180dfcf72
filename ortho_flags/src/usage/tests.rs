//! Unit tests for the usage screen, alias merging and error hints.

use std::rc::Rc;

use rstest::rstest;

use super::wrap::{FLAG_INDENT, INDENT, paragraph, wrap};
use super::{DefaultUsagePrinter, UsageFlag, UsagePrinter};
use crate::error::FlagsError;
use crate::flag::{LongFlag, ShortFlag};
use crate::flagset::{ErrorHandling, FlagSet};
use crate::parser::ParseError;
use crate::value::{Binding, HelpValue, StringValue};

fn curl_flags(output: &Binding<String>) -> FlagSet {
    let mut flags = FlagSet::new("curl", ErrorHandling::ContinueOnError);
    flags.auto_help(('h', "help"), ["Show this help message and exit."]);
    flags.string_var(
        output,
        ('o', "output"),
        ["Write output to `FILE`.", "Default: `@DEFAULT_VALUE@`."],
    );
    flags.set_min_max_positional_args(1, 1);
    flags
}

#[test]
fn renders_full_usage_screen() {
    let output = Binding::new(String::from("-"));
    let mut flags = curl_flags(&output);
    let mut printer = DefaultUsagePrinter::new();
    printer
        .add_description(["Transfers a URL."])
        .add_examples([
            "Fetch a page:",
            "    curl -o index.html https://example.com/",
        ]);
    flags.usage_printer = Box::new(printer);

    let expected = concat!(
        "\nUsage\n",
        "\n    curl [flags] arg\n",
        "\nDescription\n",
        "\n    Transfers a URL.\n",
        "\nFlags\n",
        "\n    -h, --help\n",
        "\n        Show this help message and exit.\n",
        "\n    -o FILE, --output FILE\n",
        "\n        Write output to `FILE`.\n",
        "\n        Default: `-`.\n",
        "\nExamples\n",
        "\n    Fetch a page:\n",
        "\n        curl -o index.html https://example.com/\n",
        "\n",
    );
    assert_eq!(flags.usage_string(), expected);
}

#[test]
fn placeholder_tracks_the_live_value() {
    let output = Binding::new(String::from("-"));
    let flags = curl_flags(&output);
    output.replace(String::from("out.txt"));
    assert!(flags.usage_string().contains("Default: `out.txt`."));
}

#[test]
fn merges_aliases_sharing_a_description() {
    let output = Binding::new(String::from("-"));
    let flags = curl_flags(&output);
    let entries = flags.usage_flags();
    assert_eq!(entries.len(), 2);
    let help = entries.first().map(UsageFlag::invocations);
    assert_eq!(help.as_deref(), Some("-h, --help"));
}

#[test]
fn keeps_distinct_descriptions_apart() {
    let value: crate::value::SharedValue = Rc::new(StringValue::new(&Binding::new(String::new())));
    let mut flags = FlagSet::new("x", ErrorHandling::ContinueOnError);
    flags.add_short_flag(ShortFlag::new(Rc::clone(&value), 'n', ["Short spelling."]));
    flags.add_long_flag(LongFlag::new(value, "name", ["Long spelling."]));
    let synopses: Vec<String> = flags
        .usage_flags()
        .into_iter()
        .map(|entry| entry.invocations())
        .collect();
    assert_eq!(synopses, ["-n STRING", "--name STRING"]);
}

#[test]
fn hides_flags_without_description() {
    let mut flags = FlagSet::new("quiet", ErrorHandling::ContinueOnError);
    flags.bool_var(&Binding::new(false), ('d', "debug"), Vec::<String>::new());
    assert!(flags.usage_flags().is_empty());
    assert!(flags.usage_string().starts_with("\nUsage\n\n    quiet\n"));
}

#[rstest]
#[case::none(0, 0, "", "")]
#[case::optional_one(0, 1, "", " [arg]")]
#[case::exactly_one(1, 1, "", " arg")]
#[case::optional_many(0, usize::MAX, "", " [arg ...]")]
#[case::at_least_one(1, usize::MAX, "", " arg [arg ...]")]
#[case::exactly_two(2, 2, "", " arg [arg ...]")]
#[case::inverted(2, 1, "", "")]
#[case::override_text(1, 1, "URL", " URL")]
#[case::override_ignored_without_positionals(0, 0, "URL", "")]
fn positional_usage_vocabulary(
    #[case] min: usize,
    #[case] max: usize,
    #[case] custom: &str,
    #[case] expected: &str,
) {
    let mut flags = FlagSet::new("p", ErrorHandling::ContinueOnError);
    flags.set_min_max_positional_args(min, max);
    let printer = DefaultUsagePrinter {
        positional_arguments_usage: custom.to_owned(),
        ..DefaultUsagePrinter::new()
    };
    assert_eq!(printer.positional_usage(&flags), expected);
}

fn unknown(option: &str) -> FlagsError {
    FlagsError::Parse(ParseError::UnknownOption {
        option: option.to_owned(),
    })
}

#[test]
fn error_hint_prefers_long_help() {
    let output = Binding::new(String::new());
    let flags = curl_flags(&output);
    let message = DefaultUsagePrinter::new().error(&flags, &unknown("-x"));
    assert_eq!(
        message,
        "curl: unknown option: -x\ncurl: try `curl --help' for more help.\n"
    );
}

#[test]
fn error_hint_falls_back_to_short_help() {
    let mut flags = FlagSet::new("ls", ErrorHandling::ContinueOnError);
    flags.auto_help('?', ["Show help."]);
    assert_eq!(flags.help_invocation().as_deref(), Some("ls -?"));
}

#[test]
fn error_hint_omitted_without_single_help_group() {
    let mut flags = FlagSet::new("tool", ErrorHandling::ContinueOnError);
    let message = DefaultUsagePrinter::new().error(&flags, &unknown("--x"));
    assert_eq!(message, "tool: unknown option: --x\n");

    flags.add_short_flag(ShortFlag::new(Rc::new(HelpValue), 'h', ["Brief help."]));
    flags.add_long_flag(LongFlag::new(Rc::new(HelpValue), "help", ["Full help."]));
    assert_eq!(flags.help_invocation(), None);
}

#[test]
fn wraps_at_column_72_with_indent() {
    let text = "word ".repeat(30);
    let wrapped = wrap(&text, 72, FLAG_INDENT);
    assert!(wrapped.lines().count() > 1);
    for line in wrapped.lines() {
        assert!(line.starts_with(FLAG_INDENT));
        assert!(line.chars().count() <= 72, "line too long: {line:?}");
    }
}

#[test]
fn long_word_sits_alone() {
    let word = "x".repeat(80);
    let wrapped = wrap(&format!("a {word} b"), 72, INDENT);
    assert_eq!(wrapped, format!("    a\n    {word}\n    b"));
}

#[test]
fn preformatted_paragraph_is_not_wrapped() {
    let text = "    curl -v   https://example.com/\n    curl -h";
    assert_eq!(
        paragraph(text, INDENT),
        "        curl -v   https://example.com/\n        curl -h"
    );
}
