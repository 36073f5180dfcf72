//! Unit tests for the tokenizer.
#![expect(
    clippy::unwrap_used,
    reason = "tests panic to surface parsing mistakes"
)]

use rstest::{fixture, rstest};

use super::{OptionSpec, OptionType, ParseError, Parsed, Parser};

fn spec(kind: OptionType, prefix: &str, name: &str) -> OptionSpec {
    OptionSpec {
        kind,
        prefix: prefix.to_owned(),
        name: name.to_owned(),
        default_value: String::new(),
    }
}

fn option(spec: &OptionSpec, value: &str) -> Parsed {
    Parsed::Option {
        option: spec.clone(),
        value: value.to_owned(),
    }
}

fn positional(value: &str) -> Parsed {
    Parsed::Positional(value.to_owned())
}

/// A curl-like option table: `-h`, `--help`, `-v`, `-c`, `-f ARG`,
/// `--verbose[=BOOL]`, `--output ARG`.
#[fixture]
fn parser() -> Parser {
    let verbose = OptionSpec {
        default_value: String::from("true"),
        ..spec(OptionType::StandaloneOptionalArg, "--", "verbose")
    };
    Parser {
        options: vec![
            spec(OptionType::EarlyNoArg, "-", "h"),
            spec(OptionType::EarlyNoArg, "--", "help"),
            spec(OptionType::GroupableNoArg, "-", "v"),
            spec(OptionType::GroupableNoArg, "-", "c"),
            spec(OptionType::GroupableRequiredArg, "-", "f"),
            verbose,
            spec(OptionType::StandaloneRequiredArg, "--", "output"),
        ],
        max_positional: usize::MAX,
        ..Parser::default()
    }
}

fn find<'a>(parser: &'a Parser, invocation: &str) -> &'a OptionSpec {
    parser
        .options
        .iter()
        .find(|o| o.invocation() == invocation)
        .unwrap_or_else(|| panic!("no option {invocation}"))
}

#[rstest]
fn parses_cluster_with_trailing_argument(parser: Parser) {
    let parsed = parser.parse(&["-cvf", "FILE", "URL"]).unwrap();
    assert_eq!(
        parsed,
        vec![
            option(find(&parser, "-c"), ""),
            option(find(&parser, "-v"), ""),
            option(find(&parser, "-f"), "FILE"),
            positional("URL"),
        ]
    );
}

#[rstest]
#[case::attached(&["-fFILE"], "FILE")]
#[case::cluster_attached(&["-vfFILE"], "FILE")]
#[case::separate(&["-f", "FILE"], "FILE")]
#[case::dash_value(&["-f", "-"], "-")]
fn groupable_argument_forms(parser: Parser, #[case] args: &[&str], #[case] expected: &str) {
    let parsed = parser.parse(args).unwrap();
    assert_eq!(parsed.last(), Some(&option(find(&parser, "-f"), expected)));
}

#[rstest]
#[case::bare(&["--verbose"], "true")]
#[case::explicit_false(&["--verbose=false"], "false")]
#[case::empty_value(&["--verbose="], "")]
fn optional_argument_forms(parser: Parser, #[case] args: &[&str], #[case] expected: &str) {
    let parsed = parser.parse(args).unwrap();
    assert_eq!(parsed, vec![option(find(&parser, "--verbose"), expected)]);
}

#[rstest]
fn optional_argument_does_not_consume_next_token(parser: Parser) {
    let parsed = parser.parse(&["--verbose", "false"]).unwrap();
    assert_eq!(
        parsed,
        vec![option(find(&parser, "--verbose"), "true"), positional("false")]
    );
}

#[rstest]
#[case::joined(&["--output=FILE"])]
#[case::separate(&["--output", "FILE"])]
fn required_standalone_forms(parser: Parser, #[case] args: &[&str]) {
    let parsed = parser.parse(args).unwrap();
    assert_eq!(parsed, vec![option(find(&parser, "--output"), "FILE")]);
}

#[rstest]
#[case::standalone(&["--output"], "--output")]
#[case::groupable(&["-f"], "-f")]
#[case::end_of_cluster(&["-vcf"], "-f")]
fn reports_missing_argument(parser: Parser, #[case] args: &[&str], #[case] option: &str) {
    assert_eq!(
        parser.parse(args),
        Err(ParseError::MissingArgument {
            option: option.to_owned()
        })
    );
}

#[rstest]
#[case::long(&["--nope"], "--nope")]
#[case::long_with_value(&["--nope=1"], "--nope")]
#[case::short(&["-x"], "-x")]
#[case::inside_cluster(&["-vx"], "-x")]
#[case::prefix_of_known_name(&["--verb"], "--verb")]
fn reports_unknown_option(parser: Parser, #[case] args: &[&str], #[case] option: &str) {
    let err = parser.parse(args).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownOption {
            option: option.to_owned()
        }
    );
    assert_eq!(err.to_string(), format!("unknown option: {option}"));
}

#[rstest]
#[case::short(&["-f", "value", "-h", "-x"], "-h")]
#[case::long(&["-x", "--help"], "--help")]
#[case::inside_cluster(&["-vh"], "-h")]
#[case::cluster_after_unknown(&["-x", "-vh"], "-h")]
#[case::after_unknown_inside_cluster(&["-vxh"], "-h")]
#[case::after_option_value(&["--output", "-x", "--help"], "--help")]
fn early_option_wins(parser: Parser, #[case] args: &[&str], #[case] early: &str) {
    let parsed = parser.parse(args).unwrap();
    assert_eq!(parsed, vec![option(find(&parser, early), "")]);
}

#[rstest]
#[case::cluster_value(&["-f", "-h"], "-f", "-h")]
#[case::cluster_attached_value(&["-vfh"], "-f", "h")]
#[case::long_value(&["--output", "--help"], "--output", "--help")]
fn option_value_is_not_an_early_option(
    parser: Parser,
    #[case] args: &[&str],
    #[case] owner: &str,
    #[case] value: &str,
) {
    let parsed = parser.parse(args).unwrap();
    assert_eq!(parsed.last(), Some(&option(find(&parser, owner), value)));
}

#[rstest]
#[case::unknown_before_help(&["-x", "-h"])]
#[case::cluster_value_before_help(&["-f", "URL", "--help"])]
fn early_option_wins_before_first_positional_without_permutation(
    mut parser: Parser,
    #[case] args: &[&str],
) {
    parser.disable_permute = true;
    let parsed = parser.parse(args).unwrap();
    assert_eq!(parsed.len(), 1);
    assert!(matches!(
        parsed.first(),
        Some(Parsed::Option { option, .. }) if option.kind == OptionType::EarlyNoArg
    ));
}

#[rstest]
fn early_option_rejects_argument(parser: Parser) {
    assert_eq!(
        parser.parse(&["--help=yes"]),
        Err(ParseError::UnexpectedArgument {
            option: String::from("--help")
        })
    );
}

#[rstest]
fn separator_ends_option_processing(parser: Parser) {
    let parsed = parser.parse(&["-v", "--", "-h", "--", "--nope"]).unwrap();
    assert_eq!(
        parsed,
        vec![
            option(find(&parser, "-v"), ""),
            positional("-h"),
            positional("--"),
            positional("--nope"),
        ]
    );
}

#[rstest]
fn lone_dash_is_positional(parser: Parser) {
    let parsed = parser.parse(&["-"]).unwrap();
    assert_eq!(parsed, vec![positional("-")]);
}

#[rstest]
fn permutes_options_and_positionals(parser: Parser) {
    let parsed = parser.parse(&["URL", "-v"]).unwrap();
    assert_eq!(
        parsed,
        vec![positional("URL"), option(find(&parser, "-v"), "")]
    );
}

#[rstest]
fn disable_permute_stops_at_first_positional(mut parser: Parser) {
    parser.disable_permute = true;
    let parsed = parser.parse(&["-v", "URL", "-c", "-h"]).unwrap();
    assert_eq!(
        parsed,
        vec![
            option(find(&parser, "-v"), ""),
            positional("URL"),
            positional("-c"),
            positional("-h"),
        ]
    );
}

#[rstest]
#[case::too_few(1, 2, &[], ParseError::TooFewPositionals { min: 1, got: 0 })]
#[case::too_many(0, 1, &["a", "b"], ParseError::TooManyPositionals { max: 1, got: 2 })]
#[case::none_allowed(0, 0, &["a"], ParseError::TooManyPositionals { max: 0, got: 1 })]
fn checks_positional_bounds(
    mut parser: Parser,
    #[case] min: usize,
    #[case] max: usize,
    #[case] args: &[&str],
    #[case] expected: ParseError,
) {
    parser.min_positional = min;
    parser.max_positional = max;
    assert_eq!(parser.parse(args), Err(expected));
}

#[test]
fn too_few_message_matches_counts() {
    let parser = Parser {
        min_positional: 1,
        max_positional: 1,
        ..Parser::default()
    };
    let err = parser.parse::<&str>(&[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "too few positional arguments: expected at least 1, got 0"
    );
}

#[test]
fn assumes_gnu_prefixes_without_options() {
    let parser = Parser {
        max_positional: usize::MAX,
        ..Parser::default()
    };
    assert_eq!(
        parser.parse(&["--x"]),
        Err(ParseError::UnknownOption {
            option: String::from("--x")
        })
    );
    assert_eq!(parser.parse(&["a"]), Ok(vec![positional("a")]));
}

#[test]
fn dig_style_plus_options() {
    let https = OptionSpec {
        default_value: String::from("/dns-query"),
        ..spec(OptionType::StandaloneOptionalArg, "+", "https")
    };
    let short = OptionSpec {
        default_value: String::from("true"),
        ..spec(OptionType::StandaloneOptionalArg, "+", "short")
    };
    let parser = Parser {
        options: vec![https.clone(), short.clone()],
        max_positional: usize::MAX,
        ..Parser::default()
    };
    let parsed = parser
        .parse(&["+short", "+https=/custom", "example.com", "+https"])
        .unwrap();
    assert_eq!(
        parsed,
        vec![
            option(&short, "true"),
            option(&https, "/custom"),
            positional("example.com"),
            option(&https, "/dns-query"),
        ]
    );
    assert_eq!(
        parser.parse(&["+nope"]),
        Err(ParseError::UnknownOption {
            option: String::from("+nope")
        })
    );
}

#[test]
fn go_style_single_dash_long_names() {
    let name = spec(OptionType::StandaloneRequiredArg, "-", "name");
    let parser = Parser {
        options: vec![name.clone()],
        ..Parser::default()
    };
    assert_eq!(
        parser.parse(&["-name", "x"]),
        Ok(vec![option(&name, "x")])
    );
    assert_eq!(
        parser.parse(&["-name=y"]),
        Ok(vec![option(&name, "y")])
    );
}
