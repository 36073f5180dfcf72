//! Runs the `hello_flags` binary to check exit statuses and stream routing
//! under the exit-on-error policy.

use anyhow::{Context, Result, ensure};
use assert_cmd::Command;
use rstest::rstest;

/// Exit status, stdout and stderr of one run.
struct Run {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn run(args: &[&str]) -> Result<Run> {
    #[expect(
        deprecated,
        reason = "cargo_bin is the standard assert_cmd API"
    )]
    let mut cmd = Command::cargo_bin("hello_flags").context("binary should exist")?;
    cmd.env_remove("RUST_LOG");
    cmd.env("RUST_BACKTRACE", "0");
    cmd.args(args);
    let output = cmd.output().context("command should execute")?;
    Ok(Run {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[rstest]
#[case::long(&["--help"])]
#[case::short(&["-h"])]
#[case::amid_errors(&["--nope", "-h"])]
fn help_goes_to_stdout_with_status_zero(#[case] args: &[&str]) -> Result<()> {
    let run = run(args)?;
    ensure!(run.code == Some(0), "exit status {:?}", run.code);
    ensure!(run.stdout.starts_with("\nUsage\n\n    hello_flags [flags] URL\n"));
    ensure!(run.stdout.contains("\n    -h, --help\n"), "stdout was {}", run.stdout);
    ensure!(
        run.stdout.contains("\n        Default: `30s`.\n"),
        "stdout was {}",
        run.stdout
    );
    ensure!(run.stderr.is_empty(), "stderr was {}", run.stderr);
    Ok(())
}

#[rstest]
#[case::unknown(&["--nope", "u"], "hello_flags: unknown option: --nope")]
#[case::missing_url(
    &["-v"],
    "hello_flags: too few positional arguments: expected at least 1, got 0"
)]
#[case::bad_value(
    &["--retry", "many", "u"],
    "hello_flags: invalid value for --retry: invalid u32 value \"many\": invalid digit found in string"
)]
fn errors_go_to_stderr_with_status_two(
    #[case] args: &[&str],
    #[case] first_line: &str,
) -> Result<()> {
    let run = run(args)?;
    ensure!(run.code == Some(2), "exit status {:?}", run.code);
    ensure!(
        run.stderr == format!("{first_line}\nhello_flags: try `hello_flags --help' for more help.\n"),
        "stderr was {}",
        run.stderr
    );
    ensure!(run.stdout.is_empty(), "stdout was {}", run.stdout);
    Ok(())
}

#[rstest]
fn success_prints_the_request() -> Result<()> {
    let run = run(&["https://example.com/", "-vo", "page.html"])?;
    ensure!(run.code == Some(0), "exit status {:?}", run.code);
    ensure!(run.stdout.starts_with("GET https://example.com/\n"));
    ensure!(run.stdout.contains("output: page.html\n"));
    ensure!(run.stdout.contains("verbose: true\n"));
    ensure!(run.stderr.is_empty(), "stderr was {}", run.stderr);
    Ok(())
}
