//! A curl-like command line wired with `ortho_flags`.
//!
//! The binary parses its arguments with [`ErrorHandling::ExitOnError`] and
//! prints the request it would perform. Keeping the declarations here lets
//! the tests build the same flag set with a different policy.

use std::time::Duration;

use ortho_flags::{Binding, DefaultUsagePrinter, ErrorHandling, FlagSet};

/// Name used in the usage screen and error messages.
pub const PROGRAM_NAME: &str = "hello_flags";

/// Variables bound to the command-line flags.
#[derive(Debug, Clone)]
pub struct Options {
    /// `--compressed`.
    pub compressed: Binding<bool>,
    /// `-H`, `--header`; repeatable.
    pub headers: Binding<Vec<String>>,
    /// `-m`, `--max-time`.
    pub max_time: Binding<Duration>,
    /// `-o`, `--output`.
    pub output: Binding<String>,
    /// `--retry`.
    pub retries: Binding<u32>,
    /// `-v`, `--verbose`.
    pub verbose: Binding<bool>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            compressed: Binding::new(false),
            headers: Binding::new(Vec::new()),
            max_time: Binding::new(Duration::from_secs(30)),
            output: Binding::new(String::from("-")),
            retries: Binding::new(0),
            verbose: Binding::new(false),
        }
    }
}

impl Options {
    /// Declares the flags bound to these options.
    #[must_use]
    pub fn flag_set(&self, error_handling: ErrorHandling) -> FlagSet {
        let mut printer = DefaultUsagePrinter::new();
        printer
            .add_description([
                "hello_flags pretends to transfer data from the given URL and prints \
                 what it would have done.",
            ])
            .add_examples([
                "Save a page to a file:",
                "    hello_flags -o index.html https://example.com/",
                "Combine short flags and pass headers:",
                "    hello_flags -vH 'Accept: */*' --retry=3 https://example.com/",
            ]);
        printer.positional_arguments_usage = String::from("URL");

        let mut flags = FlagSet::new(PROGRAM_NAME, error_handling);
        flags.auto_help(('h', "help"), ["Show this help message and exit."]);
        flags.bool_var(
            &self.compressed,
            "compressed",
            ["Request a compressed response."],
        );
        flags.string_list_var(
            &self.headers,
            ('H', "header"),
            ["Pass a custom `HEADER` to the server. May be repeated."],
        );
        flags.duration_var(
            &self.max_time,
            ('m', "max-time"),
            [
                "Maximum time allowed for the transfer, such as `1m30s`.",
                "Default: `@DEFAULT_VALUE@`.",
            ],
        );
        flags.string_var(
            &self.output,
            ('o', "output"),
            ["Write output to `FILE` instead of stdout."],
        );
        flags.number_var(&self.retries, "retry", ["Retry `NUM` times on failure."]);
        flags.bool_var(
            &self.verbose,
            ('v', "verbose"),
            ["Make the operation more talkative."],
        );
        flags.set_min_max_positional_args(1, 1);
        flags.usage_printer = Box::new(printer);
        flags
    }

    /// Describes the request for `urls`, one line per setting.
    #[must_use]
    pub fn describe(&self, urls: &[String]) -> String {
        let mut out = String::new();
        for url in urls {
            out.push_str(&format!("GET {url}\n"));
        }
        for header in self.headers.borrow().iter() {
            out.push_str(&format!("header: {header}\n"));
        }
        out.push_str(&format!("output: {}\n", self.output.borrow()));
        out.push_str(&format!(
            "max-time: {}\n",
            humantime::format_duration(self.max_time.get())
        ));
        out.push_str(&format!("retries: {}\n", self.retries.get()));
        out.push_str(&format!("compressed: {}\n", self.compressed.get()));
        out.push_str(&format!("verbose: {}\n", self.verbose.get()));
        out
    }
}
