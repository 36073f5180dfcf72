//! The flag registry and its parse/dispatch algorithm.
//!
//! A [`FlagSet`] owns the declared [`ShortFlag`] and [`LongFlag`]
//! descriptors, translates them into [`OptionSpec`] values, hands those to
//! the [`Parser`], and writes every matched option into its bound value.
//! The outcome then goes through the [`ErrorHandling`] policy.

mod names;
mod var;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::{self, Write};

use tracing::{debug, trace, warn};

pub use names::FlagNames;
pub use var::Registered;

use crate::error::{ConfigError, FlagsError};
use crate::flag::{Descriptor, LongFlag, ShortFlag};
use crate::parser::{OptionSpec, Parsed, Parser};
use crate::usage::{DefaultUsagePrinter, UsagePrinter};
use crate::value::SharedValue;

/// What [`FlagSet::parse`] does when parsing fails or help is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorHandling {
    /// Return the error, including [`FlagsError::HelpRequested`].
    #[default]
    ContinueOnError,
    /// Print usage and exit with `0` on help; print the error and exit with
    /// `2` otherwise.
    ExitOnError,
    /// Panic with the error.
    PanicOnError,
}

/// Exit status used when help was requested under
/// [`ErrorHandling::ExitOnError`].
pub const EXIT_HELP: i32 = 0;

/// Exit status used for any other error under [`ErrorHandling::ExitOnError`].
pub const EXIT_USAGE: i32 = 2;

/// Registry of flags for one command-line parse.
///
/// Register flags, adjust the public fields, then call
/// [`FlagSet::parse`] once.
///
/// # Examples
///
/// ```
/// use ortho_flags::{Binding, ErrorHandling, FlagSet};
///
/// let verbose = Binding::new(false);
/// let output = Binding::new(String::from("-"));
/// let mut flags = FlagSet::new("curl", ErrorHandling::ContinueOnError);
/// flags.bool_var(&verbose, ('v', "verbose"), ["Make the operation more talkative."]);
/// flags.string_var(&output, ('o', "output"), ["Write output to `FILE`."]);
/// flags.set_min_max_positional_args(1, 1);
///
/// flags.parse(["-vo", "index.html", "https://example.com/"]).unwrap();
/// assert!(verbose.get());
/// assert_eq!(output.get(), "index.html");
/// assert_eq!(flags.args(), ["https://example.com/"]);
/// ```
pub struct FlagSet {
    /// Stops option processing at the first positional argument.
    ///
    /// Useful for programs wrapping another command, as in
    /// `foreach -kx git status -v`, where `-v` belongs to `git`.
    pub disable_permute: bool,

    /// Error handling policy.
    pub error_handling: ErrorHandling,

    /// Called with the exit status under [`ErrorHandling::ExitOnError`].
    ///
    /// Defaults to [`std::process::exit`]. If the callback returns, `parse`
    /// panics with the error.
    pub exit: Box<dyn FnMut(i32)>,

    /// Declared long flags, in registration order.
    pub long_flags: Vec<LongFlag>,

    /// Maximum number of positional arguments; `usize::MAX` means unbounded.
    pub max_positional_args: usize,

    /// Minimum number of positional arguments.
    pub min_positional_args: usize,

    /// Token after which every argument is positional, `--` by default.
    pub options_arguments_separator: String,

    /// Program name used by the usage screen and error messages.
    pub program_name: String,

    /// Declared short flags, in registration order.
    pub short_flags: Vec<ShortFlag>,

    /// Stream receiving error messages.
    pub stderr: Box<dyn Write>,

    /// Stream receiving the usage screen.
    pub stdout: Box<dyn Write>,

    /// Renderer for the usage screen and error messages.
    pub usage_printer: Box<dyn UsagePrinter>,

    positional_args: Vec<String>,
}

/// Options handed to the tokenizer together with the value bound to each
/// option name.
struct Translation {
    options: Vec<OptionSpec>,
    values: HashMap<String, SharedValue>,
}

impl FlagSet {
    /// Creates an empty flag set.
    ///
    /// The set accepts no positional arguments until
    /// [`FlagSet::set_min_max_positional_args`] is called, exits through
    /// [`std::process::exit`], writes to the process streams and renders
    /// with [`DefaultUsagePrinter`].
    #[must_use]
    pub fn new(program_name: impl Into<String>, error_handling: ErrorHandling) -> Self {
        Self {
            disable_permute: false,
            error_handling,
            exit: Box::new(|status| std::process::exit(status)),
            long_flags: Vec::new(),
            max_positional_args: 0,
            min_positional_args: 0,
            options_arguments_separator: String::from("--"),
            program_name: program_name.into(),
            short_flags: Vec::new(),
            stderr: Box::new(io::stderr()),
            stdout: Box::new(io::stdout()),
            usage_printer: Box::new(DefaultUsagePrinter::new()),
            positional_args: Vec::new(),
        }
    }

    /// Appends a short flag and returns it for further adjustment.
    pub fn add_short_flag(&mut self, flag: ShortFlag) -> &mut ShortFlag {
        self.short_flags.push(flag);
        last_mut(&mut self.short_flags)
    }

    /// Appends a long flag and returns it for further adjustment.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use ortho_flags::{Binding, ErrorHandling, FlagSet, LongFlag, StringValue};
    ///
    /// let https = Binding::new(String::new());
    /// let mut flags = FlagSet::new("dig", ErrorHandling::ContinueOnError);
    /// let flag = flags.add_long_flag(LongFlag::optional(
    ///     Rc::new(StringValue::new(&https)),
    ///     "https",
    ///     "/dns-query",
    ///     ["Use DNS over HTTPS."],
    /// ));
    /// flag.prefix = String::from("+");
    ///
    /// flags.parse(["+https"]).unwrap();
    /// assert_eq!(https.get(), "/dns-query");
    /// ```
    pub fn add_long_flag(&mut self, flag: LongFlag) -> &mut LongFlag {
        self.long_flags.push(flag);
        last_mut(&mut self.long_flags)
    }

    /// Sets both positional argument bounds.
    pub const fn set_min_max_positional_args(&mut self, min: usize, max: usize) {
        self.min_positional_args = min;
        self.max_positional_args = max;
    }

    /// Positional arguments collected by [`FlagSet::parse`], in input order.
    #[must_use]
    pub const fn args(&self) -> &[String] {
        self.positional_args.as_slice()
    }

    /// Every declared flag, short flags first.
    pub fn descriptors(&self) -> impl Iterator<Item = &dyn Descriptor> {
        self.short_flags
            .iter()
            .map(|flag| flag as &dyn Descriptor)
            .chain(self.long_flags.iter().map(|flag| flag as &dyn Descriptor))
    }

    /// Translates the declared flags into tokenizer options.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a flag has an empty name or prefix,
    /// when two flags share a name, or when both positional bounds are
    /// positive and the minimum exceeds the maximum.
    pub fn options(&self) -> Result<Vec<OptionSpec>, ConfigError> {
        self.translate().map(|translation| translation.options)
    }

    fn translate(&self) -> Result<Translation, ConfigError> {
        let (min, max) = (self.min_positional_args, self.max_positional_args);
        if min > 0 && max > 0 && min > max {
            return Err(ConfigError::PositionalBounds { min, max });
        }

        let mut options = Vec::with_capacity(self.short_flags.len() + self.long_flags.len());
        let mut values = HashMap::with_capacity(options.capacity());
        let mut owners: HashMap<String, String> = HashMap::with_capacity(options.capacity());
        for descriptor in self.descriptors() {
            let option = descriptor.make_option()?;
            match owners.entry(option.name.clone()) {
                Entry::Occupied(entry) => {
                    return Err(ConfigError::DuplicateName {
                        name: option.name,
                        first: entry.get().clone(),
                        second: descriptor.invocation(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(descriptor.invocation());
                }
            }
            values.insert(option.name.clone(), descriptor.value().clone());
            options.push(option);
        }
        Ok(Translation { options, values })
    }

    /// Parses `args`, which must not include the program name.
    ///
    /// Matched options are written into their bound values and positional
    /// arguments become available through [`FlagSet::args`]. What happens
    /// on failure depends on [`FlagSet::error_handling`].
    ///
    /// # Errors
    ///
    /// Under [`ErrorHandling::ContinueOnError`], returns the
    /// [`FlagsError`], including [`FlagsError::HelpRequested`] when a help
    /// flag was seen. Other policies never return an error.
    ///
    /// # Panics
    ///
    /// Panics when the declarations are inconsistent (see
    /// [`FlagSet::options`]), whatever the policy. Also panics on failure
    /// under [`ErrorHandling::PanicOnError`] and when the exit callback
    /// returns.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), FlagsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = args.into_iter().collect();
        let outcome = self.dispatch(&tokens);
        self.handle_outcome(outcome)
    }

    fn dispatch<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), FlagsError> {
        let Translation { options, values } = self.translate().unwrap_or_else(|err| fatal(&err));
        debug!(
            program = %self.program_name,
            options = options.len(),
            "translated flag declarations"
        );
        let parser = Parser {
            options,
            min_positional: self.min_positional_args,
            max_positional: self.max_positional_args,
            separator: self.options_arguments_separator.clone(),
            disable_permute: self.disable_permute,
        };
        let parsed = parser.parse(tokens)?;

        for entry in parsed {
            match entry {
                Parsed::Positional(arg) => self.positional_args.push(arg),
                Parsed::Option { option, value } => {
                    let bound = bound_value(&values, &option.name);
                    trace!(option = %option.invocation(), %value, "setting flag value");
                    bound.set(&value).map_err(|source| FlagsError::Value {
                        flag: option.invocation(),
                        source,
                    })?;
                    if bound.is_help() {
                        debug!(option = %option.invocation(), "help requested");
                        return Err(FlagsError::HelpRequested);
                    }
                }
            }
        }
        debug!(positionals = self.positional_args.len(), "parsed command line");
        Ok(())
    }

    fn handle_outcome(&mut self, outcome: Result<(), FlagsError>) -> Result<(), FlagsError> {
        let Err(err) = outcome else {
            return Ok(());
        };
        match self.error_handling {
            ErrorHandling::ContinueOnError => return Err(err),
            ErrorHandling::ExitOnError if err.is_help_request() => {
                if let Err(io_err) = self.print_usage() {
                    warn!(error = %io_err, "failed to write usage");
                }
                (self.exit)(EXIT_HELP);
            }
            ErrorHandling::ExitOnError => {
                if let Err(io_err) = self.print_error(&err) {
                    warn!(error = %io_err, "failed to write error message");
                }
                (self.exit)(EXIT_USAGE);
            }
            ErrorHandling::PanicOnError => {}
        }
        fatal(&err)
    }

    /// Renders the usage screen with [`FlagSet::usage_printer`].
    #[must_use]
    pub fn usage_string(&self) -> String {
        self.usage_printer.usage(self)
    }

    /// Writes the usage screen to [`FlagSet::stdout`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by the stream.
    pub fn print_usage(&mut self) -> io::Result<()> {
        let text = self.usage_string();
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    /// Writes the rendered `err` to [`FlagSet::stderr`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by the stream.
    pub fn print_error(&mut self, err: &FlagsError) -> io::Result<()> {
        let text = self.usage_printer.error(self, err);
        self.stderr.write_all(text.as_bytes())?;
        self.stderr.flush()
    }
}

fn last_mut<T>(items: &mut [T]) -> &mut T {
    match items.last_mut() {
        Some(item) => item,
        None => fatal(&"flag list is empty after a push"),
    }
}

/// Looks up the value bound to an option the tokenizer matched.
///
/// # Panics
///
/// Panics when `name` was not translated from a declared flag.
fn bound_value<'a>(values: &'a HashMap<String, SharedValue>, name: &str) -> &'a SharedValue {
    values
        .get(name)
        .unwrap_or_else(|| fatal(&format!("no value bound to option {name:?}")))
}

/// # Panics
///
/// Always.
fn fatal(err: &dyn std::fmt::Display) -> ! {
    panic!("{err}")
}
