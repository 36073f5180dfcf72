//! Short and long command-line flags bound to typed variables.
//!
//! Declare flags on a [`FlagSet`], binding each to a [`Binding`] you keep a
//! clone of, then call [`FlagSet::parse`] once with the arguments that
//! follow the program name:
//!
//! ```
//! use ortho_flags::{Binding, ErrorHandling, FlagSet};
//!
//! let count = Binding::new(1_u32);
//! let headers = Binding::new(Vec::new());
//! let mut flags = FlagSet::new("fetch", ErrorHandling::ContinueOnError);
//! flags.auto_help(('h', "help"), ["Show this help message and exit."]);
//! flags.number_var(&count, ('c', "count"), ["Repeat the request `N` times."]);
//! flags.string_list_var(&headers, 'H', ["Add a request header."]);
//! flags.set_min_max_positional_args(1, usize::MAX);
//!
//! flags
//!     .parse(["-c", "3", "-H", "Accept: */*", "https://example.com/"])
//!     .unwrap();
//! assert_eq!(count.get(), 3);
//! assert_eq!(headers.get(), ["Accept: */*"]);
//! assert_eq!(flags.args(), ["https://example.com/"]);
//! ```
//!
//! Short flags cluster (`-xvf FILE`), long flags take `--name=value` or
//! `--name value`, and prefixes can be changed per flag for dialects such
//! as `dig`'s `+short`. [`ErrorHandling`] decides whether errors are
//! returned, turned into a usage message and exit status, or raised as
//! panics.

mod error;
pub mod flag;
pub mod flagset;
pub mod parser;
pub mod usage;
pub mod value;

pub use error::{ConfigError, FlagsError, ValueError};
pub use flag::{Descriptor, LongFlag, OptionKind, ShortFlag};
pub use flagset::{ErrorHandling, FlagNames, FlagSet, Registered};
pub use parser::{OptionSpec, OptionType, ParseError, Parsed, Parser};
pub use usage::{DefaultUsagePrinter, UsageFlag, UsagePrinter};
pub use value::{
    Binding, BoolValue, DurationValue, FlagValue, HelpValue, NumberValue, Numeric, SharedValue,
    StringListValue, StringValue,
};
