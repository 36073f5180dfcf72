//! Error types produced while declaring and parsing flags.
//!
//! Three classes exist. [`ConfigError`] reports programmer mistakes in the
//! flag declarations and is always fatal. [`FlagsError`] carries the
//! recoverable parse-time failures together with the help request signal,
//! and [`ValueError`] describes a raw token that a typed value rejected.

mod config;
mod types;
mod value;

pub use config::ConfigError;
pub use types::FlagsError;
pub use value::ValueError;
