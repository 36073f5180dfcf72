//! Concrete [`FlagValue`] implementations for the supported payload types.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::{Binding, FlagValue, parse_bool};
use crate::error::ValueError;
use crate::flag::OptionKind;

/// Sentinel value marking a help flag.
///
/// Setting it never stores anything; the flag set notices the sentinel and
/// reports [`crate::FlagsError::HelpRequested`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpValue;

impl FlagValue for HelpValue {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        parse_bool(raw).map(|_| ())
    }

    fn option_kind(&self) -> OptionKind {
        OptionKind::AutoHelp
    }

    fn argument_name(&self) -> &'static str {
        ""
    }
}

impl fmt::Display for HelpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("false")
    }
}

/// Boolean value. An empty token means `true`.
#[derive(Debug, Clone)]
pub struct BoolValue {
    binding: Binding<bool>,
}

impl BoolValue {
    /// Wraps `binding`.
    #[must_use]
    pub fn new(binding: &Binding<bool>) -> Self {
        Self {
            binding: binding.clone(),
        }
    }
}

impl FlagValue for BoolValue {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        let parsed = parse_bool(raw)?;
        self.binding.replace(parsed);
        Ok(())
    }

    fn option_kind(&self) -> OptionKind {
        OptionKind::Boolean
    }

    fn argument_name(&self) -> &'static str {
        ""
    }
}

impl fmt::Display for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.binding.borrow())
    }
}

/// Numeric types accepted by [`NumberValue`].
pub trait Numeric: FromStr<Err: fmt::Display> + fmt::Display + Copy {
    /// Type name used in conversion errors.
    const KIND: &'static str;

    /// Default argument name shown in the help screen.
    const ARGUMENT_NAME: &'static str;
}

macro_rules! impl_numeric {
    ($($ty:ty => $arg:literal),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const KIND: &'static str = stringify!($ty);
                const ARGUMENT_NAME: &'static str = $arg;
            }
        )+
    };
}

impl_numeric! {
    i8 => " INT8",
    i16 => " INT16",
    i32 => " INT32",
    i64 => " INT64",
    isize => " INT",
    u8 => " UINT8",
    u16 => " UINT16",
    u32 => " UINT32",
    u64 => " UINT64",
    usize => " UINT",
    f32 => " FLOAT32",
    f64 => " FLOAT64",
}

/// Integer or floating point value parsed with the type's `FromStr`.
#[derive(Debug, Clone)]
pub struct NumberValue<T> {
    binding: Binding<T>,
}

impl<T: Numeric> NumberValue<T> {
    /// Wraps `binding`.
    #[must_use]
    pub fn new(binding: &Binding<T>) -> Self {
        Self {
            binding: binding.clone(),
        }
    }
}

impl<T: Numeric> FlagValue for NumberValue<T> {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        let parsed = raw.parse::<T>().map_err(|err| ValueError::Number {
            input: raw.to_owned(),
            kind: T::KIND,
            reason: err.to_string(),
        })?;
        self.binding.replace(parsed);
        Ok(())
    }

    fn argument_name(&self) -> &'static str {
        T::ARGUMENT_NAME
    }
}

impl<T: Numeric> fmt::Display for NumberValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.binding.borrow())
    }
}

/// Duration written as a `humantime` literal such as `1h30m` or `250ms`.
///
/// Components may be fractional, as in `1.5s` or `0.5h`. Fractions finer
/// than a nanosecond are rejected.
#[derive(Debug, Clone)]
pub struct DurationValue {
    binding: Binding<Duration>,
}

impl DurationValue {
    /// Wraps `binding`.
    #[must_use]
    pub fn new(binding: &Binding<Duration>) -> Self {
        Self {
            binding: binding.clone(),
        }
    }
}

impl FlagValue for DurationValue {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        let parsed = humantime::parse_duration(raw).map_err(|err| ValueError::Duration {
            input: raw.to_owned(),
            reason: err.to_string(),
        })?;
        self.binding.replace(parsed);
        Ok(())
    }

    fn argument_name(&self) -> &'static str {
        " DURATION"
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", humantime::format_duration(*self.binding.borrow()))
    }
}

/// String value stored verbatim.
#[derive(Debug, Clone)]
pub struct StringValue {
    binding: Binding<String>,
}

impl StringValue {
    /// Wraps `binding`.
    #[must_use]
    pub fn new(binding: &Binding<String>) -> Self {
        Self {
            binding: binding.clone(),
        }
    }
}

impl FlagValue for StringValue {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        self.binding.replace(raw.to_owned());
        Ok(())
    }

    fn argument_name(&self) -> &'static str {
        " STRING"
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binding.borrow())
    }
}

/// Repeatable string value. Every occurrence appends one entry.
///
/// The comma-joined rendering exists for the help screen only; entries may
/// contain commas themselves.
#[derive(Debug, Clone)]
pub struct StringListValue {
    binding: Binding<Vec<String>>,
}

impl StringListValue {
    /// Wraps `binding`.
    #[must_use]
    pub fn new(binding: &Binding<Vec<String>>) -> Self {
        Self {
            binding: binding.clone(),
        }
    }
}

impl FlagValue for StringListValue {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        self.binding.update(|entries| entries.push(raw.to_owned()));
        Ok(())
    }

    fn argument_name(&self) -> &'static str {
        " STRING"
    }
}

impl fmt::Display for StringListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binding.borrow().join(","))
    }
}
