//! Registration helpers binding typed variables to flags.
//!
//! Each helper builds one [`SharedValue`] and registers a short and/or a
//! long flag around it, so `-v` and `--verbose` update the same variable and
//! render as one entry in the usage screen. The helpers return the
//! registered flags as a [`Registered`] so callers can adjust a prefix,
//! an argument name or a default value.

use std::rc::Rc;
use std::time::Duration;

use super::{FlagNames, FlagSet};
use crate::error::ConfigError;
use crate::flag::{LongFlag, ShortFlag};
use crate::value::{
    Binding, BoolValue, DurationValue, HelpValue, NumberValue, Numeric, SharedValue,
    StringListValue, StringValue,
};

/// Flags registered by one helper call.
pub struct Registered<'a> {
    /// The short flag, when a short name was given.
    pub short: Option<&'a mut ShortFlag>,
    /// The long flag, when a long name was given.
    pub long: Option<&'a mut LongFlag>,
}

impl FlagSet {
    /// Registers flags bound to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use ortho_flags::{Binding, ErrorHandling, FlagSet, StringValue};
    ///
    /// let name = Binding::new(String::new());
    /// let mut flags = FlagSet::new("go", ErrorHandling::ContinueOnError);
    /// let registered = flags.var(Rc::new(StringValue::new(&name)), "name", ["Set the `NAME`."]);
    /// if let Some(long) = registered.long {
    ///     long.prefix = String::from("-");
    /// }
    ///
    /// flags.parse(["-name", "gopher"]).unwrap();
    /// assert_eq!(name.get(), "gopher");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn var<N, I, S>(&mut self, value: SharedValue, names: N, description: I) -> Registered<'_>
    where
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flag_names = names.into();
        let paragraphs: Vec<String> = description.into_iter().map(Into::into).collect();
        let short = flag_names
            .short()
            .map(|name| ShortFlag::new(Rc::clone(&value), name, paragraphs.clone()));
        let long = flag_names
            .long()
            .map(|name| LongFlag::new(value, name, paragraphs));
        let (has_short, has_long) = (short.is_some(), long.is_some());
        if !has_short && !has_long {
            panic!("{}", ConfigError::Unnamed);
        }

        self.short_flags.extend(short);
        self.long_flags.extend(long);
        Registered {
            short: self.short_flags.last_mut().filter(|_| has_short),
            long: self.long_flags.last_mut().filter(|_| has_long),
        }
    }

    /// Registers help flags.
    ///
    /// Seeing one of them stops parsing with
    /// [`crate::FlagsError::HelpRequested`], even when the rest of the
    /// command line is invalid.
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn auto_help<N, I, S>(&mut self, names: N, description: I) -> Registered<'_>
    where
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var(Rc::new(HelpValue), names, description)
    }

    /// Registers boolean flags bound to `binding`.
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn bool_var<N, I, S>(
        &mut self,
        binding: &Binding<bool>,
        names: N,
        description: I,
    ) -> Registered<'_>
    where
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var(Rc::new(BoolValue::new(binding)), names, description)
    }

    /// Registers numeric flags bound to `binding`.
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn number_var<T, N, I, S>(
        &mut self,
        binding: &Binding<T>,
        names: N,
        description: I,
    ) -> Registered<'_>
    where
        T: Numeric + 'static,
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var(Rc::new(NumberValue::new(binding)), names, description)
    }

    /// Registers duration flags bound to `binding`, such as `--timeout 1m30s`.
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn duration_var<N, I, S>(
        &mut self,
        binding: &Binding<Duration>,
        names: N,
        description: I,
    ) -> Registered<'_>
    where
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var(Rc::new(DurationValue::new(binding)), names, description)
    }

    /// Registers string flags bound to `binding`.
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn string_var<N, I, S>(
        &mut self,
        binding: &Binding<String>,
        names: N,
        description: I,
    ) -> Registered<'_>
    where
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var(Rc::new(StringValue::new(binding)), names, description)
    }

    /// Registers repeatable string flags appending to `binding`.
    ///
    /// # Panics
    ///
    /// Panics when `names` holds neither a short nor a long name.
    pub fn string_list_var<N, I, S>(
        &mut self,
        binding: &Binding<Vec<String>>,
        names: N,
        description: I,
    ) -> Registered<'_>
    where
        N: Into<FlagNames>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var(Rc::new(StringListValue::new(binding)), names, description)
    }
}
