//! Single-character flags such as `-v` or `-o FILE`.

use super::{Descriptor, OptionKind, argument_name_from_docs, optional_argument_name};
use crate::error::ConfigError;
use crate::parser::{OptionSpec, OptionType};
use crate::value::SharedValue;

/// A short flag.
///
/// Short flags can be grouped on the command line: `-xvf FILE` is the same
/// as `-x -v -f FILE`. Only the last flag of a group may take an argument.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use ortho_flags::{Binding, Descriptor, ShortFlag, StringValue};
///
/// let output = Binding::new(String::from("-"));
/// let flag = ShortFlag::new(
///     Rc::new(StringValue::new(&output)),
///     'o',
///     ["Write output to `FILE`."],
/// );
/// assert_eq!(flag.usage(), "-o FILE");
/// ```
#[derive(Clone)]
pub struct ShortFlag {
    /// Help paragraphs.
    pub description: Vec<String>,

    /// Default argument name, such as `" STRING"`.
    pub argument_name: String,

    /// Value used when an [`OptionKind::OptionalValue`] flag is given
    /// without `=value`.
    pub default_value: String,

    /// Translation strategy.
    pub kind: OptionKind,

    /// Flag name.
    pub name: char,

    /// Flag prefix, `-` by default.
    pub prefix: String,

    /// Value written when the flag is parsed.
    pub value: SharedValue,
}

impl ShortFlag {
    /// Creates a flag whose strategy and argument name follow `value`.
    ///
    /// Help and boolean flags take no argument; any other value makes a flag
    /// requiring one.
    #[must_use]
    pub fn new<I, S>(value: SharedValue, name: char, description: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = value.option_kind();
        let argument_name = match kind {
            OptionKind::AutoHelp | OptionKind::Boolean => String::new(),
            OptionKind::RequiredValue => value.argument_name().to_owned(),
            OptionKind::OptionalValue => optional_argument_name(&value),
        };
        Self {
            description: description.into_iter().map(Into::into).collect(),
            argument_name,
            default_value: String::new(),
            kind,
            name,
            prefix: String::from("-"),
            value,
        }
    }
}

impl Descriptor for ShortFlag {
    fn make_option(&self) -> Result<OptionSpec, ConfigError> {
        if self.name == '\0' {
            return Err(ConfigError::EmptyName {
                prefix: self.prefix.clone(),
            });
        }
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix {
                name: self.name.to_string(),
            });
        }
        let (kind, default_value) = match self.kind {
            OptionKind::AutoHelp => (OptionType::EarlyNoArg, String::new()),
            OptionKind::Boolean => (OptionType::GroupableNoArg, String::new()),
            OptionKind::RequiredValue => (OptionType::GroupableRequiredArg, String::new()),
            OptionKind::OptionalValue => {
                (OptionType::StandaloneOptionalArg, self.default_value.clone())
            }
        };
        Ok(OptionSpec {
            kind,
            prefix: self.prefix.clone(),
            name: self.name.to_string(),
            default_value,
        })
    }

    fn invocation(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    fn usage(&self) -> String {
        let argument_name = argument_name_from_docs(&self.description, &self.argument_name);
        format!("{}{}{argument_name}", self.prefix, self.name)
    }

    fn description(&self) -> &[String] {
        &self.description
    }

    fn value(&self) -> &SharedValue {
        &self.value
    }
}
