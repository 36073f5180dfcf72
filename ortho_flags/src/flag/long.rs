//! Multi-character flags such as `--verbose` or `--output FILE`.

use super::{Descriptor, OptionKind, argument_name_from_docs, optional_argument_name};
use crate::error::ConfigError;
use crate::parser::{OptionSpec, OptionType};
use crate::value::SharedValue;

/// A long flag.
///
/// Long flags always occupy their own token. Values are passed either as
/// `--output=FILE` or as `--output FILE`; boolean flags accept
/// `--verbose`, `--verbose=true` and `--verbose=false`.
#[derive(Clone)]
pub struct LongFlag {
    /// Help paragraphs.
    pub description: Vec<String>,

    /// Default argument name, such as `" STRING"` or `"[=true|false]"`.
    pub argument_name: String,

    /// Value used when an [`OptionKind::OptionalValue`] flag is given
    /// without `=value`.
    pub default_value: String,

    /// Translation strategy.
    pub kind: OptionKind,

    /// Flag name.
    pub name: String,

    /// Flag prefix, `--` by default.
    pub prefix: String,

    /// Value written when the flag is parsed.
    pub value: SharedValue,
}

impl LongFlag {
    /// Creates a flag whose strategy and argument name follow `value`.
    #[must_use]
    pub fn new<I, S>(value: SharedValue, name: impl Into<String>, description: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = value.option_kind();
        let argument_name = match kind {
            OptionKind::AutoHelp => String::new(),
            OptionKind::Boolean => String::from("[=true|false]"),
            OptionKind::RequiredValue => value.argument_name().to_owned(),
            OptionKind::OptionalValue => optional_argument_name(&value),
        };
        Self {
            description: description.into_iter().map(Into::into).collect(),
            argument_name,
            default_value: String::new(),
            kind,
            name: name.into(),
            prefix: String::from("--"),
            value,
        }
    }

    /// Creates a flag whose argument is optional.
    ///
    /// Bare `--name` stores `default_value`; a value must be joined with
    /// `=`, as in `+https=/custom` once the prefix is set to `+`.
    #[must_use]
    pub fn optional<I, S>(
        value: SharedValue,
        name: impl Into<String>,
        default_value: impl Into<String>,
        description: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argument_name = optional_argument_name(&value);
        Self {
            argument_name,
            default_value: default_value.into(),
            kind: OptionKind::OptionalValue,
            ..Self::new(value, name, description)
        }
    }
}

impl Descriptor for LongFlag {
    fn make_option(&self) -> Result<OptionSpec, ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName {
                prefix: self.prefix.clone(),
            });
        }
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix {
                name: self.name.clone(),
            });
        }
        let (kind, default_value) = match self.kind {
            OptionKind::AutoHelp => (OptionType::EarlyNoArg, String::new()),
            OptionKind::Boolean => (OptionType::StandaloneOptionalArg, String::from("true")),
            OptionKind::RequiredValue => (OptionType::StandaloneRequiredArg, String::new()),
            OptionKind::OptionalValue => {
                (OptionType::StandaloneOptionalArg, self.default_value.clone())
            }
        };
        Ok(OptionSpec {
            kind,
            prefix: self.prefix.clone(),
            name: self.name.clone(),
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
