//! Names accepted by the registration helpers.

/// Short and/or long name of a flag registered through a helper such as
/// [`crate::FlagSet::bool_var`].
///
/// Converts from `'v'`, `"verbose"` or `('v', "verbose")`. A NUL short name
/// or an empty long name counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagNames {
    /// Only a short flag, such as `-v`.
    Short(char),
    /// Only a long flag, such as `--verbose`.
    Long(String),
    /// A short and a long flag sharing one value.
    Both(char, String),
}

impl FlagNames {
    /// The short name, unless absent.
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        match self {
            Self::Short(name) | Self::Both(name, _) if *name != '\0' => Some(*name),
            _ => None,
        }
    }

    /// The long name, unless absent.
    #[must_use]
    pub fn long(&self) -> Option<&str> {
        match self {
            Self::Long(name) | Self::Both(_, name) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<char> for FlagNames {
    fn from(name: char) -> Self {
        Self::Short(name)
    }
}

impl From<&str> for FlagNames {
    fn from(name: &str) -> Self {
        Self::Long(name.to_owned())
    }
}

impl From<String> for FlagNames {
    fn from(name: String) -> Self {
        Self::Long(name)
    }
}

impl From<(char, &str)> for FlagNames {
    fn from((short, long): (char, &str)) -> Self {
        Self::Both(short, long.to_owned())
    }
}

impl From<(char, String)> for FlagNames {
    fn from((short, long): (char, String)) -> Self {
        Self::Both(short, long)
    }
}
