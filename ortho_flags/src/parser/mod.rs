//! Tokenizer turning an argument vector into matched options and
//! positional arguments.
//!
//! The tokenizer knows nothing about typed values. It receives a list of
//! [`OptionSpec`] values, positional argument bounds and the
//! options/arguments separator, and produces an ordered list of [`Parsed`]
//! entries or a [`ParseError`]. It understands:
//!
//! - clusters of groupable options behind one prefix (`-xvf FILE`), where
//!   only the last option may consume an argument;
//! - standalone options with `=value` (`--output=FILE`), with a separate
//!   argument (`--output FILE`) or with an optional argument
//!   (`--verbose`, `+https=/custom`);
//! - early options, such as help flags, which win over anything else on
//!   the command line;
//! - the separator (`--` by default), after which every token is
//!   positional;
//! - permutation: options and positional arguments may be interleaved
//!   unless [`Parser::disable_permute`] is set.

mod error;

pub use error::ParseError;

/// How an option consumes command-line tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// No argument. Seeing the option ends parsing immediately.
    EarlyNoArg,
    /// No argument. May appear in a cluster.
    GroupableNoArg,
    /// Requires an argument. May end a cluster.
    GroupableRequiredArg,
    /// Optional argument given with `=`; otherwise the default is used.
    StandaloneOptionalArg,
    /// Requires an argument, joined with `=` or in the following token.
    StandaloneRequiredArg,
}

impl OptionType {
    const fn is_groupable(self) -> bool {
        matches!(self, Self::GroupableNoArg | Self::GroupableRequiredArg)
    }
}

/// One option the tokenizer recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// How the option consumes tokens.
    pub kind: OptionType,
    /// Prefix introducing the option, such as `-`, `--` or `+`.
    pub prefix: String,
    /// Option name.
    pub name: String,
    /// Value reported for a [`OptionType::StandaloneOptionalArg`] given
    /// without `=value`.
    pub default_value: String,
}

impl OptionSpec {
    /// Prefix followed by name.
    #[must_use]
    pub fn invocation(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    fn is_invoked_by(&self, token: &str) -> bool {
        token.strip_prefix(self.prefix.as_str()) == Some(self.name.as_str())
    }

    fn has_single_char_name(&self, name: char) -> bool {
        self.name.chars().eq(std::iter::once(name))
    }

    /// Options that may appear inside a cluster.
    fn clusters(&self) -> bool {
        let mut chars = self.name.chars();
        let single_char = chars.next().is_some() && chars.next().is_none();
        self.kind.is_groupable() || (self.kind == OptionType::EarlyNoArg && single_char)
    }

    /// Matches `token` as a standalone option, returning the attached
    /// `=value` if any.
    fn match_standalone<'a>(&self, token: &'a str) -> Option<Option<&'a str>> {
        if self.kind.is_groupable() {
            return None;
        }
        let rest = token
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix(self.name.as_str())?;
        if rest.is_empty() {
            Some(None)
        } else {
            rest.strip_prefix('=').map(Some)
        }
    }
}

/// One entry of the tokenizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// An option with its raw value. Options without an argument carry an
    /// empty value.
    Option {
        /// Matched option.
        option: OptionSpec,
        /// Raw value.
        value: String,
    },
    /// A positional argument.
    Positional(String),
}

/// Prefixes assumed when no option has been declared.
const GNU_PREFIXES: [&str; 2] = ["-", "--"];

/// Tokenizer configuration.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Recognised options.
    pub options: Vec<OptionSpec>,
    /// Minimum number of positional arguments.
    pub min_positional: usize,
    /// Maximum number of positional arguments.
    pub max_positional: usize,
    /// Token after which everything is positional.
    pub separator: String,
    /// Stops option processing at the first positional argument.
    pub disable_permute: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            min_positional: 0,
            max_positional: 0,
            separator: String::from("--"),
            disable_permute: false,
        }
    }
}

impl Parser {
    /// Tokenizes `args`, which must not include the program name.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for unknown options, missing or unexpected
    /// option arguments and positional counts outside the bounds.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<Parsed>, ParseError> {
        if let Some(early) = self.find_early(args) {
            return Ok(vec![early]);
        }

        let prefixes = self.prefixes();
        let mut tokens = args.iter().map(|arg| arg.as_ref());
        let mut parsed = Vec::with_capacity(args.len());
        let mut options_done = false;

        while let Some(token) = tokens.next() {
            if options_done {
                parsed.push(Parsed::Positional(token.to_owned()));
                continue;
            }
            if token == self.separator {
                options_done = true;
                continue;
            }
            if let Some((option, attached)) = self.find_standalone(token) {
                let value = match (option.kind, attached) {
                    (OptionType::EarlyNoArg, None) => return Ok(vec![early_match(option)]),
                    (OptionType::EarlyNoArg, Some(_)) => {
                        return Err(ParseError::UnexpectedArgument {
                            option: option.invocation(),
                        });
                    }
                    (_, Some(value)) => value.to_owned(),
                    (OptionType::StandaloneRequiredArg, None) => tokens
                        .next()
                        .map(str::to_owned)
                        .ok_or_else(|| ParseError::MissingArgument {
                            option: option.invocation(),
                        })?,
                    (_, None) => option.default_value.clone(),
                };
                parsed.push(Parsed::Option {
                    option: option.clone(),
                    value,
                });
                continue;
            }
            match longest_prefix(token, &prefixes) {
                Some(prefix) if self.clusters_under(prefix) => {
                    if let Some(early) =
                        self.parse_cluster(prefix, token, &mut tokens, &mut parsed)?
                    {
                        return Ok(vec![early]);
                    }
                }
                Some(_) => {
                    return Err(ParseError::UnknownOption {
                        option: without_value(token).to_owned(),
                    });
                }
                None => {
                    parsed.push(Parsed::Positional(token.to_owned()));
                    options_done = self.disable_permute;
                }
            }
        }

        self.check_positionals(&parsed)?;
        Ok(parsed)
    }

    /// Looks for an early option among the tokens processed as options.
    ///
    /// The scan follows the same grammar as the main loop, so option values
    /// are skipped and clusters are inspected character by character. It
    /// stops at the separator and, without permutation, at the first
    /// positional argument. Unknown options do not stop it.
    fn find_early<S: AsRef<str>>(&self, args: &[S]) -> Option<Parsed> {
        let prefixes = self.prefixes();
        let mut tokens = args.iter().map(|arg| arg.as_ref());
        while let Some(token) = tokens.next() {
            if token == self.separator {
                break;
            }
            if let Some((option, attached)) = self.find_standalone(token) {
                match (option.kind, attached) {
                    (OptionType::EarlyNoArg, None) => return Some(early_match(option)),
                    (OptionType::StandaloneRequiredArg, None) => {
                        tokens.next();
                    }
                    _ => {}
                }
                continue;
            }
            match longest_prefix(token, &prefixes) {
                Some(prefix) if self.clusters_under(prefix) => {
                    match self.scan_cluster(prefix, token) {
                        ClusterScan::Early(option) => return Some(early_match(option)),
                        ClusterScan::TakesNext => {
                            tokens.next();
                        }
                        ClusterScan::Done => {}
                    }
                }
                None if self.disable_permute => break,
                Some(_) | None => {}
            }
        }
        None
    }

    fn scan_cluster<'s>(&'s self, prefix: &str, token: &str) -> ClusterScan<'s> {
        let body = token.strip_prefix(prefix).unwrap_or_default();
        for (offset, name) in body.char_indices() {
            let Some(option) = self.find_clustered(prefix, name) else {
                continue;
            };
            match option.kind {
                OptionType::EarlyNoArg => return ClusterScan::Early(option),
                OptionType::GroupableRequiredArg => {
                    let tail = body.get(offset + name.len_utf8()..).unwrap_or_default();
                    return if tail.is_empty() {
                        ClusterScan::TakesNext
                    } else {
                        ClusterScan::Done
                    };
                }
                _ => {}
            }
        }
        ClusterScan::Done
    }

    fn find_standalone<'a>(&self, token: &'a str) -> Option<(&OptionSpec, Option<&'a str>)> {
        self.options
            .iter()
            .find_map(|option| option.match_standalone(token).map(|value| (option, value)))
    }

    fn parse_cluster<'a>(
        &self,
        prefix: &str,
        token: &'a str,
        tokens: &mut impl Iterator<Item = &'a str>,
        parsed: &mut Vec<Parsed>,
    ) -> Result<Option<Parsed>, ParseError> {
        let body = token.strip_prefix(prefix).unwrap_or_default();
        for (offset, name) in body.char_indices() {
            let Some(option) = self.find_clustered(prefix, name) else {
                let option = if offset == 0 {
                    without_value(token).to_owned()
                } else {
                    format!("{prefix}{name}")
                };
                return Err(ParseError::UnknownOption { option });
            };
            match option.kind {
                OptionType::EarlyNoArg => return Ok(Some(early_match(option))),
                OptionType::GroupableRequiredArg => {
                    let tail = body.get(offset + name.len_utf8()..).unwrap_or_default();
                    let value = if tail.is_empty() {
                        tokens
                            .next()
                            .ok_or_else(|| ParseError::MissingArgument {
                                option: option.invocation(),
                            })?
                            .to_owned()
                    } else {
                        tail.to_owned()
                    };
                    parsed.push(Parsed::Option {
                        option: option.clone(),
                        value,
                    });
                    return Ok(None);
                }
                _ => parsed.push(Parsed::Option {
                    option: option.clone(),
                    value: String::new(),
                }),
            }
        }
        Ok(None)
    }

    fn find_clustered(&self, prefix: &str, name: char) -> Option<&OptionSpec> {
        self.options.iter().find(|option| {
            option.clusters() && option.prefix == prefix && option.has_single_char_name(name)
        })
    }

    fn clusters_under(&self, prefix: &str) -> bool {
        self.options
            .iter()
            .any(|option| option.clusters() && option.prefix == prefix)
    }

    fn prefixes(&self) -> Vec<&str> {
        if self.options.is_empty() {
            return GNU_PREFIXES.to_vec();
        }
        let mut prefixes: Vec<&str> = Vec::new();
        for option in &self.options {
            if !prefixes.contains(&option.prefix.as_str()) {
                prefixes.push(option.prefix.as_str());
            }
        }
        prefixes
    }

    fn check_positionals(&self, parsed: &[Parsed]) -> Result<(), ParseError> {
        let got = parsed
            .iter()
            .filter(|entry| matches!(entry, Parsed::Positional(_)))
            .count();
        if got < self.min_positional {
            return Err(ParseError::TooFewPositionals {
                min: self.min_positional,
                got,
            });
        }
        if got > self.max_positional {
            return Err(ParseError::TooManyPositionals {
                max: self.max_positional,
                got,
            });
        }
        Ok(())
    }
}

/// What the early-option scan learns from one cluster.
enum ClusterScan<'s> {
    /// The cluster holds an early option.
    Early(&'s OptionSpec),
    /// The cluster ends with an option taking the next token as its value.
    TakesNext,
    /// Nothing that matters to the scan.
    Done,
}

fn early_match(option: &OptionSpec) -> Parsed {
    Parsed::Option {
        option: option.clone(),
        value: String::new(),
    }
}

/// Longest prefix that `token` starts with and is strictly longer than.
fn longest_prefix<'p>(token: &str, prefixes: &[&'p str]) -> Option<&'p str> {
    prefixes
        .iter()
        .copied()
        .filter(|prefix| token.len() > prefix.len() && token.starts_with(prefix))
        .max_by_key(|prefix| prefix.len())
}

fn without_value(token: &str) -> &str {
    token.split_once('=').map_or(token, |(head, _)| head)
}

#[cfg(test)]
mod tests;
