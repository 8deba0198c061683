//! Regex pattern values.
//!
//! A token such as `/^foo/gi` coerces to a [`Pattern`]: the body between the
//! slashes plus the trailing flag string. Patterns are kept as source text so
//! that expansion never fails; [`Pattern::to_regex`] compiles one on demand.
//!
//! Flags follow the familiar `g`/`m`/`i` letters:
//!
//! | Flag | Effect when compiled |
//! |------|----------------------|
//! | `i`  | case-insensitive matching |
//! | `m`  | `^` and `$` match at line boundaries |
//! | `g`  | none (recorded for callers that iterate all matches) |

use crate::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Characters accepted in the flag suffix of a regex literal.
pub const FLAG_CHARS: &[char] = &['g', 'm', 'i'];

/// The source and flags of a `/.../flags` literal.
///
/// # Examples
///
/// ```rust
/// use expand_object::Pattern;
///
/// let pattern = Pattern::new("^bar", "gmi");
/// assert!(pattern.is_case_insensitive());
/// assert_eq!(pattern.to_string(), "/^bar/gmi");
///
/// let re = pattern.to_regex().unwrap();
/// assert!(re.is_match("BARN"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Pattern {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Parses a complete literal such as `/foo/g`.
    ///
    /// Returns `None` unless the text is at least three characters long, opens
    /// with `/`, and closes with a second `/` followed only by flag characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expand_object::Pattern;
    ///
    /// assert_eq!(Pattern::parse("/abc/"), Some(Pattern::new("abc", "")));
    /// assert_eq!(Pattern::parse("/b+c/d"), None);
    /// assert_eq!(Pattern::parse("/gi"), None);
    /// ```
    #[must_use]
    pub fn parse(literal: &str) -> Option<Self> {
        if literal.len() < 3 || !literal.starts_with('/') {
            return None;
        }
        let without_flags = literal.trim_end_matches(FLAG_CHARS);
        // The closing slash must not be the opening one.
        if without_flags.len() < 2 || !without_flags.ends_with('/') {
            return None;
        }
        let flags = &literal[without_flags.len()..];
        let source = &without_flags[1..without_flags.len() - 1];
        Some(Pattern::new(source, flags))
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    #[inline]
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.flags.contains('g')
    }

    #[inline]
    #[must_use]
    pub fn is_multi_line(&self) -> bool {
        self.flags.contains('m')
    }

    #[inline]
    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.flags.contains('i')
    }

    /// Compiles the pattern, translating its flags into builder options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the source is not a valid regex.
    pub fn to_regex(&self) -> Result<Regex> {
        RegexBuilder::new(&self.source)
            .case_insensitive(self.is_case_insensitive())
            .multi_line(self.is_multi_line())
            .build()
            .map_err(|e| Error::invalid_pattern(&self.source, &e.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        Pattern::parse(&literal).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Str(&literal), &"a /source/flags literal")
        })
    }
}
