//! Error types for shorthand expansion.
//!
//! Expansion itself is total over strings: malformed or ambiguous shorthand is
//! resolved by the grammar's best-effort rules instead of failing. The only
//! error [`expand`](crate::expand) reports is an input that is not a string at
//! all. The remaining variants belong to the surrounding API (compiling regex
//! patterns, reading input, deserializing into typed structs).
//!
//! ## Examples
//!
//! ```rust
//! use expand_object::{expand, Error};
//!
//! let result = expand(&b"\xff\xfe"[..]);
//! assert!(matches!(result, Err(Error::InvalidInputKind { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input handed to the expander is not a string.
    #[error("expand-object expects a string, found {found}")]
    InvalidInputKind { found: String },

    /// A regex pattern value could not be compiled.
    #[error("invalid regex pattern /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an input-kind error describing what was received instead of a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expand_object::Error;
    ///
    /// let err = Error::invalid_input_kind("nothing");
    /// assert!(err.to_string().contains("expects a string"));
    /// ```
    pub fn invalid_input_kind(found: &str) -> Self {
        Error::InvalidInputKind {
            found: found.to_string(),
        }
    }

    /// Creates an error for a regex pattern whose body does not compile.
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expand_object::Error;
    ///
    /// let err = Error::custom("missing field `port`");
    /// assert!(err.to_string().contains("missing field"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_message() {
        let err = Error::invalid_input_kind("bytes that are not valid UTF-8");
        assert_eq!(
            err.to_string(),
            "expand-object expects a string, found bytes that are not valid UTF-8"
        );
    }

    #[test]
    fn test_pattern_message() {
        let err = Error::invalid_pattern("(", "unclosed group");
        assert!(err.to_string().starts_with("invalid regex pattern /(/"));
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
