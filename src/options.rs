//! Configuration options for expansion.
//!
//! By default every leaf token is coerced: `true`/`false` become booleans,
//! numeric text becomes a number and `/.../flags` becomes a regex pattern.
//! [`ExpandOptions`] switches these conversions off for callers that want the
//! text exactly as typed.
//!
//! ## Examples
//!
//! ```rust
//! use expand_object::{expand_with_options, ExpandOptions, Value};
//!
//! let value = expand_with_options("port:8080", ExpandOptions::literal()).unwrap();
//! assert_eq!(value.get("port"), Some(&Value::from("8080")));
//!
//! let value = expand_with_options("re:/x/", ExpandOptions::new().with_regex(false)).unwrap();
//! assert_eq!(value.get("re"), Some(&Value::from("/x/")));
//! ```

/// Controls how raw tokens are coerced into typed values.
///
/// # Examples
///
/// ```rust
/// use expand_object::ExpandOptions;
///
/// let options = ExpandOptions::new();
/// assert!(options.type_cast);
/// assert!(options.regex);
///
/// let options = ExpandOptions::literal();
/// assert!(!options.type_cast);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Coerce booleans, numbers and regex literals. When `false` every token
    /// stays a string.
    pub type_cast: bool,
    /// Recognize `/.../flags` tokens as regex patterns. Only consulted when
    /// `type_cast` is on.
    pub regex: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        ExpandOptions {
            type_cast: true,
            regex: true,
        }
    }
}

impl ExpandOptions {
    /// Creates default options (all coercions enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that keep every token as a string.
    #[must_use]
    pub fn literal() -> Self {
        ExpandOptions {
            type_cast: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_type_cast(mut self, type_cast: bool) -> Self {
        self.type_cast = type_cast;
        self
    }

    #[must_use]
    pub fn with_regex(mut self, regex: bool) -> Self {
        self.regex = regex;
        self
    }
}
