//! # expand_object
//!
//! Expands a terse, single-line shorthand into nested structured data.
//!
//! ## What is the shorthand?
//!
//! A handful of punctuation operators describe a whole configuration tree in
//! one command-line argument:
//!
//! - **`.`** descends into a nested mapping: `a.b.c` → `{a: {b: {c: ""}}}`
//! - **`:`** assigns a value: `a.b:c` → `{a: {b: "c"}}`
//! - **`,`** builds a list: `a:b,c` → `{a: ["b", "c"]}`
//! - **`|`** separates top-level siblings: `a:b|c:d` → `{a: "b", c: "d"}`
//! - **`+`** adds siblings under the same parent: `a.b:c+d:e` → `{a: {b: "c", d: "e"}}`
//! - **`\`** escapes the next operator: `a\.b` → `{"a.b": ""}`
//! - **`/…/flags`** is a regex literal whose body is never split
//!
//! Leaf tokens are coerced: `true`/`false` become booleans, numeric text
//! becomes a number and regex literals become a [`Pattern`].
//!
//! See [`grammar`] for the precedence rules that resolve ambiguous input.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! expand_object = "0.1"
//! ```
//!
//! ### Expanding into a dynamic value
//!
//! ```rust
//! use expand_object::{expand, value};
//!
//! let value = expand("a.b:c+d:e+f:g").unwrap();
//! assert_eq!(value, value!({"a": {"b": "c", "d": "e", "f": "g"}}));
//!
//! let value = expand("a:b,c:d,e:f").unwrap();
//! assert_eq!(value, value!([{"a": "b"}, {"c": "d"}, {"e": "f"}]));
//! ```
//!
//! ### Expanding into a typed struct
//!
//! ```rust
//! use expand_object::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Limits { cpu: f64, memory: u32 }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Job { name: String, limits: Limits, tags: Vec<String> }
//!
//! let job: Job = from_str("name:build|limits.cpu:1.5+memory:512|tags:ci,linux").unwrap();
//! assert_eq!(job.limits, Limits { cpu: 1.5, memory: 512 });
//! assert_eq!(job.tags, vec!["ci", "linux"]);
//! ```
//!
//! ### Serializing the expansion
//!
//! [`Value`] implements `Serialize`, so any serde format can render it:
//!
//! ```rust
//! use expand_object::expand;
//!
//! let value = expand("a.b:/^bar/gmi|c:5").unwrap();
//! let json = serde_json::to_string(&value).unwrap();
//! assert_eq!(json, r#"{"a":{"b":"/^bar/gmi"},"c":5}"#);
//! ```
//!
//! ## Errors
//!
//! Expansion never fails on malformed shorthand; every string has an
//! expansion. The only expansion error is an input that is not text, see
//! [`Shorthand`].
//!
//! ## Logging
//!
//! The grammar emits `tracing` events at `debug` and `trace` level naming the
//! rule chosen for each document and segment. No subscriber is installed by the
//! library.

pub mod coerce;
pub mod de;
pub mod error;
pub mod expand;
pub mod grammar;
pub mod input;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod pattern;
pub mod split;
pub mod value;

pub use de::{from_value, Deserializer};
pub use error::{Error, Result};
pub use input::Shorthand;
pub use map::Map;
pub use options::ExpandOptions;
pub use path::{get_path, merge};
pub use pattern::Pattern;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use std::io;

/// Expands shorthand with every coercion enabled.
///
/// # Examples
///
/// ```rust
/// use expand_object::{expand, value};
///
/// assert_eq!(expand("a.b.c:d").unwrap(), value!({"a": {"b": {"c": "d"}}}));
/// assert_eq!(expand("1,2,3").unwrap(), value!([1, 2, 3]));
/// assert_eq!(expand("").unwrap(), value!({}));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `input` is not text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn expand<S>(input: &S) -> Result<Value>
where
    S: Shorthand + ?Sized,
{
    expand_with_options(input, ExpandOptions::default())
}

/// Expands shorthand with custom coercion options.
///
/// # Examples
///
/// ```rust
/// use expand_object::{expand_with_options, value, ExpandOptions};
///
/// let value = expand_with_options("a:true,5", ExpandOptions::literal()).unwrap();
/// assert_eq!(value, value!({"a": ["true", "5"]}));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `input` is not text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn expand_with_options<S>(input: &S, options: ExpandOptions) -> Result<Value>
where
    S: Shorthand + ?Sized,
{
    let source = input.to_shorthand()?;
    Ok(expand::expand_str(&source, &options))
}

/// Expands shorthand and deserializes the result into `T`.
///
/// # Examples
///
/// ```rust
/// use expand_object::from_str;
/// use std::collections::BTreeMap;
///
/// let env: BTreeMap<String, String> = from_str("USER:root|SHELL:zsh").unwrap();
/// assert_eq!(env["SHELL"], "zsh");
/// ```
///
/// # Errors
///
/// Returns an error if the expansion cannot be deserialized into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(expand(s)?)
}

/// Expands shorthand held in UTF-8 bytes and deserializes the result into `T`.
///
/// # Examples
///
/// ```rust
/// use expand_object::from_slice;
///
/// let ports: Vec<u16> = from_slice(b"80,443").unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if the bytes are not valid UTF-8, or
/// an error if the expansion cannot be deserialized into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(expand(v)?)
}

/// Reads shorthand from an I/O stream and deserializes the expansion into `T`.
///
/// A single trailing newline is ignored, so piped input behaves like an
/// argument.
///
/// # Examples
///
/// ```rust
/// use expand_object::from_reader;
/// use std::io::Cursor;
///
/// let flags: Vec<bool> = from_reader(Cursor::new("true,false\n")).unwrap();
/// assert_eq!(flags, vec![true, false]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or an error if the expansion cannot
/// be deserialized into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(trim_line_ending(&string))
}

/// Strips one trailing `\n` or `\r\n`.
#[must_use]
pub fn trim_line_ending(s: &str) -> &str {
    s.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use serde::Deserialize;

    #[test]
    fn test_expand_is_deterministic() {
        let source = "a.b:c+d:e|f:1,2|g";
        assert_eq!(expand(source).unwrap(), expand(source).unwrap());
    }

    #[test]
    fn test_expand_owned_inputs() {
        let owned = String::from("a:b");
        assert_eq!(expand(&owned).unwrap(), value!({"a": "b"}));
        assert_eq!(expand(&Some("a:b")).unwrap(), value!({"a": "b"}));
    }

    #[test]
    fn test_from_slice_invalid_utf8() {
        let result: Result<Value> = from_slice(&[0xc3, 0x28]);
        assert!(matches!(result, Err(Error::InvalidInputKind { .. })));
    }

    #[test]
    fn test_from_str_struct() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Point {
            x: i32,
            y: i32,
        }

        let point: Point = from_str("x:1|y:-2").unwrap();
        assert_eq!(point, Point { x: 1, y: -2 });
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("a:b\n"), "a:b");
        assert_eq!(trim_line_ending("a:b\r\n"), "a:b");
        assert_eq!(trim_line_ending("a:b\n\n"), "a:b\n");
        assert_eq!(trim_line_ending("a:b"), "a:b");
    }
}
