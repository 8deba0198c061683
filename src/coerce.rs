//! Coercion of raw tokens into typed scalars.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. `true` / `false` become booleans.
//! 2. An optionally signed integer or decimal (with optional exponent) becomes a
//!    number. Integers beyond the `i64` range become big integers; decimals that
//!    overflow to infinity stay text.
//! 3. `/source/flags`, with flags drawn from `g`, `m`, `i`, becomes a
//!    [`Pattern`].
//! 4. Anything else is the token itself with escaped operators reduced to the
//!    literal character.

use crate::split::unescape;
use crate::{ExpandOptions, Number, Pattern, Value};
use num_bigint::BigInt;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

const NUMBER_PATTERN: &str = r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$";
const INTEGER_PATTERN: &str = r"^[+-]?[0-9]+$";

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static INTEGER_REGEX: OnceLock<Regex> = OnceLock::new();

fn number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("invalid regex pattern"))
}

fn integer_regex() -> &'static Regex {
    INTEGER_REGEX.get_or_init(|| Regex::new(INTEGER_PATTERN).expect("invalid regex pattern"))
}

/// Coerces a raw token under the given options.
///
/// # Examples
///
/// ```rust
/// use expand_object::coerce::coerce;
/// use expand_object::{ExpandOptions, Pattern, Value};
///
/// let options = ExpandOptions::default();
/// assert_eq!(coerce("true", &options), Value::Bool(true));
/// assert_eq!(coerce("-12", &options), Value::from(-12));
/// assert_eq!(coerce("/^foo/g", &options), Value::Regex(Pattern::new("^foo", "g")));
/// assert_eq!(coerce(r"a\,b", &options), Value::from("a,b"));
/// ```
#[must_use]
pub fn coerce(token: &str, options: &ExpandOptions) -> Value {
    if !options.type_cast {
        return Value::String(unescape(token));
    }

    match token {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Some(number) = parse_number(token) {
        return number;
    }

    if options.regex {
        if let Some(pattern) = Pattern::parse(token) {
            return Value::Regex(pattern);
        }
    }

    Value::String(unescape(token))
}

/// Parses a token that is lexically a number.
///
/// # Examples
///
/// ```rust
/// use expand_object::coerce::parse_number;
/// use expand_object::{Number, Value};
///
/// assert_eq!(parse_number("5"), Some(Value::Number(Number::Integer(5))));
/// assert_eq!(parse_number("2.5e1"), Some(Value::Number(Number::Float(25.0))));
/// assert_eq!(parse_number("0x10"), None);
/// assert_eq!(parse_number(""), None);
/// ```
#[must_use]
pub fn parse_number(token: &str) -> Option<Value> {
    if !number_regex().is_match(token) {
        return None;
    }

    if integer_regex().is_match(token) {
        if let Ok(i) = token.parse::<i64>() {
            return Some(Value::Number(Number::Integer(i)));
        }
        let digits = token.strip_prefix('+').unwrap_or(token);
        return BigInt::from_str(digits).ok().map(Value::BigInt);
    }

    token
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| Value::Number(Number::Float(f)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast(token: &str) -> Value {
        coerce(token, &ExpandOptions::default())
    }

    #[test]
    fn test_booleans() {
        assert_eq!(cast("true"), Value::Bool(true));
        assert_eq!(cast("false"), Value::Bool(false));
        assert_eq!(cast("True"), Value::from("True"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(cast("9"), Value::from(9));
        assert_eq!(cast("+3"), Value::from(3));
        assert_eq!(cast("-0.5"), Value::from(-0.5));
        assert_eq!(cast(".5"), Value::from(0.5));
        assert_eq!(cast("1."), Value::from(1.0));
        assert_eq!(cast("1e3"), Value::from(1000.0));
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(cast("1.2.3"), Value::from("1.2.3"));
        assert_eq!(cast("Infinity"), Value::from("Infinity"));
        assert_eq!(cast(" 5"), Value::from(" 5"));
        assert_eq!(cast("1e999"), Value::from("1e999"));
        assert_eq!(cast("-"), Value::from("-"));
    }

    #[test]
    fn test_big_integer() {
        let expected = BigInt::from_str("123456789012345678901234567890").unwrap();
        assert_eq!(cast("+123456789012345678901234567890"), Value::BigInt(expected));
    }

    #[test]
    fn test_regex_literals() {
        assert_eq!(cast("/abc/"), Value::Regex(Pattern::new("abc", "")));
        assert_eq!(cast("/^bar/gmi"), Value::Regex(Pattern::new("^bar", "gmi")));
        assert_eq!(cast("/b+c/d"), Value::from("/b+c/d"));
    }

    #[test]
    fn test_literal_options() {
        let options = ExpandOptions::literal();
        assert_eq!(coerce("true", &options), Value::from("true"));
        assert_eq!(coerce("5", &options), Value::from("5"));
        assert_eq!(coerce(r"a\.b", &options), Value::from("a.b"));
    }

    #[test]
    fn test_regex_disabled() {
        let options = ExpandOptions::new().with_regex(false);
        assert_eq!(coerce("/abc/", &options), Value::from("/abc/"));
        assert_eq!(coerce("7", &options), Value::from(7));
    }
}
