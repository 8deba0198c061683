//! The expansion engine.
//!
//! A shorthand string is classified by [`Document::parse`], then every piece
//! is folded into an owned accumulator mapping. No stage mutates shared state:
//! each `apply_*` step takes the accumulator by value and hands it back.

use crate::coerce::coerce;
use crate::grammar::{ArrayLike, Document, Segment, KEY_VALUE, LIST, PATH};
use crate::path::{merge, set_path};
use crate::split::{contains_delimiter, find_delimiter, list_tokens, rfind_delimiter, unescape};
use crate::{ExpandOptions, Map, Value};

/// Expands `source` into a [`Value`].
///
/// The empty string expands to an empty mapping. Every other input expands
/// either to a mapping or, for list-shaped documents, to a sequence.
///
/// # Examples
///
/// ```rust
/// use expand_object::expand::expand_str;
/// use expand_object::{value, ExpandOptions};
///
/// let options = ExpandOptions::default();
/// assert_eq!(expand_str("a.b:1", &options), value!({"a": {"b": 1}}));
/// assert_eq!(expand_str("1,2", &options), value!([1, 2]));
/// ```
#[must_use]
pub fn expand_str(source: &str, options: &ExpandOptions) -> Value {
    tracing::debug!(source, "expanding shorthand");

    match Document::parse(source) {
        Document::ScalarList(tokens) => Value::Array(
            tokens
                .iter()
                .map(|token| coerce(token, options))
                .collect(),
        ),
        Document::ArrayLike(shape) => expand_array_like(shape, options),
        Document::Segments(segments) => Value::Object(
            segments
                .iter()
                .map(|raw| Segment::parse(raw))
                .fold(Map::new(), |acc, segment| {
                    apply_segment(acc, segment, options)
                }),
        ),
    }
}

/// Applies one classified segment to the accumulator.
#[must_use]
pub fn apply_segment(mut acc: Map, segment: Segment, options: &ExpandOptions) -> Map {
    match segment {
        Segment::MixedArray {
            path,
            items,
            key,
            value,
        } => {
            let mut tail = Map::new();
            tail.insert(key, coerce(&value, options));

            let mut list: Vec<Value> = items.iter().map(|item| coerce(item, options)).collect();
            list.push(Value::Object(tail));
            set_path(&mut acc, &path, Value::Array(list));
        }
        Segment::BareKey(key) => {
            acc.insert(unescape(&key), Value::String(String::new()));
        }
        Segment::SiblingGroup(pieces) => {
            merge(&mut acc, expand_siblings(&pieces, options));
        }
        Segment::KeyValue { path, value } => {
            set_path(&mut acc, &path, resolve_value(value.as_deref(), options));
        }
    }
    acc
}

/// Expands nested object text (a list item or a `+` piece) into `acc`.
#[must_use]
pub fn expand_object(acc: Map, raw: &str, options: &ExpandOptions) -> Map {
    apply_segment(acc, Segment::parse_object(raw), options)
}

/// Expands `+` pieces that share the parent path of the first piece.
///
/// `a.b.c:d+e:f` anchors on `c:d` under `a.b`, so `e` lands next to `c`.
///
/// # Examples
///
/// ```rust
/// use expand_object::expand::expand_siblings;
/// use expand_object::{value, ExpandOptions, Value};
///
/// let pieces = vec!["a.b:1".to_string(), "c:2".to_string()];
/// let group = expand_siblings(&pieces, &ExpandOptions::default());
/// assert_eq!(Value::Object(group), value!({"a": {"b": 1, "c": 2}}));
/// ```
#[must_use]
pub fn expand_siblings(pieces: &[String], options: &ExpandOptions) -> Map {
    let Some((first, rest)) = pieces.split_first() else {
        return Map::new();
    };

    let key_end = find_delimiter(first, KEY_VALUE).unwrap_or(first.len());
    let (prefix, anchor) = match rfind_delimiter(&first[..key_end], PATH) {
        Some(dot) => (Some(&first[..dot]), &first[dot + 1..]),
        None => (None, first.as_str()),
    };

    let group = std::iter::once(anchor)
        .chain(rest.iter().map(String::as_str))
        .fold(Map::new(), |acc, piece| expand_object(acc, piece, options));

    match prefix {
        Some(prefix) => {
            let mut wrapper = Map::new();
            set_path(&mut wrapper, prefix, Value::Object(group));
            wrapper
        }
        None => group,
    }
}

/// Resolves the raw text after a key's `:`.
///
/// No text yields the empty string; text with a list separator yields a
/// sequence; anything else is coerced.
#[must_use]
pub fn resolve_value(raw: Option<&str>, options: &ExpandOptions) -> Value {
    match raw {
        None => Value::String(String::new()),
        Some(raw) if contains_delimiter(raw, LIST) => Value::Array(
            list_tokens(raw, LIST)
                .iter()
                .map(|token| resolve_element(token, options))
                .collect(),
        ),
        Some(raw) => coerce(raw, options),
    }
}

/// Resolves one list element. A textual element holding a path becomes the
/// mapping that path describes.
///
/// # Examples
///
/// ```rust
/// use expand_object::expand::resolve_element;
/// use expand_object::{value, ExpandOptions};
///
/// let options = ExpandOptions::default();
/// assert_eq!(resolve_element("c.d", &options), value!({"c": {"d": ""}}));
/// assert_eq!(resolve_element("1.5", &options), value!(1.5));
/// ```
#[must_use]
pub fn resolve_element(token: &str, options: &ExpandOptions) -> Value {
    match coerce(token, options) {
        Value::String(_) if contains_delimiter(token, PATH) => {
            let mut map = Map::new();
            set_path(&mut map, token, Value::String(String::new()));
            Value::Object(map)
        }
        value => value,
    }
}

fn expand_array_like(shape: ArrayLike, options: &ExpandOptions) -> Value {
    match shape {
        ArrayLike::KeyedList { key, list } => {
            let items = list_tokens(&list, LIST)
                .iter()
                .map(|token| resolve_element(token, options))
                .collect();
            keyed(key, Value::Array(items))
        }
        ArrayLike::MixedValues { key, items } => {
            let items = items
                .iter()
                .map(|item| {
                    if contains_delimiter(item, KEY_VALUE) {
                        Value::Object(expand_object(Map::new(), item, options))
                    } else {
                        coerce(item, options)
                    }
                })
                .collect();
            keyed(key, Value::Array(items))
        }
        ArrayLike::Objects(tokens) => Value::Array(
            tokens
                .iter()
                .map(|token| Value::Object(expand_object(Map::new(), token, options)))
                .collect(),
        ),
    }
}

fn keyed(key: String, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(unescape(&key), value);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn run(source: &str) -> Value {
        expand_str(source, &ExpandOptions::default())
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(run(""), Value::Object(Map::new()));
    }

    #[test]
    fn test_bare_key_segments() {
        assert_eq!(run("a|b"), value!({"a": "", "b": ""}));
    }

    #[test]
    fn test_later_segment_overwrites() {
        assert_eq!(run("a:1|a:2"), value!({"a": 2}));
    }

    #[test]
    fn test_value_after_second_colon_is_ignored() {
        assert_eq!(run("a.b:c:d"), value!({"a": {"b": "c"}}));
    }

    #[test]
    fn test_sibling_group_merges_into_accumulator() {
        assert_eq!(
            run("a.x:1|a.b:c+d:e"),
            value!({"a": {"x": 1, "b": "c", "d": "e"}})
        );
    }

    #[test]
    fn test_sibling_prefix_uses_key_only() {
        assert_eq!(run("a:1.5+b:2"), value!({"a": 1.5, "b": 2}));
    }

    #[test]
    fn test_mixed_array_segment() {
        assert_eq!(
            run("a.b:c,d,e:f"),
            value!({"a": {"b": ["c", "d", {"e": "f"}]}})
        );
    }

    #[test]
    fn test_list_maps_dotted_items() {
        assert_eq!(run("a:b.c,d"), value!({"a": [{"b": {"c": ""}}, "d"]}));
    }

    #[test]
    fn test_expand_siblings_without_pieces() {
        assert!(expand_siblings(&[], &ExpandOptions::default()).is_empty());
    }

    #[test]
    fn test_resolve_value_without_text() {
        assert_eq!(resolve_value(None, &ExpandOptions::default()), value!(""));
        assert_eq!(
            resolve_value(Some(","), &ExpandOptions::default()),
            Value::Array(vec![])
        );
    }
}
