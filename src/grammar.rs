//! Shorthand grammar: operators, shapes and rule precedence.
//!
//! # Operators
//!
//! | Operator | Meaning | Example | Expands to |
//! |----------|---------|---------|------------|
//! | `.` | path descent | `a.b.c` | `{a: {b: {c: ""}}}` |
//! | `:` | key/value | `a.b:c` | `{a: {b: "c"}}` |
//! | `,` | list | `a:b,c` | `{a: ["b", "c"]}` |
//! | `\|` | top-level siblings | `a:b\|c:d` | `{a: "b", c: "d"}` |
//! | `+` | siblings under one parent | `a.b:c+d:e` | `{a: {b: "c", d: "e"}}` |
//! | `\` | escapes the next operator | `a\.b` | `{"a.b": ""}` |
//! | `/…/` | regex literal, opaque to splitting | `a:/x\|y/i` | `{a: /x\|y/i}` |
//!
//! # Precedence
//!
//! The grammar is ambiguous, so shapes are resolved by ordered rule tables.
//! The first rule whose predicate accepts the input wins.
//!
//! Whole document ([`DOCUMENT_RULES`]):
//!
//! | Order | Shape | Applies when |
//! |-------|-------|--------------|
//! | 1 | [`DocumentShape::ScalarList`] | no `.`, `\|` or `:` but at least one `,` |
//! | 2 | [`DocumentShape::ArrayLike`] | starts with `\w+:\w+[,:]` runs and has one `\|` segment |
//! | 3 | [`DocumentShape::Segments`] | always |
//!
//! Each `|` segment ([`SEGMENT_RULES`]):
//!
//! | Order | Kind | Applies when |
//! |-------|------|--------------|
//! | 1 | [`SegmentKind::MixedArray`] | `w.w[:.]w,…,w:w` |
//! | 2 | [`SegmentKind::BareKey`] | none of `.` `,` `:` `\|` |
//! | 3 | [`SegmentKind::SiblingGroup`] | splits into several `+` pieces |
//! | 4 | [`SegmentKind::KeyValue`] | always |
//!
//! Nested objects (list items, sibling pieces) only consult the last two rows.
//!
//! Array-like documents ([`ARRAY_RULES`]):
//!
//! | Order | Shape | Applies when |
//! |-------|-------|--------------|
//! | 1 | [`ArrayShape::KeyedList`] | a single `:` |
//! | 2 | [`ArrayShape::MixedValues`] | the text after the first `:` contains `\w+,\w+,` |
//! | 3 | [`ArrayShape::Objects`] | always |
//!
//! These boundaries reproduce established outputs such as
//! `foo:bar,baz,a:b` → `{foo: ["bar", "baz", {a: "b"}]}` versus
//! `a:b,c:d,e:f` → `[{a: "b"}, {c: "d"}, {e: "f"}]`. They are heuristics, not
//! a context-free grammar.

use crate::split::{find_delimiter, list_tokens, split};
use regex::Regex;
use std::sync::OnceLock;

pub const SIBLING: char = '|';
pub const CO_SIBLING: char = '+';
pub const KEY_VALUE: char = ':';
pub const LIST: char = ',';
pub const PATH: char = '.';

const ARRAY_LIKE_PATTERN: &str = r"^(?:\w+:\w+[,:])+";
const SECOND_COLON_PATTERN: &str = r"\w+:.*:";
const MIXED_VALUES_PATTERN: &str = r"\w+,\w+,";
const MIXED_SEGMENT_PATTERN: &str = r"^(\w+\.\w+)[:.]((?:\w+,)+)+(\w+):(\w+)";

static ARRAY_LIKE_REGEX: OnceLock<Regex> = OnceLock::new();
static SECOND_COLON_REGEX: OnceLock<Regex> = OnceLock::new();
static MIXED_VALUES_REGEX: OnceLock<Regex> = OnceLock::new();
static MIXED_SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid regex pattern"))
}

fn array_like_regex() -> &'static Regex {
    compiled(&ARRAY_LIKE_REGEX, ARRAY_LIKE_PATTERN)
}

fn second_colon_regex() -> &'static Regex {
    compiled(&SECOND_COLON_REGEX, SECOND_COLON_PATTERN)
}

fn mixed_values_regex() -> &'static Regex {
    compiled(&MIXED_VALUES_REGEX, MIXED_VALUES_PATTERN)
}

fn mixed_segment_regex() -> &'static Regex {
    compiled(&MIXED_SEGMENT_REGEX, MIXED_SEGMENT_PATTERN)
}

/// What a document's `|` split looks like, handed to the document predicates.
#[derive(Debug)]
pub struct Probe<'a> {
    pub source: &'a str,
    pub segments: &'a [String],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentShape {
    ScalarList,
    ArrayLike,
    Segments,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    MixedArray,
    BareKey,
    SiblingGroup,
    KeyValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayShape {
    KeyedList,
    MixedValues,
    Objects,
}

pub type DocumentRule = (DocumentShape, for<'a> fn(&Probe<'a>) -> bool);
pub type SegmentRule = (SegmentKind, fn(&str) -> bool);
pub type ArrayRule = (ArrayShape, fn(&str) -> bool);

pub const DOCUMENT_RULES: &[DocumentRule] = &[
    (DocumentShape::ScalarList, is_scalar_list),
    (DocumentShape::ArrayLike, is_array_like_document),
    (DocumentShape::Segments, always_document),
];

pub const SEGMENT_RULES: &[SegmentRule] = &[
    (SegmentKind::MixedArray, is_mixed_array),
    (SegmentKind::BareKey, is_bare_key),
    (SegmentKind::SiblingGroup, is_sibling_group),
    (SegmentKind::KeyValue, always),
];

/// The rules consulted for nested objects: sibling group, then key/value.
pub const OBJECT_RULES: &[SegmentRule] = &[
    (SegmentKind::SiblingGroup, is_sibling_group),
    (SegmentKind::KeyValue, always),
];

pub const ARRAY_RULES: &[ArrayRule] = &[
    (ArrayShape::KeyedList, is_keyed_list),
    (ArrayShape::MixedValues, has_mixed_values),
    (ArrayShape::Objects, always),
];

fn always(_: &str) -> bool {
    true
}

fn always_document(_: &Probe<'_>) -> bool {
    true
}

/// No `.`, `|` or `:` anywhere, but at least one `,`.
pub fn is_scalar_list(probe: &Probe<'_>) -> bool {
    !probe.source.contains(['.', '|', ':']) && probe.source.contains(LIST)
}

/// Leading `key:value,` / `key:value:` runs, on a document without siblings.
pub fn is_array_like_document(probe: &Probe<'_>) -> bool {
    probe.segments.len() == 1 && is_array_like(probe.source)
}

/// Starts with one or more `\w+:\w+` runs each followed by `,` or `:`.
///
/// # Examples
///
/// ```rust
/// use expand_object::grammar::is_array_like;
///
/// assert!(is_array_like("a:b,c:d"));
/// assert!(is_array_like("a:b,"));
/// assert!(!is_array_like("a:b"));
/// assert!(!is_array_like("a.b:c,d"));
/// ```
pub fn is_array_like(source: &str) -> bool {
    array_like_regex().is_match(source)
}

pub fn is_mixed_array(segment: &str) -> bool {
    mixed_segment_regex().is_match(segment)
}

/// A key with no operators at all.
pub fn is_bare_key(segment: &str) -> bool {
    !segment.contains(['.', ',', '|', ':'])
}

pub fn is_sibling_group(segment: &str) -> bool {
    split(segment, CO_SIBLING).len() > 1
}

/// Only one colon follows the leading key.
pub fn is_keyed_list(source: &str) -> bool {
    !second_colon_regex().is_match(source)
}

pub fn has_mixed_values(source: &str) -> bool {
    source
        .split_once(KEY_VALUE)
        .is_some_and(|(_, rest)| mixed_values_regex().is_match(rest))
}

fn select<K: Copy>(rules: &[(K, fn(&str) -> bool)], input: &str, fallback: K) -> K {
    rules
        .iter()
        .find(|(_, applies)| applies(input))
        .map_or(fallback, |(kind, _)| *kind)
}

/// A whole shorthand string, classified.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// Comma tokens to coerce directly into a sequence.
    ScalarList(Vec<String>),
    ArrayLike(ArrayLike),
    /// `|` segments folded into one mapping.
    Segments(Vec<String>),
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let segments = split(source, SIBLING);
        let probe = Probe {
            source,
            segments: &segments,
        };
        let shape = DOCUMENT_RULES
            .iter()
            .find(|(_, applies)| applies(&probe))
            .map_or(DocumentShape::Segments, |(shape, _)| *shape);
        tracing::trace!(?shape, source, "classified shorthand");

        match shape {
            DocumentShape::ScalarList => Document::ScalarList(list_tokens(source, LIST)),
            DocumentShape::ArrayLike => Document::ArrayLike(ArrayLike::parse(source)),
            DocumentShape::Segments => Document::Segments(segments),
        }
    }
}

/// One `|` segment (or nested object text), classified.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// `path[:.]item,item,...,key:value`: the items followed by `{key: value}`.
    MixedArray {
        path: String,
        items: Vec<String>,
        key: String,
        value: String,
    },
    BareKey(String),
    /// `+` pieces sharing the first piece's parent path.
    SiblingGroup(Vec<String>),
    /// Raw key path and the raw text of the value, if any.
    KeyValue { path: String, value: Option<String> },
}

impl Segment {
    /// Classifies a top-level `|` segment with the full rule table.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(SEGMENT_RULES, raw)
    }

    /// Classifies nested object text, which is never a bare key or mixed array.
    pub fn parse_object(raw: &str) -> Self {
        Self::parse_with(OBJECT_RULES, raw)
    }

    fn parse_with(rules: &[SegmentRule], raw: &str) -> Self {
        let kind = select(rules, raw, SegmentKind::KeyValue);
        tracing::trace!(?kind, segment = raw, "classified segment");

        match kind {
            SegmentKind::MixedArray => Self::mixed_array(raw),
            SegmentKind::BareKey => Segment::BareKey(raw.to_string()),
            SegmentKind::SiblingGroup => Segment::SiblingGroup(split(raw, CO_SIBLING)),
            SegmentKind::KeyValue => Self::key_value(raw),
        }
    }

    fn key_value(raw: &str) -> Self {
        let mut pieces = split(raw, KEY_VALUE).into_iter();
        let path = pieces.next().unwrap_or_default();
        Segment::KeyValue {
            path,
            value: pieces.next(),
        }
    }

    fn mixed_array(raw: &str) -> Self {
        match mixed_segment_regex().captures(raw) {
            Some(caps) => Segment::MixedArray {
                path: caps[1].to_string(),
                items: list_tokens(&caps[2], LIST),
                key: caps[3].to_string(),
                value: caps[4].to_string(),
            },
            None => Self::key_value(raw),
        }
    }
}

/// An array-like document, classified.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayLike {
    /// `key:v1,v2,...`: one key holding a list.
    KeyedList { key: String, list: String },
    /// `key:v1,v2,k:v`: one key holding scalars and nested objects.
    MixedValues { key: String, items: Vec<String> },
    /// `k1:v1,k2:v2,...`: a sequence of one-entry objects.
    Objects(Vec<String>),
}

impl ArrayLike {
    pub fn parse(source: &str) -> Self {
        let shape = select(ARRAY_RULES, source, ArrayShape::Objects);
        tracing::trace!(?shape, source, "classified array");

        let split_key = || {
            let at = find_delimiter(source, KEY_VALUE).unwrap_or(source.len());
            let rest = source.get(at + 1..).unwrap_or_default();
            (source[..at].to_string(), rest)
        };

        match shape {
            ArrayShape::KeyedList => {
                let (key, rest) = split_key();
                ArrayLike::KeyedList {
                    key,
                    list: rest.to_string(),
                }
            }
            ArrayShape::MixedValues => {
                let (key, rest) = split_key();
                ArrayLike::MixedValues {
                    key,
                    items: list_tokens(rest, LIST),
                }
            }
            ArrayShape::Objects => ArrayLike::Objects(list_tokens(source, LIST)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_document_scalar_list() {
        assert_eq!(
            Document::parse("1,2,,3,"),
            Document::ScalarList(strings(&["1", "2", "3"]))
        );
    }

    #[test]
    fn test_document_array_like_needs_single_segment() {
        assert!(matches!(
            Document::parse("a:b,c"),
            Document::ArrayLike(ArrayLike::KeyedList { .. })
        ));
        assert_eq!(
            Document::parse("a:b,c|d"),
            Document::Segments(strings(&["a:b,c", "d"]))
        );
    }

    #[test]
    fn test_array_shapes() {
        assert_eq!(
            ArrayLike::parse("a:b,c"),
            ArrayLike::KeyedList {
                key: "a".to_string(),
                list: "b,c".to_string()
            }
        );
        assert_eq!(
            ArrayLike::parse("foo:bar,baz,a:b"),
            ArrayLike::MixedValues {
                key: "foo".to_string(),
                items: strings(&["bar", "baz", "a:b"])
            }
        );
        assert_eq!(
            ArrayLike::parse("a:b,c:d,e:f"),
            ArrayLike::Objects(strings(&["a:b", "c:d", "e:f"]))
        );
    }

    #[test]
    fn test_segment_kinds() {
        assert_eq!(Segment::parse("a"), Segment::BareKey("a".to_string()));
        assert_eq!(
            Segment::parse("a:b+c:d"),
            Segment::SiblingGroup(strings(&["a:b", "c:d"]))
        );
        assert_eq!(
            Segment::parse("a.b:c:d"),
            Segment::KeyValue {
                path: "a.b".to_string(),
                value: Some("c".to_string())
            }
        );
        assert_eq!(
            Segment::parse("a.b"),
            Segment::KeyValue {
                path: "a.b".to_string(),
                value: None
            }
        );
    }

    #[test]
    fn test_segment_mixed_array() {
        assert_eq!(
            Segment::parse("a.b:c,d,e:f"),
            Segment::MixedArray {
                path: "a.b".to_string(),
                items: strings(&["c", "d"]),
                key: "e".to_string(),
                value: "f".to_string(),
            }
        );
    }

    #[test]
    fn test_object_rules_skip_bare_keys() {
        assert_eq!(OBJECT_RULES.len(), 2);
        assert_eq!(
            Segment::parse_object("a"),
            Segment::KeyValue {
                path: "a".to_string(),
                value: None
            }
        );
    }

    #[test]
    fn test_regex_span_is_not_a_sibling_group() {
        assert!(!is_sibling_group("a:/b+c/d"));
        assert!(is_sibling_group("+a"));
        assert!(!is_sibling_group("a+"));
    }
}
