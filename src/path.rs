//! Dotted-path access into nested mappings.
//!
//! A path such as `a.b.c` names the value at `map["a"]["b"]["c"]`. An escaped
//! dot (`a\.b`) belongs to the key name and never splits the path.

use crate::split::{contains_delimiter, split, unescape};
use crate::{Map, Value};

/// Separates the components of a path.
pub const PATH_SEPARATOR: char = '.';

/// Splits a raw path into un-escaped key names.
///
/// # Examples
///
/// ```rust
/// use expand_object::path::components;
///
/// assert_eq!(components(r"a\.b.c.d\.e"), vec!["a.b", "c", "d.e"]);
/// ```
#[must_use]
pub fn components(path: &str) -> Vec<String> {
    split(path, PATH_SEPARATOR)
        .iter()
        .map(|key| unescape(key))
        .collect()
}

/// Writes `value` at `path`, creating intermediate mappings as needed.
///
/// Without an unescaped dot the path is a single key and the value replaces
/// whatever was there. Otherwise every component but the last is descended
/// into; a component holding something other than a mapping is replaced by an
/// empty one.
///
/// # Examples
///
/// ```rust
/// use expand_object::path::set_path;
/// use expand_object::{Map, Value};
///
/// let mut map = Map::new();
/// set_path(&mut map, "a.b.c", Value::from("d"));
/// set_path(&mut map, "a.b.e", Value::from(1));
///
/// let b = map.get("a").and_then(|a| a.get("b")).unwrap();
/// assert_eq!(b.get("c"), Some(&Value::from("d")));
/// assert_eq!(b.get("e"), Some(&Value::from(1)));
/// ```
pub fn set_path(map: &mut Map, path: &str, value: Value) {
    if !contains_delimiter(path, PATH_SEPARATOR) {
        map.insert(unescape(path), value);
        return;
    }

    let mut keys = components(path).into_iter();
    if let Some(last) = keys.next_back() {
        insert_at(map, keys, last, value);
    }
}

fn insert_at<I>(map: &mut Map, mut parents: I, last: String, value: Value)
where
    I: Iterator<Item = String>,
{
    let Some(key) = parents.next() else {
        map.insert(last, value);
        return;
    };

    match map.entry(key).or_insert_with(|| Value::Object(Map::new())) {
        Value::Object(inner) => insert_at(inner, parents, last, value),
        slot => {
            let mut inner = Map::new();
            insert_at(&mut inner, parents, last, value);
            *slot = Value::Object(inner);
        }
    }
}

/// Reads the value at `path`, if every component resolves through mappings.
///
/// # Examples
///
/// ```rust
/// use expand_object::expand;
/// use expand_object::path::get_path;
///
/// let value = expand("a.b.c:d").unwrap();
/// assert_eq!(get_path(&value, "a.b.c").and_then(|v| v.as_str()), Some("d"));
/// assert!(get_path(&value, "a.x").is_none());
/// ```
#[must_use]
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    components(path)
        .iter()
        .try_fold(value, |current, key| current.get(key))
}

/// Deep-merges `source` into `target`.
///
/// Keys present on both sides whose values are both mappings are merged
/// recursively; otherwise the value from `source` wins.
///
/// # Examples
///
/// ```rust
/// use expand_object::path::merge;
/// use expand_object::{expand, Value};
///
/// let mut target = expand("a.b:1").unwrap().as_object().cloned().unwrap();
/// let source = expand("a.c:2").unwrap().as_object().cloned().unwrap();
/// merge(&mut target, source);
///
/// assert_eq!(Value::Object(target), expand("a.b:1|a.c:2").unwrap());
/// ```
pub fn merge(target: &mut Map, source: Map) {
    for (key, value) in source {
        if let Value::Object(incoming) = value {
            if let Some(Value::Object(existing)) = target.get_mut(&key) {
                merge(existing, incoming);
                continue;
            }
            target.insert(key, Value::Object(incoming));
        } else {
            target.insert(key, value);
        }
    }
}
