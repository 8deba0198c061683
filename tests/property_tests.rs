//! Property-based tests over generated shorthand.
//!
//! These complement the example-driven tests by checking invariants that must
//! hold for every input: expansion is total and pure, and the simple operators
//! compose the way the examples suggest.

use expand_object::coerce::coerce;
use expand_object::{expand, expand_with_options, get_path, ExpandOptions, Value};
use proptest::prelude::*;

/// Arbitrary text drawn mostly from operator characters.
fn shorthand() -> impl Strategy<Value = String> {
    "[a-c0-9.:,|+/\\\\gim]{0,32}"
}

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

/// Words that never coerce to booleans, numbers or patterns.
fn word() -> impl Strategy<Value = String> {
    "[g-z]{1,8}"
}

proptest! {
    #[test]
    fn prop_expand_is_total_and_pure(source in shorthand()) {
        let first = expand(&source).unwrap();
        let second = expand(&source).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_object() || first.is_array());
    }

    #[test]
    fn prop_expansion_always_serializes(source in shorthand()) {
        let value = expand(&source).unwrap();
        prop_assert!(serde_json::to_string(&value).is_ok());
        let _ = value.to_string();
    }

    #[test]
    fn prop_scalar_list_coerces_each_token(
        tokens in prop::collection::vec("[a-z0-9_-][a-z0-9/_-]{0,5}", 2..8)
    ) {
        let source = tokens.join(",");
        let options = ExpandOptions::default();
        let expected = Value::Array(tokens.iter().map(|t| coerce(t, &options)).collect());
        prop_assert_eq!(expand(&source).unwrap(), expected);
    }

    #[test]
    fn prop_dotted_path_round_trips(
        keys in prop::collection::vec(key(), 1..6),
        leaf in word()
    ) {
        let path = keys.join(".");
        let value = expand(&format!("{path}:{leaf}")).unwrap();
        prop_assert_eq!(get_path(&value, &path), Some(&Value::String(leaf)));
    }

    #[test]
    fn prop_pipe_siblings_are_independent(
        entries in prop::collection::btree_map("[a-z]{1,6}", word(), 1..6)
    ) {
        let source = entries
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("|");
        let value = expand(&source).unwrap();

        prop_assert_eq!(value.as_object().map(|m| m.len()), Some(entries.len()));
        for (k, v) in &entries {
            prop_assert_eq!(value.get(k), Some(&Value::String(v.clone())));
        }
    }

    #[test]
    fn prop_escaped_dots_form_one_key(parts in prop::collection::vec(key(), 2..5)) {
        let source = parts.join("\\.");
        let value = expand(&source).unwrap();
        prop_assert_eq!(value.get(&parts.join(".")), Some(&Value::String(String::new())));
    }

    #[test]
    fn prop_literal_mode_keeps_text(k in key(), n in any::<i64>()) {
        let value = expand_with_options(&format!("{k}:{n}"), ExpandOptions::literal()).unwrap();
        prop_assert_eq!(value.get(&k), Some(&Value::String(n.to_string())));
    }

    #[test]
    fn prop_integers_coerce(k in key(), n in any::<i64>()) {
        let value = expand(&format!("{k}:{n}")).unwrap();
        prop_assert_eq!(value.get(&k).and_then(Value::as_i64), Some(n));
    }
}
