use expand_object::{expand, value, Map, Number, Pattern, Value};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));
    assert_eq!(
        value!([1, "hello", true, null]),
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let object = value!({
        "name": "Alice",
        "age": 30,
    });
    let map = object.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
}

#[test]
fn test_value_macro_nested_matches_expansion() {
    let expected = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"]
    });
    assert_eq!(
        expand("user.id:123+name:Bob+active:true|tags:admin,developer").unwrap(),
        expected
    );
}

#[test]
fn test_value_macro_expressions() {
    let pattern = Pattern::new("^v[0-9]+", "i");
    assert_eq!(
        value!({"version": (pattern.clone())}),
        expand("version:/^v[0-9]+/i").unwrap()
    );
    assert_eq!(value!((1.0 / 4.0)), Value::from(0.25));
}
