/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use expand_object::{expand, value};
///
/// assert_eq!(
///     expand("a.b:c,d|e:1").unwrap(),
///     value!({"a": {"b": ["c", "d"]}, "e": 1})
/// );
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression with a `From` conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
