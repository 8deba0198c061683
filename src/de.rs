//! Deserialization of expanded values into Rust types.
//!
//! This module provides the [`Deserializer`] that walks an expanded [`Value`]
//! and drives any `Deserialize` implementation, so shorthand can populate
//! typed configuration directly.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use expand_object::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16 }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { server: Server }
//!
//! let config: Config = from_str("server.host:localhost+port:8080").unwrap();
//! assert_eq!(config.server, Server { host: "localhost".to_string(), port: 8080 });
//! ```
//!
//! ## Leniency
//!
//! Shorthand has no quoting, so a few conversions are relaxed:
//!
//! - a scalar read as a string yields its rendered text (`v:1.0` fills a
//!   `String` field with `"1"`);
//! - a scalar read as a sequence yields a one-element sequence (`tags:a`
//!   fills a `Vec<String>`);
//! - the empty string reads as `()` and as a unit enum variant's payload.

use crate::{Error, Map, Number, Result, Value};
use num_bigint::BigInt;
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Deserializes a typed value out of an owned [`Value`].
///
/// # Examples
///
/// ```rust
/// use expand_object::{expand, from_value};
///
/// let ports: Vec<u16> = from_value(expand("80,443").unwrap()).unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
///
/// # Errors
///
/// Returns an error when the value's shape does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}

/// A deserializer over an owned [`Value`].
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn new(value: Value) -> Self {
        Deserializer { value }
    }
}

fn visit_bigint<'de, V>(bi: BigInt, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    if let Ok(u) = u64::try_from(&bi) {
        return visitor.visit_u64(u);
    }
    if let Ok(i) = i128::try_from(&bi) {
        return visitor.visit_i128(i);
    }
    visitor.visit_string(bi.to_string())
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::BigInt(bi) => visit_bigint(bi, visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::Regex(p) => visitor.visit_string(p.to_string()),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Bool(b) => visitor.visit_string(b.to_string()),
            Value::Number(n) => visitor.visit_string(n.to_string()),
            Value::BigInt(bi) => visitor.visit_string(bi.to_string()),
            other => Deserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(Deserializer::new(other)),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::String(s) if s.is_empty() => visitor.visit_unit(),
            _ => Err(Error::custom("Expected unit")),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(_) => Err(Error::custom("Expected array, found mapping")),
            scalar => visitor.visit_seq(SeqDeserializer::new(vec![scalar])),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected mapping")),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => match obj.into_iter().next() {
                Some((variant, value)) => {
                    visitor.visit_enum(EnumDeserializer::new(variant, value))
                }
                None => Err(Error::custom("Expected enum variant")),
            },
            Value::Object(_) => Err(Error::custom("Expected enum variant")),
            _ => Err(Error::custom("Expected enum")),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char
        bytes byte_buf
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: <Map as IntoIterator>::IntoIter,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Deserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Deserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            Value::String(s) if s.is_empty() => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expand, Pattern};
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Mode {
        Fast,
        Safe,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Settings {
        mode: Mode,
        version: String,
        tags: Vec<String>,
        retries: Option<u8>,
    }

    #[test]
    fn test_struct_with_lenient_fields() {
        let value = expand("mode:fast|version:2|tags:web").unwrap();
        let settings: Settings = from_value(value).unwrap();
        assert_eq!(
            settings,
            Settings {
                mode: Mode::Fast,
                version: "2".to_string(),
                tags: vec!["web".to_string()],
                retries: None,
            }
        );
    }

    #[test]
    fn test_enum_from_strings() {
        let modes: Vec<Mode> = from_value(expand("fast,safe").unwrap()).unwrap();
        assert_eq!(modes, vec![Mode::Fast, Mode::Safe]);
    }

    #[test]
    fn test_pattern_field() {
        #[derive(Deserialize)]
        struct Filter {
            include: Pattern,
        }

        let filter: Filter = from_value(expand("include:/^src/i").unwrap()).unwrap();
        assert!(filter.include.is_case_insensitive());
    }

    #[test]
    fn test_big_integer_into_u64() {
        let value = expand("n:18446744073709551615").unwrap();
        let map: HashMap<String, u64> = from_value(value).unwrap();
        assert_eq!(map["n"], u64::MAX);
    }

    #[test]
    fn test_mapping_is_not_a_sequence() {
        let result: Result<Vec<String>> = from_value(expand("a.b:c").unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_from_empty_string() {
        let value = expand("a").unwrap();
        let map: HashMap<String, ()> = from_value(value).unwrap();
        assert_eq!(map.get("a"), Some(&()));
    }
}
