//
//  topgg
//  api/common/case_insensitive.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Case-insensitive JSON decoding.
//!
//! The Top.gg API is not consistent about key casing (`monthlyPoints` vs
//! `monthlypoints`, `clientid` vs `clientId`). Instead of sprinkling aliases
//! over every model, response bodies are parsed into a [`serde_json::Value`]
//! and replayed through a deserializer that renames object keys to the
//! struct field they match case-insensitively.
//!
//! Only struct keys are folded. Free-form maps (e.g. localization
//! dictionaries) keep their keys untouched.

use serde::de::value::StringDeserializer;
use serde::de::{self, DeserializeOwned, DeserializeSeed, Deserializer, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::forward_to_deserialize_any;
use serde_json::{Map, Value};

/// Parses `body` as JSON and decodes it into `T`, matching struct fields
/// without regard to ASCII case.
pub fn from_str<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    T::deserialize(Folded(value))
}

struct Folded(Value);

impl<'de> Deserializer<'de> for Folded {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Array(items) => visitor.visit_seq(FoldedSeq {
                items: items.into_iter(),
            }),
            Value::Object(map) => visitor.visit_map(FoldedMap::new(map, &[])),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(Folded(other)),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(map) => visitor.visit_map(FoldedMap::new(map, fields)),
            other => Folded(other).deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.0.deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

struct FoldedSeq {
    items: std::vec::IntoIter<Value>,
}

impl<'de> SeqAccess<'de> for FoldedSeq {
    type Error = serde_json::Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error> {
        match self.items.next() {
            Some(value) => seed.deserialize(Folded(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

struct FoldedMap {
    entries: serde_json::map::IntoIter,
    fields: &'static [&'static str],
    pending: Option<Value>,
}

impl FoldedMap {
    fn new(map: Map<String, Value>, fields: &'static [&'static str]) -> Self {
        Self {
            entries: map.into_iter(),
            fields,
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for FoldedMap {
    type Error = serde_json::Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error> {
        match self.entries.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                let key: StringDeserializer<serde_json::Error> =
                    canonical_key(key, self.fields).into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        match self.pending.take() {
            Some(value) => seed.deserialize(Folded(value)),
            None => Err(de::Error::custom("value requested before key")),
        }
    }
}

/// Maps `key` onto the declared field it matches, preferring an exact match.
fn canonical_key(key: String, fields: &'static [&'static str]) -> String {
    if fields.is_empty() || fields.contains(&key.as_str()) {
        return key;
    }

    match fields.iter().find(|field| field.eq_ignore_ascii_case(&key)) {
        Some(field) => (*field).to_string(),
        None => key,
    }
}
