//
//  topgg
//  api/common/snowflake.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Snowflake identifiers and their JSON codec.
//!
//! Discord and Top.gg identifiers are unsigned 64-bit integers. JSON consumers
//! backed by IEEE-754 doubles cannot represent the full range, so identifiers
//! always cross the wire as decimal strings.
//!
//! | Direction | Accepted / produced |
//! |-----------|---------------------|
//! | Decode | `"123"` or `123` |
//! | Encode | always `"123"` |
//!
//! Optional identifiers use the [`optional`] module so that `null` (and the
//! empty string some endpoints send) decode to `None`. Lists need no helper:
//! `Vec<Snowflake>` decodes element-wise and `[]` stays an empty list.
//!
//! # Example
//!
//! ```rust
//! use topgg::api::common::Snowflake;
//!
//! let id: Snowflake = serde_json::from_str(r#""264811613708746752""#).unwrap();
//! assert_eq!(id.get(), 264811613708746752);
//! assert_eq!(serde_json::to_string(&id).unwrap(), r#""264811613708746752""#);
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A 64-bit unsigned resource identifier.
///
/// Held natively as a `u64`; serialized as a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid snowflake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid snowflake '{input}': {source}")]
pub struct ParseSnowflakeError {
    input: String,
    #[source]
    source: ParseIntError,
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|source| ParseSnowflakeError {
                input: s.to_string(),
                source,
            })
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a snowflake as a decimal string or unsigned integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Snowflake(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Snowflake)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<u64>()
            .map(Snowflake)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// Codec for `Option<Snowflake>` fields.
///
/// Use together with `#[serde(default)]` so a missing key also decodes to
/// `None`, and `skip_serializing_if = "Option::is_none"` to omit absent
/// values instead of sending `null`.
pub mod optional {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Snowflake>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => id.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Snowflake>, D::Error> {
        deserializer.deserialize_option(OptionalVisitor)
    }

    struct OptionalVisitor;

    impl<'de> Visitor<'de> for OptionalVisitor {
        type Value = Option<Snowflake>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("null or a snowflake as a decimal string or unsigned integer")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            SnowflakeVisitor.visit_u64(v).map(Some)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            SnowflakeVisitor.visit_i64(v).map(Some)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.is_empty() {
                return Ok(None);
            }
            SnowflakeVisitor.visit_str(v).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        id: Snowflake,
        #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
        parent: Option<Snowflake>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        owners: Option<Vec<Snowflake>>,
    }

    #[test]
    fn test_round_trip_edges() {
        for n in [0, 1, 9_007_199_254_740_993, u64::MAX] {
            let encoded = serde_json::to_string(&Snowflake::new(n)).unwrap();
            assert_eq!(encoded, format!("\"{n}\""));
            let decoded: Snowflake = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded.get(), n);
        }
    }

    #[test]
    fn test_decode_numeric_token() {
        let decoded: Snowflake = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(decoded.get(), u64::MAX);
    }

    #[test]
    fn test_decode_rejects_bad_tokens() {
        assert!(serde_json::from_str::<Snowflake>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<Snowflake>(r#""-1""#).is_err());
        assert!(serde_json::from_str::<Snowflake>("-5").is_err());
        assert!(serde_json::from_str::<Snowflake>("true").is_err());
        assert!(serde_json::from_str::<Snowflake>("[1]").is_err());
    }

    #[test]
    fn test_optional_null_and_missing() {
        let holder: Holder = serde_json::from_value(json!({"id": "1", "parent": null})).unwrap();
        assert_eq!(holder.parent, None);

        let holder: Holder = serde_json::from_value(json!({"id": "1"})).unwrap();
        assert_eq!(holder.parent, None);

        let holder: Holder = serde_json::from_value(json!({"id": "1", "parent": ""})).unwrap();
        assert_eq!(holder.parent, None);

        let holder: Holder = serde_json::from_value(json!({"id": "1", "parent": 42})).unwrap();
        assert_eq!(holder.parent, Some(Snowflake::new(42)));
    }

    #[test]
    fn test_absent_optional_is_never_the_string_null() {
        let holder = Holder {
            id: Snowflake::new(7),
            parent: None,
            owners: None,
        };
        let encoded = serde_json::to_string(&holder).unwrap();
        assert_eq!(encoded, r#"{"id":"7"}"#);
        assert!(!encoded.contains("\"null\""));
    }

    #[test]
    fn test_list_decoding() {
        let holder: Holder = serde_json::from_value(json!({"id": "1", "owners": []})).unwrap();
        assert_eq!(holder.owners, Some(vec![]));

        let holder: Holder = serde_json::from_value(json!({"id": "1", "owners": ["1", 2]})).unwrap();
        assert_eq!(holder.owners, Some(vec![Snowflake::new(1), Snowflake::new(2)]));

        let holder: Holder = serde_json::from_value(json!({"id": "1", "owners": null})).unwrap();
        assert_eq!(holder.owners, None);

        assert!(serde_json::from_value::<Holder>(json!({"id": "1", "owners": ["x"]})).is_err());
    }

    #[test]
    fn test_list_encodes_strings() {
        let holder = Holder {
            id: Snowflake::new(1),
            parent: Some(Snowflake::new(2)),
            owners: Some(vec![Snowflake::new(3), Snowflake::new(4)]),
        };
        assert_eq!(
            serde_json::to_value(&holder).unwrap(),
            json!({"id": "1", "parent": "2", "owners": ["3", "4"]})
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("  55 ".parse::<Snowflake>().unwrap(), Snowflake::new(55));
        assert!("5x".parse::<Snowflake>().is_err());
    }
}
