//! Serde helpers for OKCoin's loosely typed JSON.
//!
//! The exchange documents most scalars as strings but is not consistent about
//! it: error codes arrive as numbers or strings, `result` flags occasionally
//! arrive as `"true"`, and numeric fields are empty strings when they do not
//! apply to a record.

use std::fmt;

use rust_decimal::Decimal;
use serde::{de, Deserializer};

/// Parse an exchange decimal string, treating empty or malformed values as absent.
///
/// # Example
///
/// ```rust
/// use okcoin_api_client::types::serde_helpers::parse_decimal;
///
/// assert_eq!(parse_decimal("0.001").unwrap().to_string(), "0.001");
/// assert!(parse_decimal("").is_none());
/// ```
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Deserialize a string, number or null into a `String`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use okcoin_api_client::types::serde_helpers::string_or_number;
///
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(deserialize_with = "string_or_number::deserialize")]
///     code: String,
/// }
///
/// let body: Body = serde_json::from_str(r#"{"code":30008}"#).unwrap();
/// assert_eq!(body.code, "30008");
/// let body: Body = serde_json::from_str(r#"{"code":"33014"}"#).unwrap();
/// assert_eq!(body.code, "33014");
/// ```
pub mod string_or_number {
    use super::*;

    /// Deserialize a string, integer, float or null as a string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl de::Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, a number or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(String::new())
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(String::new())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

/// Deserialize a boolean that may be sent as `true` or `"true"`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use okcoin_api_client::types::serde_helpers::bool_or_string;
///
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(deserialize_with = "bool_or_string::deserialize")]
///     result: bool,
/// }
///
/// let body: Body = serde_json::from_str(r#"{"result":"true"}"#).unwrap();
/// assert!(body.result);
/// ```
pub mod bool_or_string {
    use super::*;

    /// Deserialize a bool, a `"true"`/`"false"` string or null (false).
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoolOrStringVisitor;

        impl de::Visitor<'_> for BoolOrStringVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or a boolean string")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    "true" => Ok(true),
                    "false" | "" => Ok(false),
                    other => Err(de::Error::custom(format!("invalid boolean string: {other}"))),
                }
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(false)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(false)
            }
        }

        deserializer.deserialize_any(BoolOrStringVisitor)
    }
}
