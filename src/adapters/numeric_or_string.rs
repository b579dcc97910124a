//! Numeric fields the vendor sometimes sends as quoted strings.
//!
//! Reading accepts either a JSON number or a string holding one. Writing
//! always emits a native number. Bind a field with a small wrapper that
//! names it, so errors can report which field failed:
//!
//! ```
//! use serde::{Deserialize, Deserializer};
//! use meeting_api_models::adapters::numeric_or_string;
//!
//! #[derive(Deserialize)]
//! struct Meeting {
//!     #[serde(deserialize_with = "meeting_id")]
//!     id: u64,
//! }
//!
//! fn meeting_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
//!     numeric_or_string::read(deserializer, "id")
//! }
//!
//! let meeting: Meeting = serde_json::from_str(r#"{"id": "85746065432"}"#).unwrap();
//! assert_eq!(meeting.id, 85746065432);
//! ```

use std::str::FromStr;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::AdapterError;

/// Numeric types that may arrive as strings.
pub trait WireNumber: FromStr + Serialize + DeserializeOwned {
    /// JSON has no encoding for NaN or infinities.
    fn is_finite(&self) -> bool {
        true
    }
}

impl WireNumber for i32 {}
impl WireNumber for i64 {}
impl WireNumber for u32 {}
impl WireNumber for u64 {}

impl WireNumber for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl WireNumber for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// Convert an already-parsed JSON value. `null` and blank strings are `None`.
pub fn from_value<T: WireNumber>(field: &'static str, value: Value) -> Result<Option<T>, AdapterError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            let literal = number.to_string();
            match serde_json::from_value::<T>(Value::Number(number)) {
                Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
                _ => Err(AdapterError::malformed_numeric_field(field, literal)),
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<T>() {
                Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
                _ => Err(AdapterError::malformed_numeric_field(field, text.as_str())),
            }
        }
        other => Err(AdapterError::malformed_numeric_field(field, other.to_string())),
    }
}

/// Read a required numeric field.
pub fn read<'de, D, T>(deserializer: D, field: &'static str) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: WireNumber,
{
    let value = Value::deserialize(deserializer)?;
    let literal = match &value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    match from_value(field, value).map_err(de::Error::custom)? {
        Some(number) => Ok(number),
        None => Err(de::Error::custom(AdapterError::malformed_numeric_field(
            field, literal,
        ))),
    }
}

/// Read an optional numeric field; pair it with `#[serde(default)]`.
pub fn read_optional<'de, D, T>(deserializer: D, field: &'static str) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: WireNumber,
{
    let value = Value::deserialize(deserializer)?;
    from_value(field, value).map_err(de::Error::custom)
}

/// Always a native JSON number.
pub fn write<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: WireNumber,
{
    value.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Ticket {
        #[serde(deserialize_with = "ticket_id")]
        id: u64,
        #[serde(default, deserialize_with = "ticket_price")]
        price: Option<f64>,
    }

    fn ticket_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        read(deserializer, "id")
    }

    fn ticket_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        read_optional(deserializer, "price")
    }

    #[test]
    fn test_string_and_number_decode_identically() {
        let from_string: Ticket = serde_json::from_value(json!({"id": "12345"})).unwrap();
        let from_number: Ticket = serde_json::from_value(json!({"id": 12345})).unwrap();
        assert_eq!(from_string.id, 12345);
        assert_eq!(from_string.id, from_number.id);
    }

    #[test]
    fn test_float_field_accepts_string() {
        let ticket: Ticket = serde_json::from_value(json!({"id": 1, "price": "19.99"})).unwrap();
        assert_eq!(ticket.price, Some(19.99));

        let ticket: Ticket = serde_json::from_value(json!({"id": 1, "price": 5})).unwrap();
        assert_eq!(ticket.price, Some(5.0));
    }

    #[test]
    fn test_optional_field_absent_null_or_blank() {
        let absent: Ticket = serde_json::from_value(json!({"id": 1})).unwrap();
        let null: Ticket = serde_json::from_value(json!({"id": 1, "price": null})).unwrap();
        let blank: Ticket = serde_json::from_value(json!({"id": 1, "price": " "})).unwrap();
        assert_eq!(absent.price, None);
        assert_eq!(null.price, None);
        assert_eq!(blank.price, None);
    }

    #[test]
    fn test_malformed_string_names_field_and_literal() {
        let result = serde_json::from_value::<Ticket>(json!({"id": "12a45"}));
        assert!(result.is_err());

        let message = result.unwrap_err().to_string();
        assert!(message.contains("`id`"));
        assert!(message.contains("12a45"));
    }

    #[test]
    fn test_from_value_errors() {
        let negative = from_value::<u64>("id", json!(-4));
        assert!(matches!(negative, Err(AdapterError::MalformedNumericField { field: "id", .. })));

        let fractional = from_value::<u64>("id", json!(1.5));
        assert!(fractional.is_err());

        let boolean = from_value::<u64>("id", json!(true));
        assert!(matches!(
            boolean,
            Err(AdapterError::MalformedNumericField { ref literal, .. }) if literal == "true"
        ));
    }

    #[test]
    fn test_required_field_rejects_null() {
        let result = serde_json::from_value::<Ticket>(json!({"id": null}));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("received \"null\""));
    }

    #[test]
    fn test_required_blank_string_reports_raw_text() {
        let result = serde_json::from_value::<Ticket>(json!({"id": " "}));

        // Same literal form as a malformed string, without JSON quoting
        let message = result.unwrap_err().to_string();
        assert_eq!(message, "field `id` expected a number but received \" \"");
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        for literal in ["NaN", "inf", "-infinity", "1e999"] {
            let result = serde_json::from_value::<Ticket>(json!({"id": 1, "price": literal}));
            assert!(result.is_err(), "{} should be rejected", literal);

            let message = result.unwrap_err().to_string();
            assert!(message.contains("`price`"));
            assert!(message.contains(literal));
        }
    }

    #[test]
    fn test_from_value_rejects_non_finite_directly() {
        let result = from_value::<f64>("price", json!("inf"));
        assert!(matches!(
            result,
            Err(AdapterError::MalformedNumericField { field: "price", ref literal }) if literal == "inf"
        ));
        assert_eq!(from_value::<f64>("price", json!("1e308")).unwrap(), Some(1e308));
    }

    #[test]
    fn test_write_emits_native_number() {
        let ticket: Ticket = serde_json::from_value(json!({"id": "12345", "price": "7.5"})).unwrap();
        let encoded = serde_json::to_value(&ticket).unwrap();
        assert_eq!(encoded, json!({"id": 12345, "price": 7.5}));
    }
}
