use thiserror::Error;

/// Errors raised while converting between the vendor wire format and typed models.
///
/// Adapter errors are raised per field. When they occur inside a serde
/// deserializer they are turned into that deserializer's custom error, so
/// only the field being converted fails.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("unrecognized value \"{value}\" for enum {type_name}")]
    UnrecognizedEnumValue {
        type_name: &'static str,
        value: String,
    },

    #[error("field `{field}` expected a number but received \"{literal}\"")]
    MalformedNumericField {
        field: &'static str,
        literal: String,
    },

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page source failed: {0}")]
    PageSource(String),
}

impl AdapterError {
    pub fn unrecognized_enum_value(type_name: &'static str, value: impl Into<String>) -> Self {
        AdapterError::UnrecognizedEnumValue {
            type_name,
            value: value.into(),
        }
    }

    pub fn malformed_numeric_field(field: &'static str, literal: impl Into<String>) -> Self {
        AdapterError::MalformedNumericField {
            field,
            literal: literal.into(),
        }
    }
}
