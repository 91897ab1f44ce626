//! Strict and lenient JSON decoding for inbound payloads.
//!
//! Decoding is a single pass: parse the JSON, optionally check the
//! top-level keys against the schema's declared fields, deserialize into
//! the typed shape, then run the constraint validation pass.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::ValidationError;

/// How fields not declared by the schema are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFields {
    /// Drop undeclared fields silently
    #[default]
    Ignore,
    /// Refuse the payload outright
    Reject,
}

/// Decoding configuration for inbound payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub unknown_fields: UnknownFields,
}

impl DecodeOptions {
    /// Reject payloads carrying undeclared fields
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Reject,
        }
    }

    /// Ignore undeclared fields, the default
    pub fn lenient() -> Self {
        Self {
            unknown_fields: UnknownFields::Ignore,
        }
    }
}

/// Top-level field names a schema admits on the wire.
///
/// Fields of an embedded, flattened struct count as the schema's own.
pub trait DeclaredFields {
    const FIELDS: &'static [&'static str];
}

/// Decodes a payload from a raw JSON string
pub fn decode_str<T>(json: &str, options: DecodeOptions) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate + DeclaredFields,
{
    let value: serde_json::Value = serde_json::from_str(json)?;
    decode_value(value, options)
}

/// Decodes a payload from an already-parsed JSON value
pub fn decode_value<T>(value: serde_json::Value, options: DecodeOptions) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate + DeclaredFields,
{
    if options.unknown_fields == UnknownFields::Reject {
        if let Some(object) = value.as_object() {
            if let Some(field) = object.keys().find(|key| !T::FIELDS.contains(&key.as_str())) {
                tracing::debug!(field = %field, "rejecting payload with undeclared field");
                return Err(ValidationError::UnknownField {
                    field: field.clone(),
                });
            }
        }
    }

    let decoded: T = serde_json::from_value(value)?;

    if let Err(errors) = decoded.validate() {
        tracing::debug!(%errors, "payload failed constraint validation");
        return Err(errors.into());
    }

    Ok(decoded)
}
