//! Schema validation errors and the standard error response shape.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a payload fails the schema contract.
///
/// Surfaced directly to whatever endpoint consumes the schema; there is no
/// local recovery.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Payload was not valid JSON, or a required field was missing or of
    /// the wrong type
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload carried a field the schema does not declare (strict
    /// decoding only)
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// A field broke one of its declared constraints
    #[error("constraint violation: {0}")]
    Constraint(#[from] validator::ValidationErrors),
}

/// Common error codes carried in [`ErrorResponse::error`]
pub mod error_codes {
    pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
    pub const UNKNOWN_FIELD: &str = "UNKNOWN_FIELD";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::Malformed(_) => {
                ErrorResponse::new(error_codes::MALFORMED_PAYLOAD, err.to_string())
            }
            ValidationError::UnknownField { field } => {
                ErrorResponse::new(error_codes::UNKNOWN_FIELD, err.to_string())
                    .add_detail("field", field)
            }
            ValidationError::Constraint(errors) => {
                let mut response =
                    ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string());
                for (field, messages) in field_messages(errors) {
                    response = response.add_detail(field, messages);
                }
                response
            }
        }
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        ErrorResponse::from(&err)
    }
}

/// Flattens validator output into per-field message lists keyed by the
/// wire-level field name
pub fn field_messages(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    let mut out = HashMap::new();
    collect_messages(errors, &mut out);
    out
}

fn collect_messages(
    errors: &validator::ValidationErrors,
    out: &mut HashMap<String, Vec<String>>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(field.to_string()).or_insert_with(Vec::new);
                for error in field_errors {
                    match &error.message {
                        Some(message) => messages.push(message.to_string()),
                        None => messages.push(error.code.to_string()),
                    }
                }
            }
            // Embedded profile structs serialize flattened, so their inner
            // field names are already the wire-level names
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}
