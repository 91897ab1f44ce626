//! User schemas for registration requests and API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::decode::DeclaredFields;
use crate::domain::entities::UserRecord;

/// Profile fields shared by every user shape.
///
/// Embedded by value in [`UserCreate`] and [`User`] and flattened during
/// (de)serialization, so the wire shape stays flat. Deserialization only
/// checks presence and type; the format rules below apply when the caller
/// runs the explicit validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserBase {
    /// Email address used as the login identifier
    #[validate(email(message = "email address is not valid"))]
    pub email: String,

    /// Display name shown in the UI
    #[validate(length(min = 2, max = 100, message = "full name must be 2 to 100 characters"))]
    pub full_name: String,
}

/// Inbound registration payload.
///
/// Consumed once to create a persisted user. The password arrives in
/// plaintext at this layer; hashing happens downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    /// Shared profile fields, flattened onto the payload
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UserBase,

    /// Plaintext password chosen at registration
    #[validate(
        length(min = 8, max = 100, message = "password must be 8 to 100 characters"),
        custom(function = password_strength, message = "password needs an uppercase letter and a digit")
    )]
    pub password: String,
}

impl UserCreate {
    /// Email the account will be registered under
    pub fn email(&self) -> &str {
        &self.profile.email
    }

    /// Display name for the new account
    pub fn full_name(&self) -> &str {
        &self.profile.full_name
    }
}

impl DeclaredFields for UserCreate {
    const FIELDS: &'static [&'static str] = &["email", "full_name", "password"];
}

/// Outbound user representation.
///
/// Read-only projection of a persisted record for API responses. Built
/// either from a [`UserRecord`] via `From`, or from a plain JSON mapping;
/// both routes serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Shared profile fields, flattened onto the response
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UserBase,

    /// Identifier assigned by the persistence layer
    pub id: i64,

    /// Timestamp set at persistence time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Email the account is registered under
    pub fn email(&self) -> &str {
        &self.profile.email
    }

    /// Display name shown in the UI
    pub fn full_name(&self) -> &str {
        &self.profile.full_name
    }
}

impl DeclaredFields for User {
    const FIELDS: &'static [&'static str] = &["email", "full_name", "id", "created_at"];
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            profile: UserBase {
                email: record.email.clone(),
                full_name: record.full_name.clone(),
            },
            id: record.id,
            created_at: record.created_at,
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            profile: UserBase {
                email: record.email,
                full_name: record.full_name,
            },
            id: record.id,
            created_at: record.created_at,
        }
    }
}

/// Passwords need at least one uppercase letter and one digit
fn password_strength(password: &str) -> Result<(), validator::ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_uppercase && has_digit {
        Ok(())
    } else {
        Err(validator::ValidationError::new("password_strength"))
    }
}
