//! User record as the persistence layer stores it.

use chrono::{DateTime, Utc};

/// A persisted user row.
///
/// This is what the storage layer hands back when a user is read; the API
/// response shape is produced from it through [`crate::dto::User`]'s `From`
/// projection. The record itself is never serialized, which keeps
/// `password_hash` inside the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Identifier assigned by the persistence layer
    pub id: i64,

    /// Email address the user logs in with
    pub email: String,

    /// Display name shown in the UI
    pub full_name: String,

    /// Password digest produced upstream of this crate
    pub password_hash: String,

    /// Timestamp set when the row was inserted
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a record at persistence time
    ///
    /// The caller supplies the identifier the storage layer assigned;
    /// `created_at` is stamped here.
    pub fn new(id: i64, email: String, full_name: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            full_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
