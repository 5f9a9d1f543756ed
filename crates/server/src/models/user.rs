//! User domain types.

use serde::{Deserialize, Serialize};

use shopdesk_core::UserId;

/// A stored user.
///
/// The password column is never selected into this type, so it cannot leak
/// into a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    /// Server-assigned user ID.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users (enforced by the database only).
    pub email: String,
}

/// Request body for creating or replacing a user.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Deserialize)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as submitted. Not hashed.
    pub password: String,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
