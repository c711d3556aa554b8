//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across accounts
    pub email: String,

    /// Username, unique across accounts; the `sub` claim of issued tokens
    pub username: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Whether the user has admin rights
    pub is_admin: bool,

    /// Whether the account is active; inactive accounts cannot refresh
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active, non-admin user
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            is_admin: false,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}
