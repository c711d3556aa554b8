//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// The `type` claim value marking refresh tokens
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Token type reported to clients in token responses
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Claims structure for the JWT payload
///
/// Access tokens carry the full identity (`sub`, `email`, `user_id`,
/// `is_admin`); refresh tokens carry only `sub` and `user_id` plus the
/// `type = "refresh"` marker that distinguishes them structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Email address (access tokens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// User identifier
    pub user_id: Uuid,

    /// Whether the user has admin rights
    #[serde(default)]
    pub is_admin: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Token type marker (`"refresh"` for refresh tokens, absent otherwise)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// Injects `iat`/`exp` from the given expiry and a fresh `jti`.
    pub fn new_access(
        username: &str,
        email: &str,
        user_id: Uuid,
        is_admin: bool,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: username.to_string(),
            email: Some(email.to_string()),
            user_id,
            is_admin,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: None,
        }
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh(username: &str, user_id: Uuid, expiry_days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(expiry_days);

        Self {
            sub: username.to_string(),
            email: None,
            user_id,
            is_admin: false,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Checks if these claims belong to a refresh token
    pub fn is_refresh(&self) -> bool {
        self.token_type.as_deref() == Some(REFRESH_TOKEN_TYPE)
    }

    /// Seconds until expiry, floored at zero
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }
}

/// Token pair returned to the client on login and refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Token type for the Authorization header (`"bearer"`)
    pub token_type: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
            refresh_token,
        }
    }
}
