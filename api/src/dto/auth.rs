//! Authentication DTOs.

use serde::{Deserialize, Serialize};

use ink_core::domain::entities::token::TokenPair;

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Form body of `POST /auth/token` (OAuth2 password flow shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/refresh`
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Optional body of `POST /auth/logout`
///
/// Supplying the device's refresh token revokes it along with the
/// access token; other devices stay logged in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Token pair returned by login, token and refresh endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            token_type: pair.token_type,
            refresh_token: pair.refresh_token,
        }
    }
}
