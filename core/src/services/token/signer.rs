//! JWT signer implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Signer for access and refresh tokens
///
/// Owns no mutable state: pure functions over a fixed secret and
/// algorithm. Verification here never consults the revocation store;
/// that check belongs to the session manager and the access gate.
pub struct TokenSigner {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Validation variant that ignores `exp`, used to read the remaining
    /// lifetime out of tokens that may already be expired
    expiry_probe: Validation,
}

impl TokenSigner {
    /// Creates a new token signer
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret, algorithm and token lifetimes
    ///
    /// # Returns
    ///
    /// A new `TokenSigner`, or an error if the secret is unusable
    pub fn new(config: TokenConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let validation = Validation::new(config.algorithm);

        let mut expiry_probe = Validation::new(config.algorithm);
        expiry_probe.validate_exp = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            expiry_probe,
        })
    }

    /// Issues an access token for the user
    ///
    /// Claims carry `sub` (username), `email`, `user_id` and `is_admin`;
    /// `exp` is now plus the configured access TTL and `jti` is fresh.
    /// Fails only on signing misconfiguration, never on valid input.
    pub fn issue_access(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new_access(
            &user.username,
            &user.email,
            user.id,
            user.is_admin,
            self.config.access_token_expiry_minutes,
        );
        self.encode(&claims)
    }

    /// Issues a refresh token for the user
    ///
    /// Carries the `type = "refresh"` marker so refresh tokens are
    /// distinguishable structurally, not just by storage location.
    pub fn issue_refresh(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new_refresh(
            &user.username,
            user.id,
            self.config.refresh_token_expiry_days,
        );
        self.encode(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns the decoded claims
    ///
    /// Checks signature, structure and expiry. Stateless: a revoked token
    /// still verifies here; the blacklist is consulted by the caller.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Verifies a refresh token: signature, expiry and the `type` marker
    pub fn verify_refresh(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.verify(token)?;
        if !claims.is_refresh() {
            return Err(DomainError::Token(TokenError::WrongTokenType));
        }
        Ok(claims)
    }

    /// Seconds until the token's `exp`, floored at 1
    ///
    /// Computed even if the token is already expired. When the claims
    /// cannot be decoded at all, falls back to the configured access TTL
    /// so a blacklist entry keyed on the token still covers its longest
    /// possible remaining lifetime.
    pub fn remaining_ttl(&self, token: &str) -> u64 {
        match decode::<Claims>(token, &self.decoding_key, &self.expiry_probe) {
            Ok(token_data) => {
                let remaining = token_data.claims.exp - chrono::Utc::now().timestamp();
                remaining.max(1) as u64
            }
            Err(_) => self.access_ttl_seconds(),
        }
    }

    /// The configured access-token lifetime in seconds
    pub fn access_ttl_seconds(&self) -> u64 {
        (self.config.access_token_expiry_minutes * 60).max(1) as u64
    }
}
