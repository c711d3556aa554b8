//! Per-request access gate

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::TokenSigner;

/// The identity resolved for an authenticated request
///
/// Carries the raw token alongside the user so a later logout knows
/// exactly which token to blacklist.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The resolved user record
    pub user: User,
    /// The raw access token the request presented
    pub token: String,
}

/// Object-safe authentication interface for the HTTP middleware
///
/// The middleware holds this as `Arc<dyn RequestAuthenticator>` so the
/// concrete repository and store types stay out of the API layer.
#[async_trait]
pub trait RequestAuthenticator: Send + Sync {
    /// Resolve an access token to an identity, or reject the request
    async fn authenticate(&self, token: &str) -> DomainResult<AuthenticatedUser>;
}

/// Guard run before any protected operation
pub struct AccessGate<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    user_repository: Arc<U>,
    store: Arc<R>,
    signer: Arc<TokenSigner>,
}

impl<U, R> AccessGate<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    /// Create a new access gate
    pub fn new(user_repository: Arc<U>, store: Arc<R>, signer: Arc<TokenSigner>) -> Self {
        Self {
            user_repository,
            store,
            signer,
        }
    }
}

#[async_trait]
impl<U, R> RequestAuthenticator for AccessGate<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    /// The four checks, in mandatory order:
    ///
    /// 1. blacklist: a revoked token never reaches verification, no
    ///    matter how much lifetime its signature still carries; a store
    ///    failure propagates and denies the request (fail-closed)
    /// 2. signature / structure / expiry
    /// 3. `sub` claim present
    /// 4. subject resolves to a stored user
    async fn authenticate(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        if self.store.is_blacklisted(token).await? {
            tracing::debug!("rejected blacklisted access token");
            return Err(TokenError::TokenRevoked.into());
        }

        let claims = self.signer.verify(token)?;

        if claims.sub.is_empty() {
            return Err(TokenError::InvalidTokenFormat.into());
        }

        let user = self
            .user_repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser {
            user,
            token: token.to_string(),
        })
    }
}
