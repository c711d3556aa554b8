//! Session manager implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::TokenSigner;

/// Service orchestrating the session lifecycle
///
/// Holds no per-session state of its own; everything that must survive a
/// request lives in the revocation store. One instance is shared across
/// all workers behind an `Arc`.
pub struct SessionService<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Revocation store holding blacklist and refresh-token state
    store: Arc<R>,
    /// Token signer for issuing and verifying JWTs
    signer: Arc<TokenSigner>,
}

impl<U, R> SessionService<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    /// Create a new session service
    pub fn new(user_repository: Arc<U>, store: Arc<R>, signer: Arc<TokenSigner>) -> Self {
        Self {
            user_repository,
            store,
            signer,
        }
    }

    /// Authenticate a user and issue a token pair
    ///
    /// Looks up the credential record and verifies the password. On
    /// success an access token and a refresh token are issued, and the
    /// refresh token is registered in the user's store set so it can be
    /// honored (and revoked) later.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access + refresh tokens
    /// * `Err(DomainError)` - Unknown user or password mismatch, both as
    ///   `AuthError::AuthenticationFailed`
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let password_matches = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            crate::errors::DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            }
        })?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed.into());
        }

        let access_token = self.signer.issue_access(&user)?;
        let refresh_token = self.signer.issue_refresh(&user)?;

        self.store.add_refresh(user.id, &refresh_token).await?;

        tracing::info!(user_id = %user.id, "session opened");

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token must carry a valid signature, be unexpired, be
    /// marked `type = "refresh"`, and still be present in the user's
    /// store set. The user record is re-fetched so deactivated accounts
    /// stop refreshing immediately.
    ///
    /// The refresh token is NOT rotated: the same token is echoed back
    /// and stays valid until its own expiry or explicit revocation.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.signer.verify_refresh(refresh_token)?;

        if !self
            .store
            .is_valid_refresh(claims.user_id, refresh_token)
            .await?
        {
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let user = self
            .user_repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if !user.is_active {
            return Err(AuthError::AuthenticationFailed.into());
        }

        let access_token = self.signer.issue_access(&user)?;

        tracing::debug!(user_id = %user.id, "access token refreshed");

        Ok(TokenPair::new(access_token, refresh_token.to_string()))
    }

    /// Close the current session
    ///
    /// Blacklists the presented access token for exactly its remaining
    /// lifetime. If the device's refresh token is supplied it is revoked
    /// too; other devices stay logged in.
    pub async fn logout(
        &self,
        user_id: Uuid,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        let ttl = self.signer.remaining_ttl(access_token);
        self.store.blacklist(access_token, ttl).await?;

        if let Some(token) = refresh_token {
            self.store.revoke_refresh(user_id, Some(token)).await?;
        }

        tracing::info!(%user_id, "session closed");

        Ok(())
    }

    /// Close every session of the user
    ///
    /// Blacklists the presented access token and deletes the user's
    /// entire refresh-token set. Access tokens issued to other devices
    /// are not blacklisted; they die at their natural expiry.
    pub async fn logout_all(&self, user_id: Uuid, access_token: &str) -> DomainResult<()> {
        let ttl = self.signer.remaining_ttl(access_token);
        self.store.blacklist(access_token, ttl).await?;

        self.store.revoke_refresh(user_id, None).await?;

        tracing::info!(%user_id, "all sessions closed");

        Ok(())
    }
}
