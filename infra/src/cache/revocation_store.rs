//! Redis-backed implementation of the revocation store.
//!
//! Key layout:
//!
//! - `blacklist:{token}`: sentinel value, TTL = remaining lifetime of the
//!   revoked access token
//! - `refresh_tokens:{user_id}`: set of raw refresh-token strings, TTL =
//!   refresh lifetime plus a one-day grace period, reset on every insert
//!
//! Each operation touches exactly one key; correctness relies on Redis'
//! native per-key atomicity, no transactions needed.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use ink_core::errors::DomainError;
use ink_core::repositories::RevocationStore;

use super::redis_client::RedisClient;

/// Key prefix for blacklisted access tokens
const BLACKLIST_PREFIX: &str = "blacklist:";

/// Key prefix for per-user refresh-token sets
const REFRESH_SET_PREFIX: &str = "refresh_tokens:";

/// Sentinel stored under blacklist keys; only existence matters
const BLACKLIST_SENTINEL: &str = "1";

/// Grace period added to the refresh-set TTL so the set outlives the
/// newest token it can contain
pub const REFRESH_SET_GRACE_SECONDS: u64 = 86_400;

/// Redis implementation of [`RevocationStore`]
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
    /// Configured refresh-token lifetime in seconds
    refresh_ttl_seconds: u64,
}

impl RedisRevocationStore {
    /// Create a new store on top of an established client
    pub fn new(client: RedisClient, refresh_ttl_seconds: u64) -> Self {
        Self {
            client,
            refresh_ttl_seconds,
        }
    }

    /// TTL applied to refresh-token sets
    fn refresh_set_ttl(&self) -> u64 {
        self.refresh_ttl_seconds + REFRESH_SET_GRACE_SECONDS
    }

    fn blacklist_key(token: &str) -> String {
        format!("{}{}", BLACKLIST_PREFIX, token)
    }

    fn refresh_key(user_id: Uuid) -> String {
        format!("{}{}", REFRESH_SET_PREFIX, user_id)
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn blacklist(&self, token: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        // TTL 0 would mean "no expiry" in Redis; floor at one second
        let ttl = ttl_seconds.max(1);
        debug!(ttl, "blacklisting access token");

        self.client
            .set_with_expiry(&Self::blacklist_key(token), BLACKLIST_SENTINEL, ttl)
            .await
            .map_err(DomainError::from)
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        self.client
            .exists(&Self::blacklist_key(token))
            .await
            .map_err(DomainError::from)
    }

    async fn add_refresh(&self, user_id: Uuid, token: &str) -> Result<(), DomainError> {
        debug!(%user_id, "registering refresh token");

        self.client
            .sadd_with_expiry(&Self::refresh_key(user_id), token, self.refresh_set_ttl())
            .await
            .map_err(DomainError::from)
    }

    async fn is_valid_refresh(&self, user_id: Uuid, token: &str) -> Result<bool, DomainError> {
        self.client
            .sismember(&Self::refresh_key(user_id), token)
            .await
            .map_err(DomainError::from)
    }

    async fn revoke_refresh(
        &self,
        user_id: Uuid,
        token: Option<&str>,
    ) -> Result<(), DomainError> {
        match token {
            Some(token) => {
                debug!(%user_id, "revoking one refresh token");
                self.client
                    .srem(&Self::refresh_key(user_id), token)
                    .await
                    .map(|_| ())
                    .map_err(DomainError::from)
            }
            None => {
                debug!(%user_id, "revoking all refresh tokens");
                self.client
                    .delete(&Self::refresh_key(user_id))
                    .await
                    .map(|_| ())
                    .map_err(DomainError::from)
            }
        }
    }
}
