//! Revocation store trait: blacklisted access tokens and per-user
//! refresh-token sets.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Store trait owning all revocation and refresh-token validity state
///
/// The store is the single owner of cross-request session state. It holds
/// two kinds of entries, both TTL-bounded:
///
/// - a blacklist of revoked access tokens, keyed by the raw token string,
///   whose TTL equals the remaining lifetime of the token it blocks;
/// - one set of currently honored refresh tokens per user, keyed by user
///   id, holding raw token strings. A syntactically valid, unexpired
///   refresh token is still rejected if it is absent from this set.
///
/// Every operation maps store unreachability to [`DomainError::Store`].
/// Callers must propagate that error rather than substitute a default:
/// an unanswerable blacklist check denies access (fail-closed).
///
/// Implementations only need per-key atomicity; no operation here touches
/// more than one key.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Add an access token to the blacklist
    ///
    /// Idempotent; re-blacklisting resets the TTL to the new value (last
    /// write wins).
    ///
    /// # Arguments
    /// * `token` - The raw access-token string
    /// * `ttl_seconds` - Entry lifetime; callers pass the remaining
    ///   lifetime of the token so the entry dies exactly when the token
    ///   would have expired anyway
    async fn blacklist(&self, token: &str, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Check whether an access token is blacklisted
    ///
    /// Existence check only; no side effects.
    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError>;

    /// Add a refresh token to the user's set of honored tokens
    ///
    /// Concurrent calls for the same user accumulate distinct tokens
    /// (multi-device support). Each insertion resets the set's TTL.
    async fn add_refresh(&self, user_id: Uuid, token: &str) -> Result<(), DomainError>;

    /// Check whether a refresh token is currently honored for the user
    async fn is_valid_refresh(&self, user_id: Uuid, token: &str) -> Result<bool, DomainError>;

    /// Revoke one refresh token, or all of them
    ///
    /// With `Some(token)` only that entry is removed; with `None` the
    /// entire set is deleted (all devices logged out). Idempotent in both
    /// forms: revoking an absent token or an empty set is not an error.
    async fn revoke_refresh(&self, user_id: Uuid, token: Option<&str>)
        -> Result<(), DomainError>;
}
