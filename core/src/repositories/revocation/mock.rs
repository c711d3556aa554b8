//! Mock implementation of RevocationStore for testing
//!
//! TTLs are recorded but not enforced; tests read them back to assert the
//! expiry-alignment invariant. The store can be switched to an unavailable
//! state to exercise fail-closed behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainError;

use super::r#trait::RevocationStore;

/// Mock revocation store for testing
pub struct MockRevocationStore {
    blacklist: Arc<RwLock<HashMap<String, u64>>>,
    refresh_sets: Arc<RwLock<HashMap<Uuid, HashSet<String>>>>,
    available: AtomicBool,
}

impl MockRevocationStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            blacklist: Arc::new(RwLock::new(HashMap::new())),
            refresh_sets: Arc::new(RwLock::new(HashMap::new())),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the store becoming unreachable (or reachable again)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// The TTL recorded when `token` was blacklisted, if it was
    pub async fn blacklisted_ttl(&self, token: &str) -> Option<u64> {
        self.blacklist.read().await.get(token).copied()
    }

    /// Number of refresh tokens currently held for the user
    pub async fn refresh_count(&self, user_id: Uuid) -> usize {
        self.refresh_sets
            .read()
            .await
            .get(&user_id)
            .map(|set| set.len())
            .unwrap_or(0)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::Store {
                message: "connection refused".to_string(),
            })
        }
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn blacklist(&self, token: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        self.check_available()?;
        self.blacklist
            .write()
            .await
            .insert(token.to_string(), ttl_seconds);
        Ok(())
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.blacklist.read().await.contains_key(token))
    }

    async fn add_refresh(&self, user_id: Uuid, token: &str) -> Result<(), DomainError> {
        self.check_available()?;
        self.refresh_sets
            .write()
            .await
            .entry(user_id)
            .or_default()
            .insert(token.to_string());
        Ok(())
    }

    async fn is_valid_refresh(&self, user_id: Uuid, token: &str) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self
            .refresh_sets
            .read()
            .await
            .get(&user_id)
            .map(|set| set.contains(token))
            .unwrap_or(false))
    }

    async fn revoke_refresh(
        &self,
        user_id: Uuid,
        token: Option<&str>,
    ) -> Result<(), DomainError> {
        self.check_available()?;
        let mut sets = self.refresh_sets.write().await;
        match token {
            Some(token) => {
                if let Some(set) = sets.get_mut(&user_id) {
                    set.remove(token);
                }
            }
            None => {
                sets.remove(&user_id);
            }
        }
        Ok(())
    }
}
