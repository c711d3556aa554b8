//! Shared fixtures for session tests

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::repositories::{MockRevocationStore, MockUserRepository};
use crate::services::session::{AccessGate, SessionService};
use crate::services::token::{TokenConfig, TokenSigner};

/// Low bcrypt cost keeps the test suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn user_with_password(username: &str, password: &str) -> User {
    User::new(
        format!("{}@example.com", username),
        username.to_string(),
        bcrypt::hash(password, TEST_BCRYPT_COST).unwrap(),
    )
}

pub fn signer() -> Arc<TokenSigner> {
    Arc::new(
        TokenSigner::new(TokenConfig {
            secret: "session-test-secret".to_string(),
            ..TokenConfig::default()
        })
        .unwrap(),
    )
}

pub struct SessionHarness {
    pub users: Arc<MockUserRepository>,
    pub store: Arc<MockRevocationStore>,
    pub signer: Arc<TokenSigner>,
    pub sessions: SessionService<MockUserRepository, MockRevocationStore>,
    pub gate: AccessGate<MockUserRepository, MockRevocationStore>,
}

pub fn harness() -> SessionHarness {
    let users = Arc::new(MockUserRepository::new());
    let store = Arc::new(MockRevocationStore::new());
    let signer = signer();

    let sessions = SessionService::new(users.clone(), store.clone(), signer.clone());
    let gate = AccessGate::new(users.clone(), store.clone(), signer.clone());

    SessionHarness {
        users,
        store,
        signer,
        sessions,
        gate,
    }
}
