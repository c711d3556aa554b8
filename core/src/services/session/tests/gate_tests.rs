use super::fixtures::{harness, user_with_password};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::RevocationStore;
use crate::services::session::RequestAuthenticator;

#[tokio::test]
async fn gate_accepts_valid_token_and_attaches_it() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let token = h.signer.issue_access(&alice).unwrap();
    let authenticated = h.gate.authenticate(&token).await.unwrap();

    assert_eq!(authenticated.user.id, alice.id);
    assert_eq!(authenticated.user.username, "alice");
    // the raw token rides along so logout knows what to blacklist
    assert_eq!(authenticated.token, token);
}

#[tokio::test]
async fn blacklist_check_precedes_verification() {
    let h = harness();

    // not even a decodable JWT; only the ordering can produce TokenRevoked
    h.store.blacklist("opaque-revoked-blob", 60).await.unwrap();

    assert!(matches!(
        h.gate.authenticate("opaque-revoked-blob").await,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));
}

#[tokio::test]
async fn blacklisted_token_is_rejected_before_natural_expiry() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let token = h.signer.issue_access(&alice).unwrap();
    assert!(h.gate.authenticate(&token).await.is_ok());

    let ttl = h.signer.remaining_ttl(&token);
    h.store.blacklist(&token, ttl).await.unwrap();

    assert!(matches!(
        h.gate.authenticate(&token).await,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));
}

#[tokio::test]
async fn gate_rejects_malformed_token() {
    let h = harness();

    assert!(matches!(
        h.gate.authenticate("three.bogus.segments").await,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[tokio::test]
async fn gate_rejects_unresolvable_subject() {
    let h = harness();
    // alice's token is valid but she is not in the repository
    let alice = user_with_password("alice", "pw1");
    let token = h.signer.issue_access(&alice).unwrap();

    assert!(matches!(
        h.gate.authenticate(&token).await,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn unreachable_store_denies_access() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let token = h.signer.issue_access(&alice).unwrap();
    h.store.set_available(false);

    // fail-closed: a perfectly valid token is denied, not waved through
    assert!(matches!(
        h.gate.authenticate(&token).await,
        Err(DomainError::Store { .. })
    ));
}
