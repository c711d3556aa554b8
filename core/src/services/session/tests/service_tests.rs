use super::fixtures::{harness, user_with_password};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::RevocationStore;
use crate::services::session::RequestAuthenticator;

#[tokio::test]
async fn login_returns_verifiable_pair_with_subject() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let pair = h.sessions.login("alice", "pw1").await.unwrap();

    assert_eq!(pair.token_type, "bearer");
    let claims = h.signer.verify(&pair.access_token).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.user_id, alice.id);

    // the refresh token was registered for this user
    assert_eq!(h.store.refresh_count(alice.id).await, 1);
    assert!(h
        .store
        .is_valid_refresh(alice.id, &pair.refresh_token)
        .await
        .unwrap());
}

#[tokio::test]
async fn login_with_wrong_password_persists_nothing() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let result = h.sessions.login("alice", "wrong").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));
    assert_eq!(h.store.refresh_count(alice.id).await, 0);
}

#[tokio::test]
async fn login_with_unknown_user_fails_identically() {
    let h = harness();

    let result = h.sessions.login("nobody", "pw1").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));
}

#[tokio::test]
async fn concurrent_logins_accumulate_refresh_tokens() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let first = h.sessions.login("alice", "pw1").await.unwrap();
    let second = h.sessions.login("alice", "pw1").await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(h.store.refresh_count(alice.id).await, 2);
}

#[tokio::test]
async fn refresh_issues_new_access_and_echoes_same_refresh() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let pair = h.sessions.login("alice", "pw1").await.unwrap();
    let refreshed = h.sessions.refresh(&pair.refresh_token).await.unwrap();

    assert_ne!(refreshed.access_token, pair.access_token);
    assert_eq!(refreshed.refresh_token, pair.refresh_token);
    assert_eq!(
        h.signer.verify(&refreshed.access_token).unwrap().sub,
        "alice"
    );
}

#[tokio::test]
async fn refresh_rejects_token_absent_from_store() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    // cryptographically valid and unexpired, but never registered
    let stray = h.signer.issue_refresh(&alice).unwrap();

    assert!(matches!(
        h.sessions.refresh(&stray).await,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn refresh_rejects_access_token_by_type() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let pair = h.sessions.login("alice", "pw1").await.unwrap();

    assert!(matches!(
        h.sessions.refresh(&pair.access_token).await,
        Err(DomainError::Token(TokenError::WrongTokenType))
    ));
}

#[tokio::test]
async fn refresh_rejects_deactivated_account() {
    let h = harness();
    let mut alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let pair = h.sessions.login("alice", "pw1").await.unwrap();

    alice.deactivate();
    h.users.insert(alice).await;

    assert!(matches!(
        h.sessions.refresh(&pair.refresh_token).await,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));
}

#[tokio::test]
async fn logout_blacklists_for_remaining_lifetime() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let pair = h.sessions.login("alice", "pw1").await.unwrap();
    let remaining = h.signer.remaining_ttl(&pair.access_token);

    h.sessions
        .logout(alice.id, &pair.access_token, None)
        .await
        .unwrap();

    let recorded = h.store.blacklisted_ttl(&pair.access_token).await.unwrap();
    assert!(recorded <= remaining);
    assert!(recorded + 1 >= remaining);

    // without a refresh token in the request, the set is untouched
    assert_eq!(h.store.refresh_count(alice.id).await, 1);
}

#[tokio::test]
async fn logout_with_refresh_token_revokes_only_that_device() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let phone = h.sessions.login("alice", "pw1").await.unwrap();
    let laptop = h.sessions.login("alice", "pw1").await.unwrap();

    h.sessions
        .logout(alice.id, &phone.access_token, Some(&phone.refresh_token))
        .await
        .unwrap();

    assert!(!h
        .store
        .is_valid_refresh(alice.id, &phone.refresh_token)
        .await
        .unwrap());
    assert!(h
        .store
        .is_valid_refresh(alice.id, &laptop.refresh_token)
        .await
        .unwrap());
}

#[tokio::test]
async fn logout_all_invalidates_every_refresh_token_of_that_user_only() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    let bob = user_with_password("bob", "pw2");
    h.users.insert(alice.clone()).await;
    h.users.insert(bob.clone()).await;

    let alice_phone = h.sessions.login("alice", "pw1").await.unwrap();
    let alice_laptop = h.sessions.login("alice", "pw1").await.unwrap();
    let bob_session = h.sessions.login("bob", "pw2").await.unwrap();

    h.sessions
        .logout_all(alice.id, &alice_phone.access_token)
        .await
        .unwrap();

    assert!(matches!(
        h.sessions.refresh(&alice_phone.refresh_token).await,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
    assert!(matches!(
        h.sessions.refresh(&alice_laptop.refresh_token).await,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));

    // a different user's refresh token remains valid
    assert!(h.sessions.refresh(&bob_session.refresh_token).await.is_ok());
}

#[tokio::test]
async fn logout_propagates_store_failure() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    let pair = h.sessions.login("alice", "pw1").await.unwrap();

    h.store.set_available(false);

    assert!(matches!(
        h.sessions.logout(alice.id, &pair.access_token, None).await,
        Err(DomainError::Store { .. })
    ));
}

/// The full lifecycle walk: login, refresh, logout-all, and the access
/// tokens that were never individually blacklisted surviving to natural
/// expiry (the blacklist is per-token, not per-user).
#[tokio::test]
async fn lifecycle_scenario_blacklist_is_per_token() {
    let h = harness();
    let alice = user_with_password("alice", "pw1");
    h.users.insert(alice.clone()).await;

    // login -> access A1, refresh R1
    let first = h.sessions.login("alice", "pw1").await.unwrap();

    // refresh(R1) -> new access A2, same R1
    let second = h.sessions.refresh(&first.refresh_token).await.unwrap();
    assert_ne!(second.access_token, first.access_token);
    assert_eq!(second.refresh_token, first.refresh_token);

    // logout_all blacklists the token passed to it (A2, the current one)
    h.sessions
        .logout_all(alice.id, &second.access_token)
        .await
        .unwrap();

    // refresh(R1) now fails
    assert!(h.sessions.refresh(&first.refresh_token).await.is_err());

    // A2 was blacklisted and is rejected by the gate
    assert!(matches!(
        h.gate.authenticate(&second.access_token).await,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));

    // A1 was never blacklisted: still accepted until its natural expiry
    let authenticated = h.gate.authenticate(&first.access_token).await.unwrap();
    assert_eq!(authenticated.user.id, alice.id);
}
