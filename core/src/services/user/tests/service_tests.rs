use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::repositories::MockUserRepository;
use crate::services::user::{NewUser, UserService};

fn service() -> (Arc<MockUserRepository>, UserService<MockUserRepository>) {
    let users = Arc::new(MockUserRepository::new());
    let service = UserService::new(users.clone());
    (users, service)
}

fn registration(username: &str) -> NewUser {
    NewUser {
        email: format!("{}@example.com", username),
        username: username.to_string(),
        password: "correct-horse".to_string(),
    }
}

#[tokio::test]
async fn register_hashes_the_password() {
    let (_, service) = service();

    let user = service.register(registration("alice")).await.unwrap();

    assert_eq!(user.username, "alice");
    assert_ne!(user.password_hash, "correct-horse");
    assert!(bcrypt::verify("correct-horse", &user.password_hash).unwrap());
    assert!(user.is_active);
    assert!(!user.is_admin);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let (_, service) = service();
    service.register(registration("alice")).await.unwrap();

    let mut duplicate = registration("alice2");
    duplicate.email = "alice@example.com".to_string();

    assert!(matches!(
        service.register(duplicate).await,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let (_, service) = service();
    service.register(registration("alice")).await.unwrap();

    let mut duplicate = registration("alice");
    duplicate.email = "other@example.com".to_string();

    assert!(matches!(
        service.register(duplicate).await,
        Err(DomainError::Auth(AuthError::UsernameTaken))
    ));
}
