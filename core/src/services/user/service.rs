//! User registration service

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Registration data for a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Service for account management
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Register a new account
    ///
    /// Email and username must both be unused. The password is hashed
    /// with bcrypt before the record is stored; the plain text never
    /// leaves this function.
    pub async fn register(&self, new_user: NewUser) -> DomainResult<User> {
        if self
            .user_repository
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        if self
            .user_repository
            .find_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash =
            bcrypt::hash(&new_user.password, bcrypt::DEFAULT_COST).map_err(|e| {
                DomainError::Internal {
                    message: format!("Password hashing failed: {}", e),
                }
            })?;

        let user = User::new(new_user.email, new_user.username, password_hash);
        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(user)
    }
}
