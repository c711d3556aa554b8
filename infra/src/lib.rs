//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `ink_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: the Redis-backed revocation store
//!
//! Handles are constructed explicitly at process start and injected into
//! the core services; nothing in this crate is a global singleton.

pub mod cache;
pub mod database;

use ink_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            // an unreachable store must surface as such, never as a
            // silent "not found": callers fail closed on this variant
            InfrastructureError::Cache(e) => DomainError::Store {
                message: e.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
