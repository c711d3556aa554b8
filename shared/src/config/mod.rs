//! Configuration modules for the Inkwell backend.
//!
//! Every config struct has sensible development defaults and a `from_env`
//! constructor; the binary loads `.env` once and builds an [`AppConfig`].

pub mod auth;
pub mod cache;
pub mod database;
pub mod server;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Relational database settings
    pub database: DatabaseConfig,

    /// Redis revocation-store settings
    pub cache: CacheConfig,

    /// JWT signing settings
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Assemble the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}
