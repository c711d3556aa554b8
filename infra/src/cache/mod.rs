//! Redis layer: the connection client and the revocation store built on it.

pub mod redis_client;
pub mod revocation_store;

pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;
