//! Database layer: connection pooling and MySQL repository implementations.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlPostRepository, MySqlUserRepository};
