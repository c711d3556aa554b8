//! Route handlers, one module per endpoint area.

pub mod auth;
pub mod posts;
pub mod users;
