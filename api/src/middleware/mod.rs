//! HTTP middleware: authentication, CORS, security headers.

pub mod auth;
pub mod cors;
pub mod security;

pub use auth::{AuthContext, JwtAuth};
