//! Request and response DTOs.

pub mod auth;
pub mod post;
pub mod user;

pub use ink_shared::types::{ErrorResponse, MessageResponse};
