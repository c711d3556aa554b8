//! Session lifecycle module
//!
//! Orchestrates the login → refresh → logout lifecycle on top of the
//! token signer and the revocation store, and provides the per-request
//! access gate that guards protected endpoints.

mod gate;
mod service;

#[cfg(test)]
mod tests;

pub use gate::{AccessGate, AuthenticatedUser, RequestAuthenticator};
pub use service::SessionService;
