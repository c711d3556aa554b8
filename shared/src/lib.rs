//! # Inkwell Shared
//!
//! Cross-cutting types shared by every layer of the Inkwell backend:
//! environment-driven configuration and the wire-level response envelopes.

pub mod config;
pub mod types;
