//! User route handlers

pub mod register;
