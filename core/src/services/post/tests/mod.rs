//! Tests for the post service

#[cfg(test)]
mod service_tests;
