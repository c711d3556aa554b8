//! Tests for the session manager and the access gate

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod gate_tests;
#[cfg(test)]
mod service_tests;
