//! Tests for the token signer
