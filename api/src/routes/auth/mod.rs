//! Authentication route handlers
//!
//! - login (JSON) and token (OAuth2 form) issue the access/refresh pair
//! - refresh exchanges a refresh token for a new access token
//! - logout and logout-all revoke tokens; both require a bearer token

pub mod login;
pub mod logout;
pub mod logout_all;
pub mod refresh;
pub mod token;
