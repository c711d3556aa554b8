//! Domain error to HTTP response mapping.
//!
//! Every authentication and token failure collapses into ONE generic 401
//! body. Which check failed (bad password, expired signature, revoked
//! token, unknown subject) is logged server-side but never surfaced, so
//! rejected clients cannot probe why a token was refused.

use actix_web::http::header;
use actix_web::HttpResponse;

use ink_core::errors::{AuthError, DomainError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the HTTP response sent to the client
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::EmailAlreadyRegistered => HttpResponse::BadRequest().json(
                ErrorResponse::new("email_taken", "Email already registered"),
            ),
            AuthError::UsernameTaken => HttpResponse::BadRequest()
                .json(ErrorResponse::new("username_taken", "Username already taken")),
            _ => {
                log::warn!("Authentication rejected: {}", auth_error);
                unauthorized_response()
            }
        },
        DomainError::Token(token_error) => {
            log::warn!("Token rejected: {}", token_error);
            unauthorized_response()
        }
        DomainError::Unauthorized => HttpResponse::Forbidden().json(ErrorResponse::new(
            "forbidden",
            "You do not have permission to modify this resource",
        )),
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorResponse::new(
                "not_found",
                format!("{} not found", resource),
            ))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::Store { message } => {
            log::error!("Revocation store unavailable: {}", message);
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                "service_unavailable",
                "Service temporarily unavailable",
            ))
        }
        DomainError::Database { message } | DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// The single body every 401 carries, whatever the actual reason
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
        .json(ErrorResponse::new("unauthorized", "Authentication failed"))
}
