use actix_web::{web, HttpResponse};

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /auth/refresh
///
/// Exchanges a refresh token for a new access token. The refresh token
/// is not rotated: the response echoes the same refresh token, which
/// stays valid until its own expiry or explicit revocation.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "token_type": "bearer",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: malformed, expired, wrong-type, revoked or unknown
///   refresh token, or the account no longer resolves (indistinguishable)
/// - 503 Service Unavailable: revocation store unreachable
pub async fn refresh<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state.sessions.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
