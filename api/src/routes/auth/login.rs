use actix_web::{web, HttpResponse};

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /auth/login
///
/// Authenticates a user and issues an access/refresh token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "secret"
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
/// - 401 Unauthorized: unknown user or wrong password (indistinguishable)
/// - 503 Service Unavailable: revocation store unreachable
pub async fn login<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state
        .sessions
        .login(&request.username, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
