use actix_web::{web, HttpResponse};

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::LogoutRequest;
use crate::dto::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /auth/logout
///
/// Blacklists the presented access token for its remaining lifetime.
/// If the request body names the device's refresh token, that token is
/// revoked as well; sessions on other devices are unaffected.
///
/// Requires authentication via Bearer token in the Authorization header.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, invalid or already revoked access token
/// - 503 Service Unavailable: revocation store unreachable
pub async fn logout<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    auth: AuthContext,
    body: Option<web::Json<LogoutRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    let refresh_token = body
        .as_ref()
        .and_then(|request| request.refresh_token.as_deref());

    match state
        .sessions
        .logout(auth.user.id, &auth.token, refresh_token)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Logged out successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
