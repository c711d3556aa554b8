use actix_web::{web, HttpResponse};

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /auth/logout-all
///
/// Blacklists the presented access token and revokes every refresh token
/// the user holds, logging out all devices. Access tokens issued to
/// other devices are not blacklisted; they expire naturally.
///
/// Requires authentication via Bearer token in the Authorization header.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out from all devices"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, invalid or already revoked access token
/// - 503 Service Unavailable: revocation store unreachable
pub async fn logout_all<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state.sessions.logout_all(auth.user.id, &auth.token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Logged out from all devices")),
        Err(error) => handle_domain_error(&error),
    }
}
