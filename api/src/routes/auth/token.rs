use actix_web::{web, HttpResponse};

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{TokenForm, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /auth/token
///
/// OAuth2 password-flow shaped variant of login: credentials arrive
/// form-encoded instead of as JSON. Same semantics, same responses.
pub async fn token<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    form: web::Form<TokenForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state.sessions.login(&form.username, &form.password).await {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
