use actix_web::{web, HttpResponse};
use validator::Validate;

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::user::{RegisterRequest, UserResponse};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /register
///
/// Creates a new account. Email and username must be unused; the
/// password must be at least 8 characters and is stored only as a
/// bcrypt hash.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "email": "alice@example.com",
///     "username": "alice",
///     "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: validation failure or duplicate email/username
pub async fn register<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", errors.to_string()));
    }

    match state.users.register(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
