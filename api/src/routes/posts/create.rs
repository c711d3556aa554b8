use actix_web::{web, HttpResponse};
use validator::Validate;

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::post::{CreatePostRequest, PostResponse};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /posts
///
/// Creates a post authored by the authenticated user.
pub async fn create_post<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    auth: AuthContext,
    request: web::Json<CreatePostRequest>,
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

    match state
        .posts
        .create(request.into_inner().into(), &auth.user)
        .await
    {
        Ok(post) => HttpResponse::Created().json(PostResponse::from(post)),
        Err(error) => handle_domain_error(&error),
    }
}
