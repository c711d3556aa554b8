use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::post::{PostResponse, UpdatePostRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for PATCH /posts/{post_id}
///
/// Applies a partial update. Only the post's author may edit it.
///
/// ## Errors
/// - 401 Unauthorized: missing or invalid access token
/// - 403 Forbidden: the authenticated user is not the author
/// - 404 Not Found: no such post
pub async fn update_post<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    auth: AuthContext,
    post_id: web::Path<Uuid>,
    request: web::Json<UpdatePostRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state
        .posts
        .update(
            post_id.into_inner(),
            request.into_inner().into(),
            &auth.user,
        )
        .await
    {
        Ok(post) => HttpResponse::Ok().json(PostResponse::from(post)),
        Err(error) => handle_domain_error(&error),
    }
}
