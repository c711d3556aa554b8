use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for DELETE /posts/{post_id}
///
/// Deletes a post. Only the post's author may delete it.
///
/// ## Errors
/// - 401 Unauthorized: missing or invalid access token
/// - 403 Forbidden: the authenticated user is not the author
/// - 404 Not Found: no such post
pub async fn delete_post<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    auth: AuthContext,
    post_id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state.posts.delete(post_id.into_inner(), &auth.user).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
