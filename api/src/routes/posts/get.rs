use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::post::PostResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /posts/{post_id}
///
/// Fetches a single post. Public.
pub async fn get_post<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    post_id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state.posts.get(post_id.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(PostResponse::from(post)),
        Err(error) => handle_domain_error(&error),
    }
}
