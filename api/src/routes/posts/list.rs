use actix_web::{web, HttpResponse};

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};

use crate::app::AppState;
use crate::dto::post::PostResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /posts
///
/// Lists all posts, newest first. Public.
pub async fn list_posts<U, P, R>(state: web::Data<AppState<U, P, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    match state.posts.list().await {
        Ok(posts) => HttpResponse::Ok().json(
            posts
                .into_iter()
                .map(PostResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}
