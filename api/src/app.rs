//! Application state and route wiring.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use ink_core::repositories::{PostRepository, RevocationStore, UserRepository};
use ink_core::services::post::PostService;
use ink_core::services::session::SessionService;
use ink_core::services::user::UserService;

use crate::middleware::auth::JwtAuth;
use crate::routes;

/// Shared application state injected into every handler
///
/// Holds the core services behind `Arc`s; the concrete repository and
/// store types are fixed once, in `main`, and flow through the type
/// parameters.
pub struct AppState<U, P, R>
where
    U: UserRepository,
    P: PostRepository,
    R: RevocationStore,
{
    /// Session lifecycle: login, refresh, logout, logout-all
    pub sessions: Arc<SessionService<U, R>>,
    /// Account registration
    pub users: Arc<UserService<U>>,
    /// Post CRUD
    pub posts: Arc<PostService<P>>,
}

impl<U, P, R> Clone for AppState<U, P, R>
where
    U: UserRepository,
    P: PostRepository,
    R: RevocationStore,
{
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            users: self.users.clone(),
            posts: self.posts.clone(),
        }
    }
}

/// Register every route of the service
///
/// Protected routes sit inside scopes wrapped with [`JwtAuth`]; the
/// access gate runs before any of their handlers.
pub fn configure<U, P, R>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    R: RevocationStore + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .route(
            "/register",
            web::post().to(routes::users::register::register::<U, P, R>),
        )
        .service(
            web::scope("/auth")
                .route(
                    "/login",
                    web::post().to(routes::auth::login::login::<U, P, R>),
                )
                .route(
                    "/token",
                    web::post().to(routes::auth::token::token::<U, P, R>),
                )
                .route(
                    "/refresh",
                    web::post().to(routes::auth::refresh::refresh::<U, P, R>),
                )
                .service(
                    web::scope("")
                        .wrap(JwtAuth::new())
                        .route(
                            "/logout",
                            web::post().to(routes::auth::logout::logout::<U, P, R>),
                        )
                        .route(
                            "/logout-all",
                            web::post().to(routes::auth::logout_all::logout_all::<U, P, R>),
                        ),
                ),
        )
        .service(
            web::scope("/posts")
                .route(
                    "",
                    web::get().to(routes::posts::list::list_posts::<U, P, R>),
                )
                .route(
                    "/{post_id}",
                    web::get().to(routes::posts::get::get_post::<U, P, R>),
                )
                .service(
                    web::scope("")
                        .wrap(JwtAuth::new())
                        .route(
                            "",
                            web::post().to(routes::posts::create::create_post::<U, P, R>),
                        )
                        .route(
                            "/{post_id}",
                            web::patch().to(routes::posts::update::update_post::<U, P, R>),
                        )
                        .route(
                            "/{post_id}",
                            web::delete().to(routes::posts::delete::delete_post::<U, P, R>),
                        ),
                ),
        );
}

/// Liveness endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "inkwell-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
