use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::{info, warn};
use std::sync::Arc;

use ink_api::{app, AppState};
use ink_core::services::session::{AccessGate, RequestAuthenticator, SessionService};
use ink_core::services::token::{TokenConfig, TokenSigner};
use ink_core::services::{PostService, UserService};
use ink_infra::cache::{RedisClient, RedisRevocationStore};
use ink_infra::database::{DatabasePool, MySqlPostRepository, MySqlUserRepository};
use ink_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Inkwell API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret. Do not run this in production.");
    }

    // Open the externally owned handles once, at process start
    let db = DatabasePool::new(&config.database)
        .await
        .map_err(startup_error)?;

    let redis = RedisClient::new(&config.cache)
        .await
        .map_err(startup_error)?;
    match redis.health_check().await {
        Ok(true) => info!("Redis connection established"),
        _ => return Err(startup_error("Redis did not answer PING")),
    }

    // Repositories and the revocation store
    let user_repository = Arc::new(MySqlUserRepository::new(db.get_pool().clone()));
    let post_repository = Arc::new(MySqlPostRepository::new(db.get_pool().clone()));
    let store = Arc::new(RedisRevocationStore::new(
        redis,
        config.jwt.refresh_token_expiry_seconds().max(0) as u64,
    ));

    // Core services
    let signer = Arc::new(TokenSigner::new(TokenConfig::from(&config.jwt)).map_err(startup_error)?);
    let sessions = Arc::new(SessionService::new(
        user_repository.clone(),
        store.clone(),
        signer.clone(),
    ));
    let users = Arc::new(UserService::new(user_repository.clone()));
    let posts = Arc::new(PostService::new(post_repository));

    // The access gate, type-erased for the middleware
    let gate: Arc<dyn RequestAuthenticator> =
        Arc::new(AccessGate::new(user_repository, store, signer));

    let state = AppState {
        sessions,
        users,
        posts,
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let result = HttpServer::new(move || {
        let cors = ink_api::middleware::cors::create_cors();
        let security = ink_api::middleware::security::SecurityMiddleware::new();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(security)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(gate.clone()))
            .configure(
                app::configure::<MySqlUserRepository, MySqlPostRepository, RedisRevocationStore>,
            )
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "not_found",
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?
    .run()
    .await;

    db.close().await;

    result
}

fn startup_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}
