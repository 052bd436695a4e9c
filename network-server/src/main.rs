use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::analytics_service::AnalyticsService;
use application::auth_service::AuthService;
use application::like_service::LikeService;
use application::post_service::PostService;
use data::repositories::postgres::like_repository::PostgresLikeRepository;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use infrastructure::token::TokenService;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    run_migrations(&pool).await?;

    let tokens = Arc::new(TokenService::new(
        &settings.jwt_secret,
        settings.access_ttl_seconds,
        settings.refresh_ttl_seconds,
    ));

    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_repo = PostgresPostRepository::new(pool.clone());
    let like_repo = PostgresLikeRepository::new(pool.clone());

    let auth_service = Arc::new(AuthService::new(
        PostgresUserRepository::new(pool.clone()),
        Arc::clone(&tokens),
    ));
    let post_service = Arc::new(PostService::new(post_repo.clone()));
    let like_service = Arc::new(LikeService::new(like_repo.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(
        like_repo,
        PostgresUserRepository::new(pool.clone()),
        post_repo,
    ));

    let state = AppState::new(
        auth_service,
        post_service,
        like_service,
        analytics_service,
        user_repo,
        tokens,
    );

    server::run_http(&settings, state).await
}
