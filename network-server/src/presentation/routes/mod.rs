use axum::Router;

use super::AppState;

pub(crate) mod analytics;
pub(crate) mod auth;
pub(crate) mod likes;
pub(crate) mod posts;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/post", posts::router(state.clone()))
        .nest("/api/like", likes::router(state.clone()))
        .nest("/api/analitics", analytics::router(state))
}
