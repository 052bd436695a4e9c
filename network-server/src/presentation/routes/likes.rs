use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::likes::{last_likes, like, unlike};
use crate::presentation::middleware::activity::track_activity_middleware;
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(like).delete(unlike))
        .route("/last", get(last_likes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_activity_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state,
            jwt_auth_middleware,
        ))
}
