use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{create_post, last_posts};
use crate::presentation::middleware::activity::track_activity_middleware;
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    // Auth is the outer layer so the activity tracker always sees an
    // authenticated identity.
    Router::new()
        .route("/", post(create_post))
        .route("/last", get(last_posts))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_activity_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state,
            jwt_auth_middleware,
        ))
}
