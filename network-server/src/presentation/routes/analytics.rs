use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::analytics::{analytics, statistic, user_activity};
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    // Aggregation is open to any authenticated user; the activity and
    // statistic views additionally require staff via their extractor.
    Router::new()
        .route("/", get(analytics))
        .route("/activity/{pk}", get(user_activity))
        .route("/statistic", get(statistic))
        .layer(middleware::from_fn_with_state(
            state,
            jwt_auth_middleware,
        ))
}
