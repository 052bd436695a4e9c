use axum::{Router, routing::post};

use crate::presentation::AppState;
use crate::presentation::handlers::auth::{obtain_token, refresh_token, signup};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/token", post(obtain_token))
        .route("/token/refresh", post(refresh_token))
}
