use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::data::user_repository::UserRepository;
use crate::presentation::AppState;
use crate::presentation::app_error::AppError;
use crate::presentation::middleware::auth::AuthenticatedUser;

/// Advances the caller's `last_request_at` before the handler runs.
///
/// Layered inside the auth middleware, so the extension is present on
/// every request that reaches it.
pub(crate) async fn track_activity_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(user) = request.extensions().get::<AuthenticatedUser>() {
        state.users.touch_last_request(user.user_id).await?;
    }

    Ok(next.run(request).await)
}
