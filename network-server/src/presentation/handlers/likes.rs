use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::like::Like;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct LikeDto {
    #[validate(range(min = 1))]
    pub(crate) message_id: i64,
    /// Free text; only "like"/"dislike" (any case) are accepted.
    pub(crate) eval: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct UnlikeDto {
    #[validate(range(min = 1))]
    pub(crate) message_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct LastQuery {
    #[validate(range(min = 1, max = 100))]
    pub(crate) limit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LikeResponseDto {
    pub(crate) id: i64,
    /// Author id; wire name matches the historical contract.
    pub(crate) user: i64,
    /// Liked post id, historically called `message`.
    pub(crate) message: i64,
    pub(crate) eval: bool,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ResultDto {
    pub(crate) result: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LastLikesResponseDto {
    pub(crate) likes: Vec<LikeResponseDto>,
}

impl From<Like> for LikeResponseDto {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user: like.user_id,
            message: like.message_id,
            eval: like.eval,
            created_at: like.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/like",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    request_body = LikeDto,
    responses(
        (status = 200, description = "Like created", body = LikeResponseDto),
        (status = 400, description = "Validation error or unknown message_id"),
        (status = 401, description = "Unauthorized"),
        (status = 406, description = "Unrecognized eval text"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn like(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Json(dto): Json<LikeDto>,
) -> AppResult<(StatusCode, Json<LikeResponseDto>)> {
    dto.validate()?;

    let like = state
        .like_service
        .like(auth.user_id, dto.message_id, &dto.eval)
        .await?;

    Ok((StatusCode::OK, Json(LikeResponseDto::from(like))))
}

#[utoipa::path(
    delete,
    path = "/api/like",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    request_body = UnlikeDto,
    responses(
        (status = 200, description = "All matching likes deleted", body = ResultDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No like to delete"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn unlike(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Json(dto): Json<UnlikeDto>,
) -> AppResult<(StatusCode, Json<ResultDto>)> {
    dto.validate()?;

    state
        .like_service
        .unlike(auth.user_id, dto.message_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResultDto {
            result: "Like deleted.".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/like/last",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("limit" = Option<i64>, Query, description = "Number of likes (1..=100)")
    ),
    responses(
        (status = 200, description = "Most recent likes", body = LastLikesResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn last_likes(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<LastQuery>,
) -> AppResult<(StatusCode, Json<LastLikesResponseDto>)> {
    query.validate()?;
    let limit = query.limit.unwrap_or(10);

    let likes = state.like_service.last_likes(limit).await?;

    Ok((
        StatusCode::OK,
        Json(LastLikesResponseDto {
            likes: likes.into_iter().map(LikeResponseDto::from).collect(),
        }),
    ))
}
