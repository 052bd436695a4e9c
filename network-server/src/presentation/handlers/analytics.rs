use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::analytics::{DayLikes, Statistic};
use crate::domain::user::UserActivity;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::middleware::auth::{AdminUser, AuthenticatedUser};

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct AnalyticsQuery {
    /// Raw strings on purpose: date validation is semantic (406), not
    /// a deserialization failure (400).
    pub(crate) date_from: Option<String>,
    pub(crate) date_to: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct DayLikesDto {
    pub(crate) date: NaiveDate,
    pub(crate) likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AnalyticsResponseDto {
    /// Historical wire spelling, kept for compatibility.
    pub(crate) analitics: Vec<DayLikesDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ActivityDto {
    pub(crate) last_login: Option<DateTime<Utc>>,
    pub(crate) last_request_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ActivityResponseDto {
    pub(crate) activity: ActivityDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct StatisticDto {
    pub(crate) users: i64,
    pub(crate) posts: i64,
    pub(crate) likes: i64,
}

impl From<DayLikes> for DayLikesDto {
    fn from(day: DayLikes) -> Self {
        Self {
            date: day.date,
            likes: day.likes,
        }
    }
}

impl From<UserActivity> for ActivityDto {
    fn from(activity: UserActivity) -> Self {
        Self {
            last_login: activity.last_login,
            last_request_at: activity.last_request_at,
        }
    }
}

impl From<Statistic> for StatisticDto {
    fn from(stats: Statistic) -> Self {
        Self {
            users: stats.users,
            posts: stats.posts,
            likes: stats.likes,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/analitics",
    tag = "analytics",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("date_from" = String, Query, description = "Range start, YYYY-MM-DD"),
        ("date_to" = String, Query, description = "Range end (inclusive), YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Per-day like counts", body = AnalyticsResponseDto),
        (status = 401, description = "Unauthorized"),
        (status = 406, description = "Unparseable date range"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn analytics(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<(StatusCode, Json<AnalyticsResponseDto>)> {
    let days = state
        .analytics_service
        .analytics(query.date_from.as_deref(), query.date_to.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(AnalyticsResponseDto {
            analitics: days.into_iter().map(DayLikesDto::from).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/analitics/activity/{pk}",
    tag = "analytics",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("pk" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User activity timestamps", body = ActivityResponseDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a staff user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn user_activity(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(pk): Path<i64>,
) -> AppResult<(StatusCode, Json<ActivityResponseDto>)> {
    let activity = state.analytics_service.user_activity(pk).await?;

    Ok((
        StatusCode::OK,
        Json(ActivityResponseDto {
            activity: activity.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/analitics/statistic",
    tag = "analytics",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Total row counts", body = StatisticDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a staff user"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn statistic(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<(StatusCode, Json<StatisticDto>)> {
    let stats = state.analytics_service.statistic().await?;

    Ok((StatusCode::OK, Json(StatisticDto::from(stats))))
}
