use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::{LoginRequest, SignupRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct SignupDto {
    #[validate(length(min = 1, max = 150))]
    pub(crate) username: String,
    /// Optional; stored as an empty string when absent.
    pub(crate) email: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct TokenObtainDto {
    #[validate(length(min = 1, max = 150))]
    pub(crate) username: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct TokenRefreshDto {
    #[validate(length(min = 1))]
    pub(crate) refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TokenPairDto {
    pub(crate) access: String,
    pub(crate) refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AccessTokenDto {
    pub(crate) access: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn signup(
    State(state): State<AppState>,
    Json(dto): Json<SignupDto>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    dto.validate()?;

    let req = SignupRequest {
        username: dto.username,
        email: dto.email.unwrap_or_default(),
        password: dto.password,
    };

    let user = state.auth_service.register(req).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    post,
    path = "/api/auth/token",
    tag = "auth",
    request_body = TokenObtainDto,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPairDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn obtain_token(
    State(state): State<AppState>,
    Json(dto): Json<TokenObtainDto>,
) -> AppResult<(StatusCode, Json<TokenPairDto>)> {
    dto.validate()?;

    let req = LoginRequest {
        username: dto.username,
        password: dto.password,
    };

    let pair = state.auth_service.login(req).await?;

    Ok((
        StatusCode::OK,
        Json(TokenPairDto {
            access: pair.access,
            refresh: pair.refresh,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/token/refresh",
    tag = "auth",
    request_body = TokenRefreshDto,
    responses(
        (status = 200, description = "Access token refreshed", body = AccessTokenDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid refresh token"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn refresh_token(
    State(state): State<AppState>,
    Json(dto): Json<TokenRefreshDto>,
) -> AppResult<(StatusCode, Json<AccessTokenDto>)> {
    dto.validate()?;

    let access = state.auth_service.refresh(&dto.refresh)?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access })))
}
