use std::sync::Arc;

use crate::application::analytics_service::AnalyticsService;
use crate::application::auth_service::AuthService;
use crate::application::like_service::LikeService;
use crate::application::post_service::PostService;
use crate::data::repositories::postgres::like_repository::PostgresLikeRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::infrastructure::token::TokenService;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

type PgAnalyticsService =
    AnalyticsService<PostgresLikeRepository, PostgresUserRepository, PostgresPostRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub(crate) post_service: Arc<PostService<PostgresPostRepository>>,
    pub(crate) like_service: Arc<LikeService<PostgresLikeRepository>>,
    pub(crate) analytics_service: Arc<PgAnalyticsService>,
    /// Used directly by the activity middleware to advance
    /// `last_request_at` before handler logic runs.
    pub(crate) users: Arc<PostgresUserRepository>,
    pub(crate) tokens: Arc<TokenService>,
}

impl AppState {
    pub(crate) fn new(
        auth_service: Arc<AuthService<PostgresUserRepository>>,
        post_service: Arc<PostService<PostgresPostRepository>>,
        like_service: Arc<LikeService<PostgresLikeRepository>>,
        analytics_service: Arc<PgAnalyticsService>,
        users: Arc<PostgresUserRepository>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service,
            post_service,
            like_service,
            analytics_service,
            users,
            tokens,
        }
    }
}
