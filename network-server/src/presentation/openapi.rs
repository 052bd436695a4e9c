use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::analytics::{
    ActivityDto, ActivityResponseDto, AnalyticsQuery, AnalyticsResponseDto, DayLikesDto,
    StatisticDto,
};
use crate::presentation::handlers::auth::{
    AccessTokenDto, SignupDto, TokenObtainDto, TokenPairDto, TokenRefreshDto, UserDto,
};
use crate::presentation::handlers::likes::{
    LastLikesResponseDto, LikeDto, LikeResponseDto, ResultDto, UnlikeDto,
};
use crate::presentation::handlers::posts::{CreatePostDto, LastPostsResponseDto, PostDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::auth::signup,
        crate::presentation::handlers::auth::obtain_token,
        crate::presentation::handlers::auth::refresh_token,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::last_posts,
        crate::presentation::handlers::likes::like,
        crate::presentation::handlers::likes::unlike,
        crate::presentation::handlers::likes::last_likes,
        crate::presentation::handlers::analytics::analytics,
        crate::presentation::handlers::analytics::user_activity,
        crate::presentation::handlers::analytics::statistic
    ),
    components(
        schemas(
            SignupDto,
            TokenObtainDto,
            TokenRefreshDto,
            TokenPairDto,
            AccessTokenDto,
            UserDto,
            CreatePostDto,
            PostDto,
            LastPostsResponseDto,
            LikeDto,
            UnlikeDto,
            LikeResponseDto,
            LastLikesResponseDto,
            ResultDto,
            AnalyticsQuery,
            AnalyticsResponseDto,
            DayLikesDto,
            ActivityDto,
            ActivityResponseDto,
            StatisticDto
        )
    ),
    tags(
        (name = "auth", description = "Signup and token endpoints"),
        (name = "posts", description = "Post endpoints"),
        (name = "likes", description = "Like endpoints"),
        (name = "analytics", description = "Aggregation and admin endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
