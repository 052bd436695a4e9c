pub(crate) mod analytics_service;
pub(crate) mod auth_service;
pub(crate) mod like_service;
pub(crate) mod post_service;
