pub(crate) mod analytics;
pub(crate) mod auth;
pub(crate) mod likes;
pub(crate) mod posts;
