pub(crate) mod analytics;
pub(crate) mod error;
pub(crate) mod like;
pub(crate) mod post;
pub(crate) mod user;
