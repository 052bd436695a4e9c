use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) user_id: i64,
    pub(crate) message: String,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    /// Most recent posts, newest first.
    async fn last_posts(&self, limit: i64) -> Result<Vec<Post>, DomainError>;
    async fn count_posts(&self) -> Result<i64, DomainError>;
}
