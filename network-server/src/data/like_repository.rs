use async_trait::async_trait;

use crate::domain::analytics::{DateRange, DayLikes};
use crate::domain::error::DomainError;
use crate::domain::like::Like;

#[derive(Debug, Clone)]
pub(crate) struct NewLike {
    pub(crate) user_id: i64,
    pub(crate) message_id: i64,
    pub(crate) eval: bool,
}

#[async_trait]
pub(crate) trait LikeRepository: Send + Sync {
    /// Inserts a like. A dangling `message_id` surfaces as a validation
    /// error via the foreign key, never as a partial write.
    async fn create_like(&self, input: NewLike) -> Result<Like, DomainError>;
    /// Deletes every like the user left on the post and returns how
    /// many rows went away. Duplicate rows are legal, so this is a bulk
    /// operation by contract.
    async fn delete_likes(&self, user_id: i64, message_id: i64) -> Result<u64, DomainError>;
    /// Most recent likes, newest first.
    async fn last_likes(&self, limit: i64) -> Result<Vec<Like>, DomainError>;
    async fn count_likes(&self) -> Result<i64, DomainError>;
    /// Per-day like counts inside the range, sparse and ascending.
    async fn count_by_day(&self, range: DateRange) -> Result<Vec<DayLikes>, DomainError>;
}
