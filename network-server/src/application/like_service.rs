use crate::data::like_repository::{LikeRepository, NewLike};
use crate::domain::error::DomainError;
use crate::domain::like::{Like, parse_eval};

pub(crate) struct LikeService<R: LikeRepository> {
    repo: R,
}

impl<R: LikeRepository> LikeService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a like. Free-text `eval` outside `"like"`/`"dislike"`
    /// is a semantic rejection (406); nothing is written in that case.
    pub(crate) async fn like(
        &self,
        author_id: i64,
        message_id: i64,
        eval_text: &str,
    ) -> Result<Like, DomainError> {
        let eval = parse_eval(eval_text)
            .ok_or_else(|| DomainError::Unacceptable("Invalid input data.".to_string()))?;

        let new_like = NewLike {
            user_id: author_id,
            message_id,
            eval,
        };
        self.repo.create_like(new_like).await
    }

    /// Deletes every like the user left on the post. Zero matches is a
    /// not-found; one or more are all removed in a single statement.
    pub(crate) async fn unlike(&self, author_id: i64, message_id: i64) -> Result<u64, DomainError> {
        let deleted = self.repo.delete_likes(author_id, message_id).await?;
        if deleted == 0 {
            return Err(DomainError::NotFound(format!(
                "like for message id: {message_id}"
            )));
        }
        Ok(deleted)
    }

    pub(crate) async fn last_likes(&self, limit: i64) -> Result<Vec<Like>, DomainError> {
        self.repo.last_likes(limit).await
    }
}
