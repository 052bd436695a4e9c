use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post};

pub(crate) struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The author always comes from the authenticated identity, never
    /// from client input.
    pub(crate) async fn create_post(
        &self,
        author_id: i64,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            user_id: author_id,
            message: req.message,
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn last_posts(&self, limit: i64) -> Result<Vec<Post>, DomainError> {
        self.repo.last_posts(limit).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::PostService;
    use crate::data::post_repository::{NewPost, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, Post};

    #[derive(Clone)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        list_result: Arc<Mutex<Vec<Post>>>,
    }

    impl FakePostRepo {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                list_result: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_post(1, input.user_id, &input.message))
        }

        async fn last_posts(&self, _limit: i64) -> Result<Vec<Post>, DomainError> {
            Ok(self
                .list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone())
        }

        async fn count_posts(&self) -> Result<i64, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn create_post_takes_author_from_identity() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let req = CreatePostRequest {
            message: "  hello  ".to_string(),
        };

        let created = service
            .create_post(10, req)
            .await
            .expect("create_post must succeed");

        assert_eq!(created.message, "hello");
        assert_eq!(created.user_id, 10);

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.user_id, 10);
        assert_eq!(input.message, "hello");
    }

    #[tokio::test]
    async fn create_post_rejects_invalid_message_without_repo_call() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let req = CreatePostRequest {
            message: String::new(),
        };

        let err = service
            .create_post(10, req)
            .await
            .expect_err("empty message must fail");
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(
            repo.created_input
                .lock()
                .expect("created_input mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn last_posts_delegates_to_repo() {
        let repo = FakePostRepo::new();
        *repo.list_result.lock().expect("list_result mutex poisoned") =
            vec![sample_post(1, 10, "a")];

        let service = PostService::new(repo);
        let posts = service.last_posts(10).await.expect("must succeed");
        assert_eq!(posts.len(), 1);
    }

    fn sample_post(id: i64, user_id: i64, message: &str) -> Post {
        Post::new(id, user_id, message.to_string(), Utc::now(), Utc::now())
            .expect("sample post must be valid")
    }
}
