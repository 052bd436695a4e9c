use crate::data::like_repository::LikeRepository;
use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::analytics::{DateRange, DayLikes, Statistic};
use crate::domain::error::DomainError;
use crate::domain::user::UserActivity;

pub(crate) struct AnalyticsService<L, U, P>
where
    L: LikeRepository,
    U: UserRepository,
    P: PostRepository,
{
    likes: L,
    users: U,
    posts: P,
}

impl<L, U, P> AnalyticsService<L, U, P>
where
    L: LikeRepository,
    U: UserRepository,
    P: PostRepository,
{
    pub(crate) fn new(likes: L, users: U, posts: P) -> Self {
        Self {
            likes,
            users,
            posts,
        }
    }

    /// Per-day like counts for the requested day range. Unparseable
    /// input is rejected before any query runs; a reversed range
    /// yields an empty list rather than an error.
    pub(crate) async fn analytics(
        &self,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Vec<DayLikes>, DomainError> {
        let range = DateRange::parse(date_from, date_to)
            .ok_or_else(|| DomainError::Unacceptable("Invalid input format.".to_string()))?;

        self.likes.count_by_day(range).await
    }

    /// Login/request timestamps for one user. A missing user is always
    /// an explicit not-found naming the identifier.
    pub(crate) async fn user_activity(&self, user_id: i64) -> Result<UserActivity, DomainError> {
        self.users
            .get_activity(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user id: {user_id}")))
    }

    pub(crate) async fn statistic(&self) -> Result<Statistic, DomainError> {
        Ok(Statistic {
            users: self.users.count_users().await?,
            posts: self.posts.count_posts().await?,
            likes: self.likes.count_likes().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    use super::AnalyticsService;
    use crate::data::like_repository::{LikeRepository, NewLike};
    use crate::data::post_repository::{NewPost, PostRepository};
    use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
    use crate::domain::analytics::{DateRange, DayLikes};
    use crate::domain::error::DomainError;
    use crate::domain::like::Like;
    use crate::domain::post::Post;
    use crate::domain::user::{User, UserActivity};

    #[derive(Clone)]
    struct FakeLikeRepo {
        count_by_day_call: Arc<Mutex<Option<DateRange>>>,
        count_by_day_result: Arc<Mutex<Vec<DayLikes>>>,
    }

    impl FakeLikeRepo {
        fn new() -> Self {
            Self {
                count_by_day_call: Arc::new(Mutex::new(None)),
                count_by_day_result: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl LikeRepository for FakeLikeRepo {
        async fn create_like(&self, _input: NewLike) -> Result<Like, DomainError> {
            unreachable!("not used in analytics tests")
        }

        async fn delete_likes(&self, _user_id: i64, _message_id: i64) -> Result<u64, DomainError> {
            unreachable!("not used in analytics tests")
        }

        async fn last_likes(&self, _limit: i64) -> Result<Vec<Like>, DomainError> {
            Ok(Vec::new())
        }

        async fn count_likes(&self) -> Result<i64, DomainError> {
            Ok(30)
        }

        async fn count_by_day(&self, range: DateRange) -> Result<Vec<DayLikes>, DomainError> {
            *self
                .count_by_day_call
                .lock()
                .expect("count_by_day_call mutex poisoned") = Some(range);
            Ok(self
                .count_by_day_result
                .lock()
                .expect("count_by_day_result mutex poisoned")
                .clone())
        }
    }

    #[derive(Clone)]
    struct FakeUserRepo {
        activity: Arc<Mutex<Option<UserActivity>>>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_user(&self, _input: NewUser) -> Result<User, DomainError> {
            unreachable!("not used in analytics tests")
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserCredentials>, DomainError> {
            Ok(None)
        }

        async fn record_login(&self, _user_id: i64) -> Result<(), DomainError> {
            Ok(())
        }

        async fn touch_last_request(&self, _user_id: i64) -> Result<(), DomainError> {
            Ok(())
        }

        async fn get_activity(&self, _user_id: i64) -> Result<Option<UserActivity>, DomainError> {
            Ok(self
                .activity
                .lock()
                .expect("activity mutex poisoned")
                .clone())
        }

        async fn count_users(&self) -> Result<i64, DomainError> {
            Ok(10)
        }
    }

    #[derive(Clone)]
    struct FakePostRepo;

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, _input: NewPost) -> Result<Post, DomainError> {
            unreachable!("not used in analytics tests")
        }

        async fn last_posts(&self, _limit: i64) -> Result<Vec<Post>, DomainError> {
            Ok(Vec::new())
        }

        async fn count_posts(&self) -> Result<i64, DomainError> {
            Ok(20)
        }
    }

    fn service(
        likes: FakeLikeRepo,
        users: FakeUserRepo,
    ) -> AnalyticsService<FakeLikeRepo, FakeUserRepo, FakePostRepo> {
        AnalyticsService::new(likes, users, FakePostRepo)
    }

    fn users_with_activity(activity: Option<UserActivity>) -> FakeUserRepo {
        FakeUserRepo {
            activity: Arc::new(Mutex::new(activity)),
        }
    }

    #[tokio::test]
    async fn analytics_rejects_bad_dates_without_query() {
        let likes = FakeLikeRepo::new();
        let service = service(likes.clone(), users_with_activity(None));

        let err = service
            .analytics(Some("01-02-2024"), Some("2024-03-01"))
            .await
            .expect_err("bad date must fail");
        match err {
            DomainError::Unacceptable(message) => assert_eq!(message, "Invalid input format."),
            _ => panic!("expected DomainError::Unacceptable"),
        }
        assert!(
            likes
                .count_by_day_call
                .lock()
                .expect("count_by_day_call mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn analytics_rejects_extended_year_end_date() {
        let likes = FakeLikeRepo::new();
        let service = service(likes.clone(), users_with_activity(None));

        // The largest representable day parses but has no exclusive
        // bound; the request must answer 406, not die.
        let err = service
            .analytics(Some("2024-01-01"), Some("+262142-12-31"))
            .await
            .expect_err("calendar-limit end date must fail");
        assert!(matches!(err, DomainError::Unacceptable(_)));
        assert!(
            likes
                .count_by_day_call
                .lock()
                .expect("count_by_day_call mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn analytics_rejects_missing_fields() {
        let service = service(FakeLikeRepo::new(), users_with_activity(None));

        let err = service
            .analytics(None, Some("2024-03-01"))
            .await
            .expect_err("missing date_from must fail");
        assert!(matches!(err, DomainError::Unacceptable(_)));
    }

    #[tokio::test]
    async fn analytics_passes_parsed_range_to_repo() {
        let likes = FakeLikeRepo::new();
        *likes
            .count_by_day_result
            .lock()
            .expect("count_by_day_result mutex poisoned") = vec![DayLikes {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
            likes: 4,
        }];

        let service = service(likes.clone(), users_with_activity(None));

        let result = service
            .analytics(Some("2024-02-01"), Some("2024-02-29"))
            .await
            .expect("must succeed");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].likes, 4);

        let range = likes
            .count_by_day_call
            .lock()
            .expect("count_by_day_call mutex poisoned")
            .expect("range must be captured");
        assert_eq!(
            range.from,
            NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date")
        );
    }

    #[tokio::test]
    async fn user_activity_names_the_missing_id() {
        let service = service(FakeLikeRepo::new(), users_with_activity(None));

        let err = service
            .user_activity(42)
            .await
            .expect_err("missing user must fail");
        match err {
            DomainError::NotFound(message) => assert!(message.contains("42")),
            _ => panic!("expected DomainError::NotFound"),
        }
    }

    #[tokio::test]
    async fn user_activity_returns_timestamps() {
        let now = Utc::now();
        let service = service(
            FakeLikeRepo::new(),
            users_with_activity(Some(UserActivity {
                last_login: None,
                last_request_at: Some(now),
            })),
        );

        let activity = service.user_activity(1).await.expect("must succeed");
        assert!(activity.last_login.is_none());
        assert_eq!(activity.last_request_at, Some(now));
    }

    #[tokio::test]
    async fn statistic_collects_all_three_counts() {
        let service = service(FakeLikeRepo::new(), users_with_activity(None));

        let stats = service.statistic().await.expect("must succeed");
        assert_eq!(stats.users, 10);
        assert_eq!(stats.posts, 20);
        assert_eq!(stats.likes, 30);
    }
}
