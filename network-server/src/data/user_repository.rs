use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{User, UserActivity};

/// A user row together with its password hash, as needed by login.
#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub(crate) user: User,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError>;
    async fn find_by_username(&self, username: &str)
    -> Result<Option<UserCredentials>, DomainError>;
    /// Sets `last_login` to now. Called on every successful token obtain.
    async fn record_login(&self, user_id: i64) -> Result<(), DomainError>;
    /// Advances `last_request_at`. Called by the activity middleware on
    /// every authenticated request it wraps.
    async fn touch_last_request(&self, user_id: i64) -> Result<(), DomainError>;
    async fn get_activity(&self, user_id: i64) -> Result<Option<UserActivity>, DomainError>;
    async fn count_users(&self) -> Result<i64, DomainError>;
}
