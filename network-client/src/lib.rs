//! Клиентская библиотека для работы с network-server по HTTP.
//!
//! Предоставляет единый API (`NetworkClient`) поверх `reqwest`.
//! Клиент хранит пару JWT-токенов после `obtain_token` и автоматически
//! использует access-токен в защищённых операциях.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{NetworkClientError, NetworkClientResult};
pub use models::{Activity, DayLikes, Like, Post, Statistic, TokenPair, User};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Клиент социальной сети с хранением JWT-токенов.
pub struct NetworkClient {
    http_client: HttpClient,
    access: Option<String>,
    refresh: Option<String>,
}

impl NetworkClient {
    /// Создаёт клиент с базовым URL сервера, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(base_url),
            access: None,
            refresh: None,
        }
    }

    /// Устанавливает access-токен вручную.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.access = Some(token.into());
    }

    /// Возвращает текущий access-токен, если он установлен.
    pub fn get_token(&self) -> Option<&str> {
        self.access.as_deref()
    }

    /// Очищает сохранённые токены.
    pub fn clear_token(&mut self) {
        self.access = None;
        self.refresh = None;
    }

    /// Регистрирует пользователя. Токены при этом не выдаются:
    /// для входа используется `obtain_token`.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> NetworkClientResult<User> {
        self.http_client.signup(username, email, password).await
    }

    /// Выполняет вход пользователя и сохраняет полученную пару токенов.
    pub async fn obtain_token(
        &mut self,
        username: &str,
        password: &str,
    ) -> NetworkClientResult<TokenPair> {
        let pair = self.http_client.obtain_token(username, password).await?;
        self.access = Some(pair.access.clone());
        self.refresh = Some(pair.refresh.clone());
        Ok(pair)
    }

    /// Обновляет access-токен по сохранённому refresh-токену.
    pub async fn refresh_access_token(&mut self) -> NetworkClientResult<String> {
        let refresh = self
            .refresh
            .as_deref()
            .ok_or(NetworkClientError::Unauthorized)?;
        let access = self.http_client.refresh_token(refresh).await?;
        self.access = Some(access.clone());
        Ok(access)
    }

    /// Создаёт новый пост.
    ///
    /// Требует установленный JWT-токен.
    pub async fn create_post(&self, message: &str) -> NetworkClientResult<Post> {
        let token = self.require_token()?;
        self.http_client.create_post(token, message).await
    }

    /// Возвращает последние посты (новые первыми).
    ///
    /// Требует установленный JWT-токен.
    pub async fn last_posts(&self, limit: Option<u32>) -> NetworkClientResult<Vec<Post>> {
        let token = self.require_token()?;
        self.http_client.last_posts(token, limit).await
    }

    /// Ставит оценку посту: `eval` — `"like"` или `"dislike"`.
    ///
    /// Требует установленный JWT-токен.
    pub async fn like_post(&self, message_id: i64, eval: &str) -> NetworkClientResult<Like> {
        let token = self.require_token()?;
        self.http_client.like_post(token, message_id, eval).await
    }

    /// Удаляет оценки текущего пользователя с поста.
    ///
    /// Требует установленный JWT-токен.
    pub async fn unlike_post(&self, message_id: i64) -> NetworkClientResult<String> {
        let token = self.require_token()?;
        self.http_client.unlike_post(token, message_id).await
    }

    /// Возвращает последние оценки (новые первыми).
    ///
    /// Требует установленный JWT-токен.
    pub async fn last_likes(&self, limit: Option<u32>) -> NetworkClientResult<Vec<Like>> {
        let token = self.require_token()?;
        self.http_client.last_likes(token, limit).await
    }

    /// Возвращает количество лайков по дням за период. Обе даты
    /// обязательны, строго в формате `YYYY-MM-DD`.
    ///
    /// Требует установленный JWT-токен.
    pub async fn analytics(
        &self,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> NetworkClientResult<Vec<DayLikes>> {
        let token = self.require_token()?;
        self.http_client.analytics(token, date_from, date_to).await
    }

    /// Возвращает метки активности пользователя (только staff).
    pub async fn user_activity(&self, user_id: i64) -> NetworkClientResult<Activity> {
        let token = self.require_token()?;
        self.http_client.user_activity(token, user_id).await
    }

    /// Возвращает суммарную статистику сервиса (только staff).
    pub async fn statistic(&self) -> NetworkClientResult<Statistic> {
        let token = self.require_token()?;
        self.http_client.statistic(token).await
    }

    fn require_token(&self) -> NetworkClientResult<&str> {
        self.access.as_deref().ok_or(NetworkClientError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_absent_after_creation() {
        let client = NetworkClient::new("http://localhost:8080");
        assert!(client.get_token().is_none());
    }

    #[test]
    fn set_and_clear_token() {
        let mut client = NetworkClient::new("http://localhost:8080");
        client.set_token("abc");
        assert_eq!(client.get_token(), Some("abc"));
        client.clear_token();
        assert!(client.get_token().is_none());
    }

    #[tokio::test]
    async fn protected_calls_require_token() {
        let client = NetworkClient::new("http://localhost:8080");
        let err = client.create_post("hello").await.unwrap_err();
        assert!(matches!(err, NetworkClientError::Unauthorized));
    }

    #[tokio::test]
    async fn refresh_requires_saved_refresh_token() {
        let mut client = NetworkClient::new("http://localhost:8080");
        let err = client.refresh_access_token().await.unwrap_err();
        assert!(matches!(err, NetworkClientError::Unauthorized));
    }
}
