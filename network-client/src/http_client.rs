use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{NetworkClientError, NetworkClientResult};
use crate::models::{Activity, DayLikes, Like, Post, Statistic, TokenPair, User};

#[derive(Debug, Serialize)]
struct SignupRequestDto<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenObtainRequestDto<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenRefreshRequestDto<'a> {
    refresh: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct LikeRequestDto<'a> {
    message_id: i64,
    eval: &'a str,
}

#[derive(Debug, Serialize)]
struct UnlikeRequestDto {
    message_id: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccessTokenDto {
    access: String,
}

#[derive(Debug, Deserialize)]
struct LastPostsResponseDto {
    posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct LastLikesResponseDto {
    likes: Vec<Like>,
}

#[derive(Debug, Deserialize)]
struct UnlikeResponseDto {
    result: String,
}

#[derive(Debug, Deserialize)]
struct AnalyticsResponseDto {
    analitics: Vec<DayLikes>,
}

#[derive(Debug, Deserialize)]
struct ActivityResponseDto {
    activity: Activity,
}

#[derive(Serialize)]
struct LastQuery {
    limit: Option<u32>,
}

#[derive(Serialize)]
struct AnalyticsQuery<'a> {
    date_from: Option<&'a str>,
    date_to: Option<&'a str>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API `network-server`.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> NetworkClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        NetworkClientError::from_http_status(status, Some(message))
    }

    async fn decode<TRes>(response: reqwest::Response) -> NetworkClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        response
            .json::<TRes>()
            .await
            .map_err(NetworkClientError::from_reqwest)
    }

    /// универсальный helper для отправки запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> NetworkClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(NetworkClientError::from_reqwest)?;
        Self::decode(response).await
    }

    async fn get_json<TQuery, TRes>(
        &self,
        path: &str,
        query: Option<&TQuery>,
        token: &str,
    ) -> NetworkClientResult<TRes>
    where
        TQuery: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(Method::GET, url).bearer_auth(token);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(NetworkClientError::from_reqwest)?;
        Self::decode(response).await
    }

    /// Регистрирует пользователя и возвращает его публичные данные.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> NetworkClientResult<User> {
        let payload = SignupRequestDto {
            username,
            email,
            password,
        };
        self.send_json(Method::POST, "/api/auth/signup", &payload, None)
            .await
    }

    /// Выполняет вход и возвращает пару access/refresh токенов.
    pub async fn obtain_token(
        &self,
        username: &str,
        password: &str,
    ) -> NetworkClientResult<TokenPair> {
        let payload = TokenObtainRequestDto { username, password };
        self.send_json(Method::POST, "/api/auth/token", &payload, None)
            .await
    }

    /// Обменивает refresh-токен на новый access-токен.
    pub async fn refresh_token(&self, refresh: &str) -> NetworkClientResult<String> {
        let payload = TokenRefreshRequestDto { refresh };
        let dto: AccessTokenDto = self
            .send_json(Method::POST, "/api/auth/token/refresh", &payload, None)
            .await?;
        Ok(dto.access)
    }

    /// Создаёт пост от имени авторизованного пользователя.
    ///
    /// Требует валидный JWT-токен.
    pub async fn create_post(&self, token: &str, message: &str) -> NetworkClientResult<Post> {
        let payload = CreatePostRequestDto { message };
        self.send_json(Method::POST, "/api/post", &payload, Some(token))
            .await
    }

    /// Возвращает последние посты (до `limit` штук, новые первыми).
    pub async fn last_posts(
        &self,
        token: &str,
        limit: Option<u32>,
    ) -> NetworkClientResult<Vec<Post>> {
        let query = LastQuery { limit };
        let dto: LastPostsResponseDto =
            self.get_json("/api/post/last", Some(&query), token).await?;
        Ok(dto.posts)
    }

    /// Ставит оценку посту. `eval` — `"like"` или `"dislike"` (регистр не важен).
    pub async fn like_post(
        &self,
        token: &str,
        message_id: i64,
        eval: &str,
    ) -> NetworkClientResult<Like> {
        let payload = LikeRequestDto { message_id, eval };
        self.send_json(Method::POST, "/api/like", &payload, Some(token))
            .await
    }

    /// Удаляет все оценки пользователя с поста и возвращает текст результата.
    pub async fn unlike_post(&self, token: &str, message_id: i64) -> NetworkClientResult<String> {
        let payload = UnlikeRequestDto { message_id };
        let dto: UnlikeResponseDto = self
            .send_json(Method::DELETE, "/api/like", &payload, Some(token))
            .await?;
        Ok(dto.result)
    }

    /// Возвращает последние оценки (до `limit` штук, новые первыми).
    pub async fn last_likes(
        &self,
        token: &str,
        limit: Option<u32>,
    ) -> NetworkClientResult<Vec<Like>> {
        let query = LastQuery { limit };
        let dto: LastLikesResponseDto =
            self.get_json("/api/like/last", Some(&query), token).await?;
        Ok(dto.likes)
    }

    /// Возвращает агрегат лайков по дням за период `date_from..=date_to`.
    ///
    /// Обе даты обязательны, строго в формате `YYYY-MM-DD`; иначе сервер
    /// отвечает 406.
    pub async fn analytics(
        &self,
        token: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> NetworkClientResult<Vec<DayLikes>> {
        let query = AnalyticsQuery { date_from, date_to };
        let dto: AnalyticsResponseDto =
            self.get_json("/api/analitics", Some(&query), token).await?;
        Ok(dto.analitics)
    }

    /// Возвращает метки активности пользователя. Только для staff-аккаунтов.
    pub async fn user_activity(&self, token: &str, user_id: i64) -> NetworkClientResult<Activity> {
        let dto: ActivityResponseDto = self
            .get_json::<(), _>(&format!("/api/analitics/activity/{user_id}"), None, token)
            .await?;
        Ok(dto.activity)
    }

    /// Возвращает суммарную статистику сервиса. Только для staff-аккаунтов.
    pub async fn statistic(&self, token: &str) -> NetworkClientResult<Statistic> {
        self.get_json::<(), _>("/api/analitics/statistic", None, token)
            .await
    }
}
