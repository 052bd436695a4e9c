use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель пользователя.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Логин.
    pub username: String,
    /// Email (может быть пустым).
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Пара JWT-токенов после входа.
pub struct TokenPair {
    /// Access-токен для защищённых запросов.
    pub access: String,
    /// Refresh-токен для обновления access-токена.
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Идентификатор автора.
    pub user: i64,
    /// Текст поста.
    pub message: String,
    /// Дата и время создания поста (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления поста (UTC).
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель оценки поста.
pub struct Like {
    /// Идентификатор оценки.
    pub id: i64,
    /// Идентификатор автора оценки.
    pub user: i64,
    /// Идентификатор оценённого поста.
    pub message: i64,
    /// `true` — лайк, `false` — дизлайк.
    pub eval: bool,
    /// Дата и время создания оценки (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Количество лайков за один день.
pub struct DayLikes {
    /// День (UTC).
    pub date: NaiveDate,
    /// Количество лайков за день.
    pub likes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Метки активности пользователя.
pub struct Activity {
    /// Время последнего входа.
    pub last_login: Option<DateTime<Utc>>,
    /// Время последнего запроса к API.
    pub last_request_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Суммарная статистика сервиса.
pub struct Statistic {
    /// Количество пользователей.
    pub users: i64,
    /// Количество постов.
    pub posts: i64,
    /// Количество лайков.
    pub likes: i64,
}
