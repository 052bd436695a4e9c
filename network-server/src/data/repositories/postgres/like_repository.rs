use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::data::like_repository::{LikeRepository, NewLike};
use crate::domain::analytics::{DateRange, DayLikes};
use crate::domain::error::DomainError;
use crate::domain::like::Like;

#[derive(Debug, Clone)]
pub(crate) struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LikeRow {
    id: i64,
    user_id: i64,
    message_id: i64,
    eval: bool,
    created_at: DateTime<Utc>,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            message_id: row.message_id,
            eval: row.eval,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn create_like(&self, input: NewLike) -> Result<Like, DomainError> {
        let row = sqlx::query_as::<_, LikeRow>(
            r#"
            INSERT INTO likes (user_id, message_id, eval)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, message_id, eval, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.message_id)
        .bind(input.eval)
        .fetch_one(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(row.into())
    }

    async fn delete_likes(&self, user_id: i64, message_id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = $1 AND message_id = $2
            "#,
        )
        .bind(user_id)
        .bind(message_id)
        .execute(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(result.rows_affected())
    }

    async fn last_likes(&self, limit: i64) -> Result<Vec<Like>, DomainError> {
        let rows = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, user_id, message_id, eval, created_at
            FROM likes
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(rows.into_iter().map(Like::from).collect())
    }

    async fn count_likes(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes")
            .fetch_one(&self.pool)
            .await
            .map_err(map_like_db_error)
    }

    async fn count_by_day(&self, range: DateRange) -> Result<Vec<DayLikes>, DomainError> {
        // Grouping day is derived in UTC to match the parse boundary.
        let rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r#"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS date, COUNT(*) AS likes
            FROM likes
            WHERE created_at >= $1 AND created_at < $2
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(range.start())
        .bind(range.end_exclusive())
        .fetch_all(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(date, likes)| DayLikes { date, likes })
            .collect())
    }
}

fn map_like_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23503")
    {
        // Dangling message_id: the referenced post does not exist.
        return DomainError::Validation {
            field: "message_id",
            message: "post does not exist",
        };
    }
    DomainError::Unexpected(err.to_string())
}
