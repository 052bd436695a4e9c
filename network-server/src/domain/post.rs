use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

pub(crate) const MAX_MESSAGE_CHARS: usize = 255;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) message: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) message: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            message: normalize_message(&self.message)?,
        })
    }
}

impl Post {
    pub(crate) fn new(
        id: i64,
        user_id: i64,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("user_id", user_id)?;
        let message = normalize_message(&message.into())?;

        if updated_at < created_at {
            return Err(DomainError::Validation {
                field: "updated_at",
                message: "must be >= created_at",
            });
        }

        Ok(Self {
            id,
            user_id,
            message,
            created_at,
            updated_at,
        })
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

fn normalize_message(message: &str) -> Result<String, DomainError> {
    let message = message.trim();
    // Bound counted in chars, not bytes, matching the VARCHAR(255)
    // column semantics for multibyte text.
    if message.is_empty() || message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(DomainError::Validation {
            field: "message",
            message: "must be 1..255 chars",
        });
    }
    Ok(message.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{CreatePostRequest, DomainError, Post};

    #[test]
    fn create_post_request_rejects_empty_message() {
        let req = CreatePostRequest {
            message: "   ".to_string(),
        };
        let err = req.validate().expect_err("message must be rejected");
        assert_validation_field(err, "message");
    }

    #[test]
    fn create_post_request_accepts_255_chars() {
        let req = CreatePostRequest {
            message: "x".repeat(255),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_post_request_rejects_256_chars() {
        let req = CreatePostRequest {
            message: "x".repeat(256),
        };
        let err = req.validate().expect_err("256 chars must be rejected");
        assert_validation_field(err, "message");
    }

    #[test]
    fn create_post_request_trims_message() {
        let req = CreatePostRequest {
            message: "  hello  ".to_string(),
        };
        let validated = req.validate().expect("must validate");
        assert_eq!(validated.message, "hello");
    }

    #[test]
    fn post_new_rejects_non_positive_user_id() {
        let now = Utc::now();
        let err = Post::new(1, 0, "hello", now, now).expect_err("user_id must be > 0");
        assert_validation_field(err, "user_id");
    }

    #[test]
    fn post_new_rejects_updated_before_created() {
        let updated_at = Utc::now();
        let created_at = updated_at + Duration::seconds(1);

        let err = Post::new(1, 10, "hello", created_at, updated_at)
            .expect_err("updated_at < created_at must fail");
        assert_validation_field(err, "updated_at");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
