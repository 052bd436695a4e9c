use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SignupRequest {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl SignupRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = normalize_username(&self.username)?;
        let email = normalize_email(&self.email)?;
        let password_len = self.password.chars().count();
        if password_len < 1 || password_len > 128 {
            return Err(DomainError::Validation {
                field: "password",
                message: "must be 1..128 chars",
            });
        }
        Ok(Self {
            username,
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = self.username.trim();
        if username.is_empty() || username.chars().count() > 150 {
            return Err(DomainError::Validation {
                field: "username",
                message: "must be 1..150 chars",
            });
        }

        if self.password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "must not be empty",
            });
        }
        Ok(Self {
            username: username.to_string(),
            password: self.password,
        })
    }
}

/// Public view of a user record. Password material never leaves the
/// data layer in any other shape.
#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) is_staff: bool,
    pub(crate) is_active: bool,
    pub(crate) created_at: DateTime<Utc>,
}

/// Timestamps surfaced by the admin activity endpoint. `last_login` is
/// null until the first successful token obtain, `last_request_at` until
/// the first authenticated request.
#[derive(Debug, Clone)]
pub(crate) struct UserActivity {
    pub(crate) last_login: Option<DateTime<Utc>>,
    pub(crate) last_request_at: Option<DateTime<Utc>>,
}

fn normalize_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    // Counted in chars, matching the VARCHAR(150) column semantics.
    if username.is_empty() || username.chars().count() > 150 {
        return Err(DomainError::Validation {
            field: "username",
            message: "must be 1..150 chars",
        });
    }
    Ok(username.to_string())
}

fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    // Email is optional; an empty string is the stored default.
    if email.is_empty() {
        return Ok(email);
    }
    // The format check alone admits addresses longer than the
    // VARCHAR(254) column holds.
    if email.chars().count() > 254 {
        return Err(DomainError::Validation {
            field: "email",
            message: "must be at most 254 chars",
        });
    }
    if !email.validate_email() {
        return Err(DomainError::Validation {
            field: "email",
            message: "must be a valid email",
        });
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, SignupRequest, normalize_email, normalize_username};

    #[test]
    fn signup_allows_empty_email() {
        let req = SignupRequest {
            username: "alice".to_string(),
            email: String::new(),
            password: "pw12345678901234567890".to_string(),
        };
        let validated = req.validate().expect("must be valid");
        assert_eq!(validated.email, "");
    }

    #[test]
    fn signup_rejects_missing_username_or_password() {
        let no_username = SignupRequest {
            username: "   ".to_string(),
            email: String::new(),
            password: "secret".to_string(),
        };
        assert!(no_username.validate().is_err());

        let no_password = SignupRequest {
            username: "alice".to_string(),
            email: String::new(),
            password: String::new(),
        };
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        let value = normalize_email("  TeSt@Example.COM ").expect("must be valid");
        assert_eq!(value, "test@example.com");
    }

    #[test]
    fn normalize_email_rejects_garbage() {
        assert!(normalize_email("not-an-email").is_err());
    }

    #[test]
    fn username_length_bound_is_applied() {
        assert!(normalize_username(&"a".repeat(151)).is_err());
        assert!(normalize_username("alice").is_ok());
    }

    #[test]
    fn username_bound_counts_chars_not_bytes() {
        // 150 cyrillic chars are 300 bytes but still within the bound.
        assert!(normalize_username(&"я".repeat(150)).is_ok());
        assert!(normalize_username(&"я".repeat(151)).is_err());
    }

    #[test]
    fn normalize_email_rejects_overlong_address() {
        // RFC-shaped (local <= 64 chars, labels <= 63) but longer than
        // the 254-char column.
        let email = format!(
            "{}@{}.{}.{}.example.com",
            "a".repeat(64),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(63)
        );
        assert!(email.chars().count() > 254);
        assert!(normalize_email(&email).is_err());
    }

    #[test]
    fn login_requires_both_fields() {
        let req = LoginRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn login_accepts_multibyte_username_within_bound() {
        let req = LoginRequest {
            username: "я".repeat(150),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
