use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum TokenError {
    #[error("token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token decode/validation failed")]
    Decode(#[source] jsonwebtoken::errors::Error),

    #[error("wrong token type")]
    WrongType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TokenKind {
    Access,
    Refresh,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Claims {
    pub(crate) user_id: i64,
    pub(crate) username: String,
    pub(crate) is_staff: bool,
    pub(crate) token_type: TokenKind,
    pub(crate) exp: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct TokenPair {
    pub(crate) access: String,
    pub(crate) refresh: String,
}

/// Issues and verifies the short-lived access / long-lived refresh
/// token pair. Both share the HS256 secret and differ only in
/// `token_type` and TTL, so each verify path checks the kind.
pub(crate) struct TokenService {
    secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl TokenService {
    const DEFAULT_ACCESS_TTL_SECONDS: i64 = 60 * 60;
    const DEFAULT_REFRESH_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

    pub(crate) fn new(secret: &str, access_ttl_seconds: i64, refresh_ttl_seconds: i64) -> Self {
        let access_ttl_seconds = if access_ttl_seconds > 0 {
            access_ttl_seconds
        } else {
            Self::DEFAULT_ACCESS_TTL_SECONDS
        };
        let refresh_ttl_seconds = if refresh_ttl_seconds > 0 {
            refresh_ttl_seconds
        } else {
            Self::DEFAULT_REFRESH_TTL_SECONDS
        };

        TokenService {
            secret: secret.into(),
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    pub(crate) fn issue_pair(
        &self,
        user_id: i64,
        username: &str,
        is_staff: bool,
    ) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access: self.issue(user_id, username, is_staff, TokenKind::Access)?,
            refresh: self.issue(user_id, username, is_staff, TokenKind::Refresh)?,
        })
    }

    pub(crate) fn issue_access(
        &self,
        user_id: i64,
        username: &str,
        is_staff: bool,
    ) -> Result<String, TokenError> {
        self.issue(user_id, username, is_staff, TokenKind::Access)
    }

    pub(crate) fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenKind::Access)
    }

    pub(crate) fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenKind::Refresh)
    }

    fn issue(
        &self,
        user_id: i64,
        username: &str,
        is_staff: bool,
        kind: TokenKind,
    ) -> Result<String, TokenError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl_seconds,
            TokenKind::Refresh => self.refresh_ttl_seconds,
        };
        let exp = (Utc::now() + Duration::seconds(ttl)).timestamp();

        let claims = Claims {
            user_id,
            username: username.into(),
            is_staff,
            token_type: kind,
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Encode)
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 10;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(TokenError::Decode)?;

        if token_data.claims.token_type != expected {
            return Err(TokenError::WrongType);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::{TokenError, TokenService};

    fn service() -> TokenService {
        TokenService::new("0123456789abcdef0123456789abcdef", 3600, 7200)
    }

    #[test]
    fn access_token_round_trips() {
        let tokens = service();
        let token = tokens
            .issue_access(7, "alice", false)
            .expect("issue must succeed");
        let claims = tokens.verify_access(&token).expect("verify must succeed");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
        assert!(!claims.is_staff);
    }

    #[test]
    fn refresh_token_is_rejected_as_access() {
        let tokens = service();
        let pair = tokens
            .issue_pair(7, "alice", false)
            .expect("issue must succeed");
        let err = tokens
            .verify_access(&pair.refresh)
            .expect_err("refresh must not pass as access");
        assert!(matches!(err, TokenError::WrongType));
    }

    #[test]
    fn access_token_is_rejected_as_refresh() {
        let tokens = service();
        let pair = tokens
            .issue_pair(7, "alice", true)
            .expect("issue must succeed");
        let err = tokens
            .verify_refresh(&pair.access)
            .expect_err("access must not pass as refresh");
        assert!(matches!(err, TokenError::WrongType));
    }

    #[test]
    fn staff_flag_survives_the_round_trip() {
        let tokens = service();
        let pair = tokens
            .issue_pair(1, "admin", true)
            .expect("issue must succeed");
        let claims = tokens
            .verify_refresh(&pair.refresh)
            .expect("verify must succeed");
        assert!(claims.is_staff);
    }

    #[test]
    fn garbage_token_fails_verification() {
        let tokens = service();
        assert!(matches!(
            tokens.verify_access("not.a.token"),
            Err(TokenError::Decode(_))
        ));
    }
}
