use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest, User};
use crate::infrastructure::token::{TokenPair, TokenService};

pub(crate) struct AuthService<R: UserRepository> {
    repo: R,
    tokens: Arc<TokenService>,
}

impl<R: UserRepository> AuthService<R> {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub(crate) fn new(repo: R, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Creates a user. Only the argon2id hash of the password is ever
    /// stored; the response carries the public fields alone.
    pub(crate) async fn register(&self, req: SignupRequest) -> Result<User, DomainError> {
        let req = req.validate()?;

        let password_hash = self.hash_password(&req.password)?;

        let new_user = NewUser {
            username: req.username,
            email: req.email,
            password_hash,
        };
        self.repo.create_user(new_user).await
    }

    /// Verifies credentials and issues the access/refresh pair,
    /// recording `last_login` on success.
    pub(crate) async fn login(&self, req: LoginRequest) -> Result<TokenPair, DomainError> {
        let req = req.validate()?;

        let user_creds = match self.repo.find_by_username(&req.username).await? {
            Some(user_creds) => user_creds,
            None => {
                // Burn comparable time when the user is unknown.
                match self.verify_password(&req.password, Self::DUMMY_PASSWORD_HASH) {
                    Ok(()) | Err(DomainError::InvalidCredentials) => {}
                    Err(err) => return Err(err),
                }
                return Err(DomainError::InvalidCredentials);
            }
        };

        self.verify_password(&req.password, &user_creds.password_hash)?;

        if !user_creds.user.is_active {
            return Err(DomainError::InvalidCredentials);
        }

        let user = &user_creds.user;
        let pair = self
            .tokens
            .issue_pair(user.id, &user.username, user.is_staff)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        self.repo.record_login(user.id).await?;

        Ok(pair)
    }

    /// Exchanges a valid refresh token for a fresh access token. The
    /// claims are trusted as issued; no user lookup happens here.
    pub(crate) fn refresh(&self, refresh_token: &str) -> Result<String, DomainError> {
        let claims = self
            .tokens
            .verify_refresh(refresh_token)
            .map_err(|_| DomainError::InvalidCredentials)?;

        self.tokens
            .issue_access(claims.user_id, &claims.username, claims.is_staff)
            .map_err(|err| DomainError::Unexpected(err.to_string()))
    }

    pub(crate) fn hash_password(&self, raw_password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Self::argon2()?
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(password_hash.to_string())
    }

    pub(crate) fn verify_password(
        &self,
        raw_password: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Self::argon2()?
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .map_err(|err| match err {
                PasswordHashError::Password => DomainError::InvalidCredentials,
                _ => DomainError::Unexpected(err.to_string()),
            })?;

        Ok(())
    }

    fn argon2() -> Result<Argon2<'static>, DomainError> {
        let params = Params::new(19 * 1024, 2, 1, None)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}
