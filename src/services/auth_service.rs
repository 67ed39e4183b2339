//! Authentication service for registration, login, and password utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use log::info;
use mongodb::Database;
use std::sync::Arc;

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_INVALID_CREDENTIALS, CODE_USERNAME_EXISTS, CODE_USER_NOT_FOUND,
    ERR_EMAIL_EXISTS, ERR_INVALID_CREDENTIALS, ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{LoginRequest, RegisterRequest, User, UserProfile};
use crate::repositories::UserRepository;
use crate::services::token;
use crate::utils::mask_email;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<UserRepository>,
}

impl AuthService {
    /// Create a new AuthService instance.
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Register a new account and return it with an issued token.
    pub async fn register(&self, req: RegisterRequest) -> Result<(User, String), ApiError> {
        if self.repository.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict {
                code: CODE_EMAIL_EXISTS.to_string(),
                message: ERR_EMAIL_EXISTS.to_string(),
            });
        }

        if self
            .repository
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict {
                code: CODE_USERNAME_EXISTS.to_string(),
                message: ERR_USERNAME_EXISTS.to_string(),
            });
        }

        let password_hash = hash_password(&req.password)?;

        let now = mongodb::bson::DateTime::now();
        let user = User {
            id: None,
            email: req.email.to_lowercase(),
            username: req.username,
            password_hash,
            role: req.role,
            name: None,
            profile: UserProfile::default(),
            created_at: now,
            updated_at: now,
            last_login: None,
        };

        let id = self.repository.insert(&user).await?;
        let user = User {
            id: Some(id),
            ..user
        };

        info!(
            "Registered user {} with role {}",
            mask_email(&user.email),
            user.role
        );

        let token = token::issue(&user)?;
        Ok((user, token))
    }

    /// Authenticate a user and return the record with an issued token.
    ///
    /// An unknown email is a 404, a wrong password a 401, mirroring the
    /// login contract of the public API.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), ApiError> {
        let user = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                code: CODE_USER_NOT_FOUND.to_string(),
                message: ERR_USER_NOT_FOUND.to_string(),
            })?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(ApiError::Unauthorized {
                code: CODE_INVALID_CREDENTIALS.to_string(),
                message: ERR_INVALID_CREDENTIALS.to_string(),
            });
        }

        let user_id = user.id.ok_or(ApiError::SubjectNotFound)?;
        self.repository.update_last_login(user_id).await?;

        info!("User {} logged in", mask_email(&user.email));

        let token = token::issue(&user)?;
        Ok((user, token))
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}
