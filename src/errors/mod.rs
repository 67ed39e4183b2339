//! Central API error type and its HTTP rendering.
//!
//! Authentication and authorization failures are terminal for the request:
//! they map directly onto a status and a machine-readable code, with no
//! retry or recovery path.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::constants::{
    CODE_AUTH_REQUIRED, CODE_FORBIDDEN, CODE_INTERNAL_ERROR, CODE_INVALID_TOKEN,
    CODE_TOKEN_EXPIRED, CODE_USER_NOT_FOUND, CODE_VALIDATION_FAILED, ERR_AUTH_REQUIRED,
    ERR_FORBIDDEN, ERR_INVALID_TOKEN, ERR_TOKEN_EXPIRED, ERR_USER_NOT_FOUND,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum ApiError {
    /// No bearer credential was presented with the request.
    Unauthenticated,
    /// The presented token is malformed or not signed by the expected key.
    InvalidToken,
    /// The presented token is past its expiry timestamp.
    TokenExpired,
    /// The token verified but its subject no longer exists.
    SubjectNotFound,
    /// The authenticated role is not in the allow-list for this operation.
    Forbidden,
    Unauthorized { code: String, message: String },
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { errors: Vec<String> },
}

impl ApiError {
    /// Machine-readable error code for the response envelope.
    pub fn code(&self) -> &str {
        match self {
            ApiError::Unauthenticated => CODE_AUTH_REQUIRED,
            ApiError::InvalidToken => CODE_INVALID_TOKEN,
            ApiError::TokenExpired => CODE_TOKEN_EXPIRED,
            ApiError::SubjectNotFound => CODE_USER_NOT_FOUND,
            ApiError::Forbidden => CODE_FORBIDDEN,
            ApiError::Unauthorized { code, .. }
            | ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Conflict { code, .. }
            | ApiError::InternalServerError { code, .. } => code,
            ApiError::ValidationError { .. } => CODE_VALIDATION_FAILED,
        }
    }

    /// Human-readable message for the response envelope.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthenticated => ERR_AUTH_REQUIRED,
            ApiError::InvalidToken => ERR_INVALID_TOKEN,
            ApiError::TokenExpired => ERR_TOKEN_EXPIRED,
            ApiError::SubjectNotFound => ERR_USER_NOT_FOUND,
            ApiError::Forbidden => ERR_FORBIDDEN,
            ApiError::Unauthorized { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::InternalServerError { message, .. } => message,
            ApiError::ValidationError { .. } => "Validation failed",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated
            | ApiError::InvalidToken
            | ApiError::TokenExpired
            | ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::SubjectNotFound | ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            ApiError::ValidationError { errors } => Some(errors.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message: self.message().to_string(),
            errors,
        })
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => ApiError::TokenExpired,
            _ => ApiError::InvalidToken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_map_to_matching_status() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::TokenExpired.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::SubjectNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn expired_jwt_errors_become_token_expired() {
        let err = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::ExpiredSignature,
        );
        assert!(matches!(ApiError::from(err), ApiError::TokenExpired));

        let err = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::InvalidSignature,
        );
        assert!(matches!(ApiError::from(err), ApiError::InvalidToken));
    }
}
