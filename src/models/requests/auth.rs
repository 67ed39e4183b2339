//! Authentication request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Role;

/// Request payload for user registration
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User's email address
    #[validate(email(message = "Email is invalid"))]
    #[schema(example = "farmer@example.com")]
    pub email: String,
    /// Unique username
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "greenfields")]
    pub username: String,
    /// Password (6 to 10 characters)
    #[validate(length(
        min = 6,
        max = 10,
        message = "Password must be between 6 and 10 characters long"
    ))]
    #[schema(example = "secret99")]
    pub password: String,
    /// Account role
    #[schema(example = "FARMER")]
    pub role: Role,
}

/// Request payload for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Email is invalid"))]
    #[schema(example = "farmer@example.com")]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret99")]
    pub password: String,
}
