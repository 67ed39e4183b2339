//! User-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Role, User, UserProfile};

/// Profile data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UserProfileResponse {
    /// User's phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// User's postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// URL to user's profile image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            phone: profile.phone,
            address: profile.address,
            profile_image: profile.profile_image,
        }
    }
}

/// User data returned in API responses (without sensitive fields)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub id: String,
    /// User's email address
    #[schema(example = "farmer@example.com")]
    pub email: String,
    /// User's username
    #[schema(example = "greenfields")]
    pub username: String,
    /// User's role
    pub role: Role,
    /// User's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User's profile information
    pub profile: UserProfileResponse,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user last logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            username: user.username,
            role: user.role,
            name: user.name,
            profile: user.profile.into(),
            created_at: DateTime::from_timestamp_millis(user.created_at.timestamp_millis())
                .unwrap_or_default(),
            last_login: user.last_login.map(|dt| {
                DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
            }),
        }
    }
}

/// Response for successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    pub message: String,
    /// JWT token for authentication
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// User information
    pub user: UserResponse,
}
