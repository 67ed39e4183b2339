//! Profile request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for updating the caller's profile.
///
/// All fields are optional; absent fields keep their current value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// Display name
    #[schema(example = "Jane Greenfield")]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "Email is invalid"))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// Phone number
    #[schema(example = "+8801711111111")]
    pub phone: Option<String>,
    /// Postal address
    #[schema(example = "12 Market Road, Khulna")]
    pub address: Option<String>,
    /// Profile image URL
    #[schema(example = "https://example.com/me.jpg")]
    pub profile_image: Option<String>,
}
