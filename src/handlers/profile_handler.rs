//! Profile handlers for the authenticated user.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::constants::{MSG_PROFILE_RETRIEVED, MSG_PROFILE_UPDATED};
use crate::errors::ApiError;
use crate::middleware::require_identity;
use crate::models::{ApiResponse, UpdateProfileRequest, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Profile retrieved", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = crate::models::ErrorResponse),
        (status = 404, description = "Profile not found", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    req: HttpRequest,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req)?;
    let profile = user_service.get_profile(identity.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROFILE_RETRIEVED, profile)))
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already in use", body = crate::models::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_profile(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let identity = require_identity(&req)?;
    let profile = user_service
        .update_profile(identity.id, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROFILE_UPDATED, profile)))
}
