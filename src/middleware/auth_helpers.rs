//! Authentication helper functions for handlers.

use actix_web::HttpRequest;
use log::warn;

use crate::errors::ApiError;
use crate::models::AuthenticatedUser;

use super::RequestExt;

/// Extract the attached identity from the request or fail Unauthenticated.
///
/// Use this at the start of any handler behind the authentication gate.
///
/// # Example
/// ```ignore
/// let identity = require_identity(&req)?;
/// ```
pub fn require_identity(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    req.identity().ok_or_else(|| {
        warn!("Failed to get identity from request");
        ApiError::Unauthenticated
    })
}
