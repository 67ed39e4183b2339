//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::{ERR_FILE_TOO_LARGE, ERR_INVALID_FILE_TYPE};
use crate::constants::{CODE_FILE_TOO_LARGE, CODE_INVALID_FILE_TYPE};
use crate::errors::ApiError;

/// Allowed image content types for product image uploads.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum file size for image uploads (5MB).
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Convert validator errors to ApiError::ValidationError.
///
/// This helper function extracts error messages from ValidationErrors
/// and converts them into a format suitable for API responses.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError { errors }
}

/// Validate image content type.
///
/// Returns an error if the content type is not an allowed image type.
pub fn validate_image_content_type(content_type: Option<&str>) -> Result<(), ApiError> {
    match content_type {
        Some(ct) if ALLOWED_IMAGE_TYPES.iter().any(|t| ct.starts_with(t)) => Ok(()),
        _ => Err(ApiError::BadRequest {
            code: CODE_INVALID_FILE_TYPE.to_string(),
            message: ERR_INVALID_FILE_TYPE.to_string(),
        }),
    }
}

/// Get file extension from content type.
///
/// Returns the appropriate file extension for the given content type.
pub fn get_extension_from_content_type(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some("image/jpeg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "jpg",
    }
}

/// Validate image file size.
///
/// Returns an error if the file size exceeds the maximum allowed size.
pub fn validate_image_size(size: usize) -> Result<(), ApiError> {
    if size > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest {
            code: CODE_FILE_TOO_LARGE.to_string(),
            message: ERR_FILE_TOO_LARGE.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_image_types() {
        for ct in ALLOWED_IMAGE_TYPES {
            assert!(validate_image_content_type(Some(ct)).is_ok());
        }
    }

    #[test]
    fn rejects_disallowed_or_missing_content_type() {
        assert!(validate_image_content_type(Some("application/pdf")).is_err());
        assert!(validate_image_content_type(None).is_err());
    }

    #[test]
    fn enforces_size_limit() {
        assert!(validate_image_size(MAX_IMAGE_SIZE).is_ok());
        assert!(validate_image_size(MAX_IMAGE_SIZE + 1).is_err());
    }
}
