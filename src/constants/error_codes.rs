//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Authentication errors
pub const CODE_AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";
pub const CODE_TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
pub const CODE_INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";

// Authorization errors
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const CODE_USERNAME_EXISTS: &str = "USERNAME_EXISTS";

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// File errors
pub const CODE_INVALID_FILE_TYPE: &str = "INVALID_FILE_TYPE";
pub const CODE_FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const CODE_FILE_UPLOAD_FAILED: &str = "FILE_UPLOAD_FAILED";

// Generic errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_CONFLICT: &str = "CONFLICT";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
