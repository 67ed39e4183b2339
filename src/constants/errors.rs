//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "No token provided";
pub const ERR_INVALID_TOKEN: &str = "Invalid token";
pub const ERR_TOKEN_EXPIRED: &str = "Token has expired";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials";

// Authorization errors
pub const ERR_FORBIDDEN: &str = "You do not have permission to perform this action";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_PROFILE_NOT_FOUND: &str = "Profile not found";
pub const ERR_EMAIL_EXISTS: &str = "User already exists";
pub const ERR_USERNAME_EXISTS: &str = "Username already taken";

// Product errors
pub const ERR_PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ERR_INVALID_PRODUCT_ID: &str = "Invalid product ID format";

// Order errors
pub const ERR_ORDER_NOT_FOUND: &str = "Order not found or unauthorized";
pub const ERR_INVALID_ORDER_ID: &str = "Invalid order ID format";
pub const ERR_INVALID_ORDER_STATUS: &str = "Invalid status";

// File upload errors
pub const ERR_INVALID_FILE_TYPE: &str =
    "Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed.";
pub const ERR_FILE_TOO_LARGE: &str = "File too large. Maximum size is 5MB.";
pub const ERR_NO_IMAGE_FILE: &str =
    "No image file provided. Please upload a file with field name 'image'.";
pub const ERR_FAILED_PROCESS_UPLOAD: &str = "Failed to process upload";
pub const ERR_FAILED_READ_FILE: &str = "Failed to read file data";
pub const ERR_FAILED_SAVE_FILE: &str = "Failed to save file";
