//! Success message constants used throughout the application.

// Authentication messages
pub const MSG_USER_REGISTERED: &str = "Successfully registered";
pub const MSG_LOGIN_SUCCESS: &str = "Successfully logged in";

// Product messages
pub const MSG_PRODUCT_CREATED: &str = "Product successfully created";

// Order messages
pub const MSG_ORDER_PLACED: &str = "Order placed successfully";
pub const MSG_ORDERS_RETRIEVED: &str = "Orders retrieved";
pub const MSG_ORDER_STATUS_UPDATED: &str = "Order status updated";

// Profile messages
pub const MSG_PROFILE_RETRIEVED: &str = "Profile retrieved";
pub const MSG_PROFILE_UPDATED: &str = "Profile updated successfully";
