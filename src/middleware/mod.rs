//! Request middleware: the authentication and authorization gates plus
//! supporting helpers.

pub mod auth_helpers;
pub mod auth_middleware;
pub mod rate_limiter;
pub mod request_ext;
pub mod role_guard;

pub use auth_helpers::require_identity;
pub use auth_middleware::AuthMiddleware;
pub use rate_limiter::auth_governor_config;
pub use request_ext::RequestExt;
pub use role_guard::RequireRole;
