//! Rate limiting for the authentication endpoints.
//!
//! Login and registration are the only endpoints that accept credentials,
//! so they sit behind a strict per-IP limiter against brute-force
//! attempts. The rest of the API is gated by tokens and stays unlimited.

use actix_governor::{GovernorConfig, GovernorConfigBuilder};

/// Governor configuration for the auth scope: a burst of 3 requests,
/// with one request replenished every 4 seconds (15 per minute).
///
/// Usage:
/// ```ignore
/// let config = auth_governor_config();
/// web::scope("/auth").wrap(Governor::new(&config))
/// ```
pub fn auth_governor_config() -> GovernorConfig<
    actix_governor::PeerIpKeyExtractor,
    actix_governor::governor::middleware::NoOpMiddleware<
        actix_governor::governor::clock::QuantaInstant,
    >,
> {
    GovernorConfigBuilder::default()
        .seconds_per_request(4)
        .burst_size(3)
        .finish()
        .expect("Failed to create auth rate limiter config")
}
