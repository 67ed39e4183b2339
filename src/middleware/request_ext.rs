//! Request extension trait for reading the attached identity.

use actix_web::HttpMessage;

use crate::models::{AuthenticatedUser, Claims};

/// Extension trait for extracting the authenticated identity from HTTP
/// requests.
///
/// Both values are attached by the authentication middleware; they are
/// `None` on requests that never passed the gate.
pub trait RequestExt {
    /// The resolved identity (subject id, email, role).
    fn identity(&self) -> Option<AuthenticatedUser>;

    /// The raw token claims.
    fn claims(&self) -> Option<Claims>;
}

impl RequestExt for actix_web::HttpRequest {
    fn identity(&self) -> Option<AuthenticatedUser> {
        self.extensions().get::<AuthenticatedUser>().cloned()
    }

    fn claims(&self) -> Option<Claims> {
        self.extensions().get::<Claims>().cloned()
    }
}
