//! JWT claims and the resolved request identity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Identity claim carried by a session token.
///
/// Immutable once issued; a token is invalid after `exp` or on signature
/// mismatch. There is no refresh mechanism, so expiry forces a full
/// re-login.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's document id in hex form
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: usize,
    /// Issued-at timestamp (Unix epoch seconds)
    pub iat: usize,
}

/// Identity attached to the request after the authentication check has
/// verified the token and resolved the subject against the user record.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: ObjectId,
    pub email: String,
    pub role: Role,
}
