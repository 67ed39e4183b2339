//! Session token codec.
//!
//! Encodes and decodes the signed identity claim carried by every
//! authenticated request. Tokens are HS256-signed and live for a fixed
//! hour; there is no refresh mechanism, so expiry forces a full re-login.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{Claims, User};
use crate::utils::mask_email;

/// Expiry window for issued tokens, in seconds (fixed at one hour).
pub const TOKEN_TTL_SECS: usize = 3600;

/// Issue a signed, time-limited credential for the given user.
pub fn issue(user: &User) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: user.id.map(|id| id.to_hex()).unwrap_or_default(),
        email: user.email.clone(),
        role: user.role,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    debug!(
        "Issued token for user {} with role {}",
        mask_email(&user.email),
        user.role
    );

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?)
}

/// Verify a presented token and return its claim.
///
/// Fails with [`ApiError::TokenExpired`] past the expiry timestamp and
/// [`ApiError::InvalidToken`] on any signature or format failure. Expiry
/// is checked with zero leeway so the contract is exact.
pub fn verify(token: &str) -> Result<Claims, ApiError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserProfile};
    use mongodb::bson::oid::ObjectId;

    fn seller() -> User {
        let now = mongodb::bson::DateTime::now();
        User {
            id: Some(ObjectId::new()),
            email: "seller@example.com".to_string(),
            username: "seller".to_string(),
            password_hash: "irrelevant".to_string(),
            role: Role::Seller,
            name: Some("Seller User".to_string()),
            profile: UserProfile::default(),
            created_at: now,
            updated_at: now,
            last_login: None,
        }
    }

    #[test]
    fn verify_returns_issued_claim_fields() {
        let user = seller();
        let token = issue(&user).unwrap();
        let claims = verify(&token).unwrap();

        assert_eq!(claims.sub, user.id.unwrap().to_hex());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::Seller);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn verify_rejects_expired_tokens() {
        // Hand-craft a token whose expiry is already in the past.
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: ObjectId::new().to_hex(),
            email: "seller@example.com".to_string(),
            role: Role::Seller,
            exp: now - 10,
            iat: now - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(verify(&token), Err(ApiError::TokenExpired)));
    }

    #[test]
    fn verify_rejects_foreign_signatures() {
        let user = seller();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: user.id.unwrap().to_hex(),
            email: user.email.clone(),
            role: user.role,
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"not-the-server-key"),
        )
        .unwrap();

        assert!(matches!(verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn verify_rejects_malformed_tokens() {
        assert!(matches!(
            verify("not.a.token"),
            Err(ApiError::InvalidToken)
        ));
        assert!(matches!(verify(""), Err(ApiError::InvalidToken)));
    }
}
