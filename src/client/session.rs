//! Client session store.
//!
//! Holds the current raw token and its decoded claim, persisting both as
//! durable string entries so a restarted app resumes its session. All
//! access is single-threaded from the UI side; mutations are synchronous
//! state replacements.

use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::client::{ClientError, KeyValueStorage};
use crate::models::Claims;

/// Storage key for the raw session token.
pub const KEY_TOKEN: &str = "userToken";

/// Storage key for the JSON-serialized decoded claim.
pub const KEY_CLAIM: &str = "decodedToken";

pub struct SessionStore {
    storage: KeyValueStorage,
    token: Option<String>,
    claim: Option<Claims>,
}

impl SessionStore {
    /// Create an empty (logged-out) store over the given storage. Call
    /// [`load_session`](Self::load_session) to restore a persisted one.
    pub fn new(storage: KeyValueStorage) -> Self {
        Self {
            storage,
            token: None,
            claim: None,
        }
    }

    /// Replace the in-memory session and persist both entries.
    pub fn set_session(&mut self, token: String, claim: Claims) -> Result<(), ClientError> {
        self.storage.set(KEY_TOKEN, &token)?;
        self.storage.set(KEY_CLAIM, &serde_json::to_string(&claim)?)?;

        self.token = Some(token);
        self.claim = Some(claim);
        Ok(())
    }

    /// Wipe the in-memory session and remove both persisted entries.
    pub fn clear_session(&mut self) -> Result<(), ClientError> {
        self.token = None;
        self.claim = None;

        self.storage.remove(KEY_TOKEN)?;
        self.storage.remove(KEY_CLAIM)?;
        Ok(())
    }

    /// Restore a persisted session at startup.
    ///
    /// The state is restored only when both entries are present and the
    /// claim parses; anything else leaves the store logged out without
    /// surfacing an error (first-run safety).
    pub fn load_session(&mut self) {
        let token = self.storage.get(KEY_TOKEN);
        let raw_claim = self.storage.get(KEY_CLAIM);

        if let (Some(token), Some(raw_claim)) = (token, raw_claim) {
            if let Ok(claim) = serde_json::from_str::<Claims>(&raw_claim) {
                self.token = Some(token);
                self.claim = Some(claim);
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn claim(&self) -> Option<&Claims> {
        self.claim.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.claim.is_some()
    }
}

/// Decode a token's claim without verifying its signature.
///
/// The client never holds the signing key; it trusts the server that just
/// issued the token and only needs the payload fields. Verification
/// happens server-side on every request.
pub fn decode_claims_unverified(token: &str) -> Option<Claims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn claim() -> Claims {
        Claims {
            sub: "665f1f77bcf86cd799439011".to_string(),
            email: "customer@example.com".to_string(),
            role: Role::Customer,
            exp: 2_000_000_000,
            iat: 1_999_996_400,
        }
    }

    fn store(dir: &std::path::Path) -> SessionStore {
        SessionStore::new(KeyValueStorage::open(dir).unwrap())
    }

    #[test]
    fn set_then_load_restores_the_session() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = store(dir.path());
        first.set_session("raw-token".to_string(), claim()).unwrap();
        assert!(first.is_logged_in());

        // A fresh store over the same directory sees the persisted state.
        let mut second = store(dir.path());
        assert!(!second.is_logged_in());
        second.load_session();
        assert_eq!(second.token(), Some("raw-token"));
        assert_eq!(second.claim(), Some(&claim()));
    }

    #[test]
    fn clear_then_load_is_always_empty() {
        let dir = tempfile::tempdir().unwrap();

        let mut session = store(dir.path());
        session.set_session("raw-token".to_string(), claim()).unwrap();
        session.clear_session().unwrap();

        session.load_session();
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
        assert_eq!(session.claim(), None);

        // Logout is idempotent.
        session.clear_session().unwrap();
        session.load_session();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn load_with_missing_claim_stays_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorage::open(dir.path()).unwrap();
        storage.set(KEY_TOKEN, "raw-token").unwrap();

        let mut session = SessionStore::new(storage);
        session.load_session();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn load_with_unparsable_claim_stays_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorage::open(dir.path()).unwrap();
        storage.set(KEY_TOKEN, "raw-token").unwrap();
        storage.set(KEY_CLAIM, "{not json").unwrap();

        let mut session = SessionStore::new(storage);
        session.load_session();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn unverified_decode_reads_issued_claims() {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let token = encode(
            &Header::default(),
            &claim(),
            &EncodingKey::from_secret(b"some-server-key"),
        )
        .unwrap();

        let decoded = decode_claims_unverified(&token).unwrap();
        assert_eq!(decoded, claim());
    }
}
