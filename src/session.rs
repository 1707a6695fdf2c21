//! Session Handling
//!
//! Bearer token lifecycle: decoded from the login response, persisted in
//! browser storage, restored on startup, dropped on logout or once the
//! expiry claim lapses.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

const TOKEN_KEY: &str = "shelflife.token";

#[derive(Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// An authenticated session against the tracker API
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Decode the payload segment of a JWT without verifying the signature.
    /// The server is the trust boundary; the client only reads the claims.
    pub fn from_token(token: &str) -> Option<Session> {
        let payload = token.split('.').nth(1)?;
        let bytes = decode_segment(payload)?;
        let claims: Claims = serde_json::from_slice(&bytes).ok()?;
        let expires_at = Utc.timestamp_opt(claims.exp, 0).single()?;
        Some(Session {
            token: token.to_string(),
            user_id: claims.sub,
            expires_at,
        })
    }

    /// Whether the expiry claim is still in the future
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Restore a live session from browser storage, if one is there.
    /// A stored token that is undecodable or expired is removed.
    pub fn load() -> Option<Session> {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        match Session::from_token(&token) {
            Some(session) if session.is_live(Utc::now()) => Some(session),
            _ => {
                let _ = storage.remove_item(TOKEN_KEY);
                None
            }
        }
    }

    /// Persist the token so a page reload keeps the session.
    pub fn persist(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &self.token);
        }
    }

    /// Remove any stored token.
    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// JWT segments are base64url; tokens in the wild vary on padding.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(segment.trim_end_matches('=')).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn make_token(sub: &str, exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload =
            URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{}","exp":{}}}"#, sub, exp).as_bytes());
        format!("{}.{}.signature-not-checked", header, payload)
    }

    #[test]
    fn test_decodes_claims_without_verifying_signature() {
        let token = make_token("42", 4_102_444_800); // 2100-01-01
        let session = Session::from_token(&token).unwrap();
        assert_eq!(session.user_id, "42");
        assert_eq!(session.token, token);
    }

    #[test]
    fn test_is_live_honors_expiry_claim() {
        let token = make_token("1", 1_750_000_000);
        let session = Session::from_token(&token).unwrap();
        let before = Utc.timestamp_opt(1_749_999_999, 0).unwrap();
        let after = Utc.timestamp_opt(1_750_000_001, 0).unwrap();
        assert!(session.is_live(before));
        assert!(!session.is_live(after));
        // the boundary instant itself counts as expired
        assert!(!session.is_live(session.expires_at));
    }

    #[test]
    fn test_rejects_garbage_tokens() {
        assert!(Session::from_token("").is_none());
        assert!(Session::from_token("not-a-jwt").is_none());
        assert!(Session::from_token("a.b.c").is_none());
        // valid base64 but not JSON claims
        let bogus = format!("x.{}.y", URL_SAFE_NO_PAD.encode(b"hello"));
        assert!(Session::from_token(&bogus).is_none());
    }

    #[test]
    fn test_tolerates_padded_segments() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(br#"{"sub":"7","exp":4102444800}"#);
        let token = format!("h.{}.s", payload);
        let session = Session::from_token(&token).unwrap();
        assert_eq!(session.user_id, "7");
    }
}
