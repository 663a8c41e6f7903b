//! Signed Session Credential
//!
//! A compact token: base64url(JSON claims) + "." + base64url(signature),
//! where the signature is a blake3 keyed hash of the payload. Valid for
//! 24 hours from issuance.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Credential lifetime: 24 hours
pub const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Claims carried by the credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Capability flag, must be true for admin access
    pub admin: bool,
    /// Issuance time, epoch millis
    pub issued_at_ms: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    Malformed,
    BadSignature,
    Expired,
    NotAdmin,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "malformed token"),
            TokenError::BadSignature => write!(f, "invalid token signature"),
            TokenError::Expired => write!(f, "token expired"),
            TokenError::NotAdmin => write!(f, "token lacks admin capability"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Derive the 32-byte signing key from the configured secret
fn signing_key(secret: &str) -> [u8; 32] {
    *blake3::hash(secret.as_bytes()).as_bytes()
}

fn sign(secret: &str, payload: &[u8]) -> blake3::Hash {
    blake3::keyed_hash(&signing_key(secret), payload)
}

/// Issue a signed credential for the given claims
pub fn issue(secret: &str, claims: &Claims) -> Result<String, String> {
    let json = serde_json::to_vec(claims).map_err(|e| e.to_string())?;
    let payload = URL_SAFE_NO_PAD.encode(&json);
    let sig = sign(secret, payload.as_bytes());
    let sig_b64 = URL_SAFE_NO_PAD.encode(sig.as_bytes());
    Ok(format!("{}.{}", payload, sig_b64))
}

/// Verify signature, admin flag and expiry; returns the claims on success.
///
/// `now_ms` is passed in so expiry is testable.
pub fn verify(secret: &str, token: &str, now_ms: i64) -> Result<Claims, TokenError> {
    let (payload, sig_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let sig_bytes = URL_SAFE_NO_PAD
        .decode(sig_b64)
        .map_err(|_| TokenError::Malformed)?;
    let sig_bytes: [u8; 32] = sig_bytes.try_into().map_err(|_| TokenError::Malformed)?;

    // blake3::Hash equality is constant-time
    let expected = sign(secret, payload.as_bytes());
    if expected != blake3::Hash::from(sig_bytes) {
        return Err(TokenError::BadSignature);
    }

    let json = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    let claims: Claims = serde_json::from_slice(&json).map_err(|_| TokenError::Malformed)?;

    if !claims.admin {
        return Err(TokenError::NotAdmin);
    }
    if now_ms.saturating_sub(claims.issued_at_ms) > TOKEN_TTL_MS {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_verify_roundtrip() {
        let claims = Claims { admin: true, issued_at_ms: 1_000 };
        let token = issue(SECRET, &claims).unwrap();
        let verified = verify(SECRET, &token, 2_000).unwrap();
        assert_eq!(verified, claims);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = Claims { admin: true, issued_at_ms: 1_000 };
        let token = issue(SECRET, &claims).unwrap();
        let err = verify("other-secret", &token, 2_000).unwrap_err();
        assert_eq!(err, TokenError::BadSignature);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let claims = Claims { admin: true, issued_at_ms: 1_000 };
        let token = issue(SECRET, &claims).unwrap();
        let (payload, sig) = token.split_once('.').unwrap();

        let forged_json = serde_json::to_vec(&Claims { admin: true, issued_at_ms: 2_000 }).unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode(&forged_json);
        assert_ne!(forged_payload, payload);

        let forged = format!("{}.{}", forged_payload, sig);
        let err = verify(SECRET, &forged, 2_000).unwrap_err();
        assert_eq!(err, TokenError::BadSignature);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims { admin: true, issued_at_ms: 0 };
        let token = issue(SECRET, &claims).unwrap();

        // One millisecond past the TTL
        let err = verify(SECRET, &token, TOKEN_TTL_MS + 1).unwrap_err();
        assert_eq!(err, TokenError::Expired);

        // Exactly at the TTL boundary is still valid
        assert!(verify(SECRET, &token, TOKEN_TTL_MS).is_ok());
    }

    #[test]
    fn test_non_admin_claims_rejected() {
        let claims = Claims { admin: false, issued_at_ms: 1_000 };
        let token = issue(SECRET, &claims).unwrap();
        let err = verify(SECRET, &token, 2_000).unwrap_err();
        assert_eq!(err, TokenError::NotAdmin);
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(verify(SECRET, "not-a-token", 0).unwrap_err(), TokenError::Malformed);
        assert_eq!(verify(SECRET, "a.b.c", 0).unwrap_err(), TokenError::Malformed);
    }
}
