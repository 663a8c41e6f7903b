//! Admin Session State
//!
//! Holds the currently issued credential. Authentication issues a new
//! credential, verification checks the held one, revocation clears it.
//! Because the credential lives here, a revoked credential genuinely
//! stops verifying.

use tokio::sync::Mutex;

use super::token::{self, Claims};
use crate::config::Config;
use crate::domain::now_millis;

/// Managed session state, one admin session at a time
pub struct SessionState {
    current: Mutex<Option<String>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    /// Check the password and issue a fresh credential on success
    pub async fn authenticate(&self, config: &Config, password: &str) -> Result<(), String> {
        // Compare digests rather than strings; blake3 equality is constant-time
        let given = blake3::hash(password.as_bytes());
        let expected = blake3::hash(config.admin_password.as_bytes());
        if given != expected {
            return Err("Invalid password".to_string());
        }

        let claims = Claims {
            admin: true,
            issued_at_ms: now_millis(),
        };
        let credential = token::issue(&config.session_secret, &claims)?;
        *self.current.lock().await = Some(credential);
        Ok(())
    }

    /// Verify the held credential's signature, capability flag and expiry
    pub async fn verify(&self, config: &Config) -> Result<(), String> {
        let guard = self.current.lock().await;
        let credential = guard.as_deref().ok_or_else(|| "No token found".to_string())?;

        token::verify(&config.session_secret, credential, now_millis())
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    /// Revoke the held credential. Never fails.
    pub async fn revoke(&self) {
        *self.current.lock().await = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            admin_password: "admin123".to_string(),
            session_secret: "test-secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_then_verify() {
        let session = SessionState::new();
        let config = test_config();

        // Nothing issued yet
        assert_eq!(session.verify(&config).await.unwrap_err(), "No token found");

        session.authenticate(&config, "admin123").await.unwrap();
        assert!(session.verify(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let session = SessionState::new();
        let config = test_config();

        let err = session.authenticate(&config, "letmein").await.unwrap_err();
        assert_eq!(err, "Invalid password");
        assert!(session.verify(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_revoke_clears_credential() {
        let session = SessionState::new();
        let config = test_config();

        session.authenticate(&config, "admin123").await.unwrap();
        assert!(session.verify(&config).await.is_ok());

        session.revoke().await;
        assert_eq!(session.verify(&config).await.unwrap_err(), "No token found");
    }

    #[tokio::test]
    async fn test_reauthenticate_replaces_credential() {
        let session = SessionState::new();
        let config = test_config();

        session.authenticate(&config, "admin123").await.unwrap();
        session.authenticate(&config, "admin123").await.unwrap();
        assert!(session.verify(&config).await.is_ok());
    }
}
