//! Environment Configuration
//!
//! Read once at startup and managed as Tauri state. Development defaults
//! match a fresh checkout; production deployments must set both variables.

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin password checked on login
    pub admin_password: String,
    /// Secret behind the credential signing key
    pub session_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            admin_password: std::env::var("STOCKDESK_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
            session_secret: std::env::var("STOCKDESK_SESSION_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
        }
    }
}
