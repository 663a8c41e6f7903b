//! Auth Layer
//!
//! Signed, time-limited admin credential and the session state that
//! issues, verifies and revokes it.

mod session;
mod token;

pub use session::SessionState;
pub use token::{issue, verify, Claims, TokenError, TOKEN_TTL_MS};
