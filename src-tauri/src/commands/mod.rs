//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.
//! Mutating handlers report success/failure through OpResult and never
//! surface an Err to the caller.

mod auth_cmd;
mod stock_cmd;

pub use auth_cmd::*;
pub use stock_cmd::*;

use serde::Serialize;

/// Wire-level outcome of a fallible operation
#[derive(Debug, Clone, Serialize)]
pub struct OpResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OpResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
