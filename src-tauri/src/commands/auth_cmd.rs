//! Tauri Commands for Admin Session
//!
//! Login issues the signed credential, verify gates the admin dashboard,
//! logout revokes. All three answer with OpResult.

use tauri::State;

use super::OpResult;
use crate::AppState;

/// Check the admin password and open a session
#[tauri::command]
pub async fn login_admin(state: State<'_, AppState>, password: String) -> Result<OpResult, String> {
    match state.session.authenticate(&state.config, &password).await {
        Ok(()) => {
            log::info!("Admin session opened");
            Ok(OpResult::ok())
        }
        Err(e) => Ok(OpResult::fail(e)),
    }
}

/// Verify the current session credential
#[tauri::command]
pub async fn verify_admin(state: State<'_, AppState>) -> Result<OpResult, String> {
    match state.session.verify(&state.config).await {
        Ok(()) => Ok(OpResult::ok()),
        Err(e) => Ok(OpResult::fail(e)),
    }
}

/// Revoke the current session credential. Always succeeds.
#[tauri::command]
pub async fn logout_admin(state: State<'_, AppState>) -> Result<OpResult, String> {
    state.session.revoke().await;
    log::info!("Admin session closed");
    Ok(OpResult::ok())
}
