//! Route guard for the admin area.
//!
//! The guard only checks that a credential marker is present; it never
//! validates the credential itself. Real validation happens when the
//! dashboard mounts and asks the backend to verify the session, so a
//! stale marker gets through the guard and is then bounced to login.

use wasm_bindgen::JsValue;

const TOKEN_KEY: &str = "admin-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AdminLogin,
    Admin,
}

/// Where a navigation request actually lands.
///
/// `/admin` without a credential marker redirects to the login page.
/// Everything else passes through, including `/admin/login` with a
/// marker present, so a stale marker can still reach the login form.
pub fn resolve(requested: Route, credential_present: bool) -> Route {
    match requested {
        Route::Admin if !credential_present => Route::AdminLogin,
        other => other,
    }
}

fn local_storage() -> Result<web_sys::Storage, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("no localStorage"))
}

pub fn credential_present() -> bool {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .is_some()
}

pub fn remember_credential(token: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_credential() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_without_credential_redirects_to_login() {
        assert_eq!(resolve(Route::Admin, false), Route::AdminLogin);
    }

    #[test]
    fn test_admin_with_credential_passes() {
        assert_eq!(resolve(Route::Admin, true), Route::Admin);
    }

    #[test]
    fn test_login_page_reachable_with_stale_marker() {
        assert_eq!(resolve(Route::AdminLogin, true), Route::AdminLogin);
        assert_eq!(resolve(Route::AdminLogin, false), Route::AdminLogin);
    }

    #[test]
    fn test_home_is_public() {
        assert_eq!(resolve(Route::Home, false), Route::Home);
        assert_eq!(resolve(Route::Home, true), Route::Home);
    }
}
