//! Bearer-token persistence and identity helpers.
//!
//! The token is the only client-side persisted state, stored in browser
//! LocalStorage under one fixed key. The JWT is treated as opaque except for
//! a single read of the `sub` claim, used to hide self-targeted admin actions.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use gloo_storage::{LocalStorage, Storage};

/// LocalStorage key for the authentication token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// The stored bearer token, if any.
pub fn token() -> Option<String> {
    LocalStorage::get::<String>(AUTH_TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    if let Err(err) = LocalStorage::set(AUTH_TOKEN_KEY, token) {
        log::error!("failed to persist auth token: {err}");
    }
}

pub fn clear_token() {
    LocalStorage::delete(AUTH_TOKEN_KEY);
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

/// Clear the session and force-navigate to the login route.
///
/// Central 401 policy: executed once by the API client's unauthorized hook,
/// not per call site. No redirect when already on the login page.
pub fn force_login_redirect() {
    log::warn!("session expired, redirecting to login");
    clear_token();
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let on_login = matches!(location.pathname().as_deref(), Ok("/login"));
        if !on_login {
            let _ = location.set_href("/login");
        }
    }
}

/// Username (`sub` claim) of the currently authenticated user.
pub fn current_username() -> Option<String> {
    token().as_deref().and_then(username_from_token)
}

/// Read the `sub` claim out of a JWT without verifying it.
///
/// Verification is the backend's job; the client only needs the name for
/// display and for hiding the self-demotion button.
pub fn username_from_token(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("sub")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_jwt(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn reads_sub_claim() {
        let token = fake_jwt(&serde_json::json!({ "sub": "alice", "exp": 1735689600 }));
        assert_eq!(username_from_token(&token), Some("alice".to_string()));
    }

    #[test]
    fn missing_sub_yields_none() {
        let token = fake_jwt(&serde_json::json!({ "exp": 1735689600 }));
        assert_eq!(username_from_token(&token), None);
    }

    #[test]
    fn garbage_token_yields_none() {
        assert_eq!(username_from_token("not-a-jwt"), None);
        assert_eq!(username_from_token("a.b.c"), None);
        assert_eq!(username_from_token(""), None);
    }
}
