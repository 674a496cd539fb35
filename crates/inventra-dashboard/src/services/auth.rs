//! Authentication: login, registration and logout.

use crate::api::{Api, ApiError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::session;

/// Authenticate and persist the returned bearer token.
pub async fn login(api: &Api, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = api.post("/auth/authenticate", request).await?;
    session::store_token(&response.token);
    Ok(response)
}

/// Create an account; the backend logs the new user in, so the token is
/// stored immediately.
pub async fn register(api: &Api, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = api.post("/auth/register", request).await?;
    session::store_token(&response.token);
    Ok(response)
}

/// Drop the stored token. Purely local; the backend keeps no session state.
pub fn logout() {
    session::clear_token();
}
