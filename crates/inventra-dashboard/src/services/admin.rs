//! Administrative user management. All endpoints are admin-only; a 403 from
//! any of them is surfaced to the page as an access-denied state.

use crate::api::{Api, ApiError};
use crate::models::{Role, RoleUpdate, UserAccount};

pub async fn list_users(api: &Api) -> Result<Vec<UserAccount>, ApiError> {
    api.get("/admin/users").await
}

pub async fn update_role(api: &Api, id: i64, role: Role) -> Result<UserAccount, ApiError> {
    api.put(&format!("/admin/users/{id}/role"), &RoleUpdate { role })
        .await
}

/// Enable or disable an account. The flag travels as a query parameter; the
/// body is empty. The backend owns the self-disable guard and answers 409.
pub async fn update_status(api: &Api, id: i64, enabled: bool) -> Result<UserAccount, ApiError> {
    let pairs = [("enabled", enabled.to_string())];
    api.put_with_query(&format!("/admin/users/{id}/status"), &pairs)
        .await
}
