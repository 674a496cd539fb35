//! General user operations.

use crate::api::{Api, ApiError};
use crate::models::UserSummary;

/// Summary list of all users, used to populate the assignment dropdown.
pub async fn list(api: &Api) -> Result<Vec<UserSummary>, ApiError> {
    api.get("/users").await
}
