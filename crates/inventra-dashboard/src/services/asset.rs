//! Asset operations: stats, listing, search, creation, update, deletion and
//! assignment.

use crate::api::{Api, ApiError};
use crate::models::{
    AssetSearchParams, AssetUpdate, AssignRequest, Asset, BatchHardwareRequest,
    BatchSoftwareRequest, DashboardStats, HardwareAssetRequest, Page, RecentAsset, SortDir,
    SoftwareAssetRequest,
};
use crate::query::DEFAULT_PAGE_SIZE;

/// Dashboard aggregates, computed server-side.
pub async fn get_stats(api: &Api) -> Result<DashboardStats, ApiError> {
    api.get("/assets/stats").await
}

/// Most recently added assets, mapped to the simplified display shape.
///
/// This endpoint sends no type tag, so the variant is inferred structurally
/// inside [`RecentAsset::from`].
pub async fn get_recent_assets(api: &Api) -> Result<Vec<RecentAsset>, ApiError> {
    let assets: Vec<Asset> = api.get("/assets/recent").await?;
    Ok(assets.into_iter().map(RecentAsset::from).collect())
}

/// Plain paginated listing without filters.
pub async fn get_assets(api: &Api, page: u32, size: u32) -> Result<Page<Asset>, ApiError> {
    let pairs = [("page", page.to_string()), ("size", size.to_string())];
    api.get_with_query("/assets", &pairs).await
}

/// Filtered, sorted, paginated search. Defaults for omitted controls are
/// owned here, not by the backend.
pub async fn search_assets(
    api: &Api,
    params: &AssetSearchParams,
) -> Result<Page<Asset>, ApiError> {
    api.get_with_query("/assets/search", &search_pairs(params))
        .await
}

/// Query pairs for the search endpoint, with the default-query contract
/// (`page=0, size=10, sortBy=id, sortDir=asc`) filled in.
pub fn search_pairs(params: &AssetSearchParams) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(8);
    if let Some(query) = params.query.as_deref().filter(|q| !q.is_empty()) {
        pairs.push(("query", query.to_string()));
    }
    if let Some(status) = params.status {
        pairs.push(("status", status.as_str().to_string()));
    }
    if let Some(serial) = params.serial_number.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("serialNumber", serial.to_string()));
    }
    if let Some(user_id) = params.assigned_to_user_id {
        pairs.push(("assignedToUserId", user_id.to_string()));
    }
    pairs.push(("page", params.page.unwrap_or(0).to_string()));
    pairs.push(("size", params.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()));
    pairs.push((
        "sortBy",
        params.sort_by.clone().unwrap_or_else(|| "id".to_string()),
    ));
    pairs.push((
        "sortDir",
        params.sort_dir.unwrap_or(SortDir::Asc).as_str().to_string(),
    ));
    pairs
}

pub async fn create_hardware(
    api: &Api,
    request: &HardwareAssetRequest,
) -> Result<Asset, ApiError> {
    api.post("/assets/hardware", request).await
}

pub async fn create_software(
    api: &Api,
    request: &SoftwareAssetRequest,
) -> Result<Asset, ApiError> {
    api.post("/assets/software", request).await
}

pub async fn create_batch_hardware(
    api: &Api,
    request: &BatchHardwareRequest,
) -> Result<Vec<Asset>, ApiError> {
    api.post("/assets/batch/hardware", request).await
}

pub async fn create_batch_software(
    api: &Api,
    request: &BatchSoftwareRequest,
) -> Result<Vec<Asset>, ApiError> {
    api.post("/assets/batch/software", request).await
}

/// Partial update; the caller includes only fields relevant to the variant.
pub async fn update(api: &Api, id: i64, update: &AssetUpdate) -> Result<Asset, ApiError> {
    api.put(&format!("/assets/{id}"), update).await
}

/// Soft delete server-side; an ordinary success/failure call here.
pub async fn delete(api: &Api, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/assets/{id}")).await
}

/// Assign to a user. The status transition to ASSIGNED happens server-side;
/// the returned asset reflects it.
pub async fn assign(api: &Api, asset_id: i64, user_id: i64) -> Result<Asset, ApiError> {
    api.post(&format!("/assets/{asset_id}/assign"), &AssignRequest { user_id })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetStatus;

    fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn defaults_fill_omitted_controls() {
        let pairs = search_pairs(&AssetSearchParams::default());
        assert_eq!(pair(&pairs, "page"), Some("0"));
        assert_eq!(pair(&pairs, "size"), Some("10"));
        assert_eq!(pair(&pairs, "sortBy"), Some("id"));
        assert_eq!(pair(&pairs, "sortDir"), Some("asc"));
        assert_eq!(pair(&pairs, "query"), None);
        assert_eq!(pair(&pairs, "status"), None);
    }

    #[test]
    fn explicit_controls_override_defaults() {
        let params = AssetSearchParams {
            query: Some("macbook".into()),
            status: Some(AssetStatus::Assigned),
            serial_number: Some("SN-1".into()),
            assigned_to_user_id: Some(4),
            page: Some(2),
            size: Some(25),
            sort_by: Some("name".into()),
            sort_dir: Some(SortDir::Desc),
        };
        let pairs = search_pairs(&params);
        assert_eq!(pair(&pairs, "query"), Some("macbook"));
        assert_eq!(pair(&pairs, "status"), Some("ASSIGNED"));
        assert_eq!(pair(&pairs, "serialNumber"), Some("SN-1"));
        assert_eq!(pair(&pairs, "assignedToUserId"), Some("4"));
        assert_eq!(pair(&pairs, "page"), Some("2"));
        assert_eq!(pair(&pairs, "size"), Some("25"));
        assert_eq!(pair(&pairs, "sortBy"), Some("name"));
        assert_eq!(pair(&pairs, "sortDir"), Some("desc"));
    }

    #[test]
    fn empty_query_is_dropped() {
        let params = AssetSearchParams {
            query: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(pair(&search_pairs(&params), "query"), None);
    }
}
