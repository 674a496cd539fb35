//! Domain types mirroring the asset-management REST API.
//!
//! The list and recent-assets endpoints return assets *without* a type
//! discriminator; creation payloads carry an explicit `type` tag. Both shapes
//! are modeled faithfully here: [`Asset`] is the untagged read shape with a
//! structural [`Asset::kind`] check, the `*Request` structs are the tagged
//! write shapes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    Assigned,
    Broken,
    Repairing,
    Disposed,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 5] = [
        AssetStatus::Available,
        AssetStatus::Assigned,
        AssetStatus::Broken,
        AssetStatus::Repairing,
        AssetStatus::Disposed,
    ];

    /// Wire representation, as sent in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::Assigned => "ASSIGNED",
            AssetStatus::Broken => "BROKEN",
            AssetStatus::Repairing => "REPAIRING",
            AssetStatus::Disposed => "DISPOSED",
        }
    }

    /// Human-readable label for select options and badges.
    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Broken => "Broken",
            AssetStatus::Repairing => "Repairing",
            AssetStatus::Disposed => "Disposed",
        }
    }

    /// Parse a wire value, e.g. from a `<select>` element.
    pub fn parse(value: &str) -> Option<AssetStatus> {
        AssetStatus::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Concrete asset variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    Hardware,
    Software,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Hardware => "Hardware",
            AssetKind::Software => "Software",
        }
    }
}

/// Account role for the admin user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// The opposite role, for the promote/demote toggle.
    pub fn toggled(self) -> Role {
        match self {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        }
    }
}

/// Sort direction for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn flipped(self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

// ============================================================================
// Read shapes
// ============================================================================

/// Read-only user projection used for display and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserSummary {
    /// "username (First Last)" when names are known, plain username otherwise.
    pub fn display_name(&self) -> String {
        match (&self.firstname, &self.lastname) {
            (Some(first), Some(last)) => format!("{} ({} {})", self.username, first, last),
            _ => self.username.clone(),
        }
    }
}

/// Full user record from the admin endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: Role,
    pub enabled: bool,
}

/// Asset as returned by the list, search and recent endpoints.
///
/// The wire format carries no discriminator on reads, so variant-specific
/// fields are optional here and [`Asset::kind`] infers the variant
/// structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub purchase_price: f64,
    pub purchase_date: String,
    pub status: AssetStatus,
    pub residual_value: f64,
    pub useful_life_years: u32,
    pub created_by: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserSummary>,

    // Hardware-only fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_interval_months: Option<u32>,

    // Software-only fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl Asset {
    /// Infer the variant from the presence of `serialNumber`.
    ///
    /// Fragile by nature: the backend sends no type tag on read endpoints, so
    /// a hardware asset with a missing serial would be misclassified. The tag
    /// the creation endpoints accept is not echoed back here.
    pub fn kind(&self) -> AssetKind {
        if self.serial_number.is_some() {
            AssetKind::Hardware
        } else {
            AssetKind::Software
        }
    }

    /// The variant-specific identifier shown in list rows.
    pub fn identifier(&self) -> Option<&str> {
        self.serial_number
            .as_deref()
            .or(self.license_key.as_deref())
    }
}

/// Aggregated dashboard metrics, computed server-side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_assets: u64,
    pub total_value: f64,
    pub active_licenses: u64,
    pub available_assets: u64,
}

/// Simplified asset row for the dashboard's recent-assets table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentAsset {
    pub id: i64,
    pub name: String,
    pub kind: AssetKind,
    pub status: AssetStatus,
    pub current_value: f64,
    pub created_at: String,
}

impl From<Asset> for RecentAsset {
    fn from(asset: Asset) -> Self {
        RecentAsset {
            kind: asset.kind(),
            id: asset.id,
            name: asset.name,
            status: asset.status,
            // TODO: switch to the depreciated value once the backend exposes it
            current_value: asset.purchase_price,
            created_at: asset.created_at,
        }
    }
}

/// Standard pagination envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    /// Current page, 0-indexed.
    pub number: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

// ============================================================================
// Write shapes
// ============================================================================

/// Fields common to every asset payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFields {
    pub name: String,
    pub purchase_price: f64,
    pub purchase_date: String,
    pub status: AssetStatus,
    pub residual_value: f64,
    pub useful_life_years: u32,
}

/// Creation payload for a single hardware asset. Tagged, unlike reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareAssetRequest {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(flatten)]
    pub fields: AssetFields,
    pub serial_number: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_date: Option<String>,
}

/// Creation payload for a single software asset. Tagged, unlike reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareAssetRequest {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(flatten)]
    pub fields: AssetFields,
    pub license_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Batch hardware creation: the server generates `quantity` sequential serial
/// numbers from `serialNumberPrefix`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchHardwareRequest {
    #[serde(flatten)]
    pub fields: AssetFields,
    pub serial_number_prefix: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_date: Option<String>,
    pub quantity: u32,
}

/// Batch software creation: all `quantity` records share one license key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSoftwareRequest {
    #[serde(flatten)]
    pub fields: AssetFields,
    pub license_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub quantity: u32,
}

/// Partial update; only present fields are serialized. The caller includes
/// only fields relevant to the asset's variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub useful_life_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Assignment payload for `POST /assets/{id}/assign`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub user_id: i64,
}

/// Role change payload for `PUT /admin/users/{id}/role`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub role: Role,
}

// ============================================================================
// Search & auth shapes
// ============================================================================

/// Search, filter, sort and pagination controls for `GET /assets/search`.
///
/// Every field is optional; the service layer fills the defaults
/// (`page=0, size=10, sortBy=id, sortDir=asc`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetSearchParams {
    pub query: Option<String>,
    pub status: Option<AssetStatus>,
    pub serial_number: Option<String>,
    pub assigned_to_user_id: Option<i64>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn software_asset_json() -> serde_json::Value {
        json!({
            "id": 3,
            "name": "IntelliJ Ultimate",
            "purchasePrice": 499.0,
            "purchaseDate": "2024-02-01",
            "status": "AVAILABLE",
            "residualValue": 0.0,
            "usefulLifeYears": 1,
            "createdBy": "admin",
            "createdAt": "2024-02-01T09:30:00",
            "licenseKey": "AAAA-BBBB-CCCC"
        })
    }

    #[test]
    fn kind_inferred_from_serial_number_presence() {
        let mut hw: Asset = serde_json::from_value(software_asset_json()).unwrap();
        hw.serial_number = Some("SN-001".into());
        assert_eq!(hw.kind(), AssetKind::Hardware);

        let sw: Asset = serde_json::from_value(software_asset_json()).unwrap();
        assert_eq!(sw.kind(), AssetKind::Software);
    }

    #[test]
    fn recent_asset_maps_fields() {
        let asset: Asset = serde_json::from_value(software_asset_json()).unwrap();
        let recent = RecentAsset::from(asset);
        assert_eq!(recent.id, 3);
        assert_eq!(recent.kind, AssetKind::Software);
        assert_eq!(recent.status, AssetStatus::Available);
        assert_eq!(recent.current_value, 499.0);
    }

    #[test]
    fn status_round_trips_screaming_snake() {
        for status in AssetStatus::ALL {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, json!(status.as_str()));
            assert_eq!(AssetStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AssetStatus::parse("available"), None);
    }

    #[test]
    fn page_flags_match_number() {
        let page: Page<Asset> = serde_json::from_value(json!({
            "content": [],
            "totalPages": 4,
            "totalElements": 37,
            "size": 10,
            "number": 0,
            "first": true,
            "last": false,
            "empty": true
        }))
        .unwrap();
        assert!(page.first);
        assert_eq!(page.number, 0);
        assert!(page.content.len() <= page.size as usize);

        let last: Page<Asset> = serde_json::from_value(json!({
            "content": [],
            "totalPages": 4,
            "totalElements": 37,
            "size": 10,
            "number": 3,
            "first": false,
            "last": true,
            "empty": true
        }))
        .unwrap();
        assert!(last.last);
        assert_eq!(last.number, last.total_pages - 1);
    }

    #[test]
    fn hardware_request_is_tagged_and_camel_cased() {
        let req = HardwareAssetRequest {
            kind: AssetKind::Hardware,
            fields: AssetFields {
                name: "MacBook Pro 16".into(),
                purchase_price: 2499.0,
                purchase_date: "2024-01-15".into(),
                status: AssetStatus::Available,
                residual_value: 800.0,
                useful_life_years: 4,
            },
            serial_number: "SN-42".into(),
            location: "Office A".into(),
            warranty_date: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], "HARDWARE");
        assert_eq!(value["purchasePrice"], 2499.0);
        assert_eq!(value["serialNumber"], "SN-42");
        assert!(value.get("warrantyDate").is_none());
    }

    #[test]
    fn batch_hardware_request_shape() {
        let req = BatchHardwareRequest {
            fields: AssetFields {
                name: "Dell U2723QE".into(),
                purchase_price: 599.0,
                purchase_date: "2024-03-01".into(),
                status: AssetStatus::Available,
                residual_value: 100.0,
                useful_life_years: 5,
            },
            serial_number_prefix: "MON-".into(),
            location: "Storage".into(),
            warranty_date: None,
            quantity: 12,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["serialNumberPrefix"], "MON-");
        assert_eq!(value["quantity"], 12);
        assert_eq!(value["name"], "Dell U2723QE");
    }

    #[test]
    fn batch_software_shares_one_license_key() {
        let req = BatchSoftwareRequest {
            fields: AssetFields {
                name: "Office 365".into(),
                purchase_price: 99.0,
                purchase_date: "2024-03-01".into(),
                status: AssetStatus::Available,
                residual_value: 0.0,
                useful_life_years: 1,
            },
            license_key: "XXXX-YYYY".into(),
            expiry_date: Some("2025-03-01".into()),
            quantity: 25,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["licenseKey"], "XXXX-YYYY");
        assert_eq!(value["quantity"], 25);
        assert!(value.get("serialNumberPrefix").is_none());
    }

    #[test]
    fn update_serializes_only_present_fields() {
        let update = AssetUpdate {
            status: Some(AssetStatus::Broken),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "status": "BROKEN" }));
    }

    #[test]
    fn assign_request_uses_camel_case_user_id() {
        let value = serde_json::to_value(AssignRequest { user_id: 9 }).unwrap();
        assert_eq!(value, json!({ "userId": 9 }));
    }
}
