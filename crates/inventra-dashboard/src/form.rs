//! Form state machines for the auth screens and the add/edit asset modal.
//!
//! [`AssetForm`] backs the modal in its four modes (closed is the absence of
//! the form): create-single, create-batch and edit. Fields are kept as text
//! exactly as typed; [`AssetForm::submit_payload`] validates presence and
//! numeric shape and produces the typed request for the current mode. Cross-
//! field business rules (e.g. expiry after purchase) are deliberately not
//! enforced client-side.

use crate::models::{
    Asset, AssetFields, AssetKind, AssetStatus, AssetUpdate, BatchHardwareRequest,
    BatchSoftwareRequest, HardwareAssetRequest, LoginRequest, RegisterRequest,
    SoftwareAssetRequest,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    CreateSingle,
    CreateBatch,
    Edit(i64),
}

/// Typed request produced by a valid submit, one variant per service call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPayload {
    CreateHardware(HardwareAssetRequest),
    CreateSoftware(SoftwareAssetRequest),
    CreateBatchHardware(BatchHardwareRequest),
    CreateBatchSoftware(BatchSoftwareRequest),
    Update(i64, AssetUpdate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetForm {
    pub mode: FormMode,
    pub kind: AssetKind,
    pub name: String,
    pub purchase_price: String,
    pub purchase_date: String,
    pub status: AssetStatus,
    pub residual_value: String,
    pub useful_life_years: String,
    // Hardware
    pub serial_number: String,
    pub location: String,
    pub warranty_date: String,
    // Software
    pub license_key: String,
    pub expiry_date: String,
    // Batch
    pub serial_number_prefix: String,
    pub quantity: String,
}

impl AssetForm {
    /// Empty create-single form with sensible defaults.
    pub fn new() -> Self {
        Self {
            mode: FormMode::CreateSingle,
            kind: AssetKind::Hardware,
            name: String::new(),
            purchase_price: String::new(),
            purchase_date: String::new(),
            status: AssetStatus::Available,
            residual_value: String::new(),
            useful_life_years: String::new(),
            serial_number: String::new(),
            location: String::new(),
            warranty_date: String::new(),
            license_key: String::new(),
            expiry_date: String::new(),
            serial_number_prefix: String::new(),
            quantity: "1".to_string(),
        }
    }

    /// Edit form pre-populated from an existing asset. The variant is
    /// inferred structurally, the same way the list view does it, and is
    /// immutable afterwards.
    pub fn edit(asset: &Asset) -> Self {
        let mut form = Self::new();
        form.mode = FormMode::Edit(asset.id);
        form.kind = asset.kind();
        form.name = asset.name.clone();
        form.purchase_price = asset.purchase_price.to_string();
        form.purchase_date = asset.purchase_date.clone();
        form.status = asset.status;
        form.residual_value = asset.residual_value.to_string();
        form.useful_life_years = asset.useful_life_years.to_string();
        form.serial_number = asset.serial_number.clone().unwrap_or_default();
        form.location = asset.location.clone().unwrap_or_default();
        form.warranty_date = asset.warranty_date.clone().unwrap_or_default();
        form.license_key = asset.license_key.clone().unwrap_or_default();
        form.expiry_date = asset.expiry_date.clone().unwrap_or_default();
        form
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn is_batch(&self) -> bool {
        self.mode == FormMode::CreateBatch
    }

    /// Batch mode exists only at creation; ignored while editing.
    pub fn set_batch(&mut self, batch: bool) {
        match self.mode {
            FormMode::Edit(_) => {}
            _ => {
                self.mode = if batch {
                    FormMode::CreateBatch
                } else {
                    FormMode::CreateSingle
                };
            }
        }
    }

    /// The variant is chosen at creation and immutable once created.
    pub fn set_kind(&mut self, kind: AssetKind) {
        if !self.is_edit() {
            self.kind = kind;
        }
    }

    fn common_fields(&self) -> Result<AssetFields, FormError> {
        Ok(AssetFields {
            name: required_text(&self.name, "Name")?,
            purchase_price: required_number(&self.purchase_price, "Purchase price")?,
            purchase_date: required_text(&self.purchase_date, "Purchase date")?,
            status: self.status,
            residual_value: required_number(&self.residual_value, "Residual value")?,
            useful_life_years: required_integer(&self.useful_life_years, "Useful life")?,
        })
    }

    fn quantity(&self) -> Result<u32, FormError> {
        let quantity = required_integer(&self.quantity, "Quantity")?;
        if quantity == 0 {
            return Err(FormError::InvalidQuantity);
        }
        Ok(quantity)
    }

    /// Validate and build the request for the current mode.
    pub fn submit_payload(&self) -> Result<SubmitPayload, FormError> {
        match (self.mode, self.kind) {
            (FormMode::CreateSingle, AssetKind::Hardware) => {
                Ok(SubmitPayload::CreateHardware(HardwareAssetRequest {
                    kind: AssetKind::Hardware,
                    fields: self.common_fields()?,
                    serial_number: required_text(&self.serial_number, "Serial number")?,
                    location: required_text(&self.location, "Location")?,
                    warranty_date: optional_text(&self.warranty_date),
                }))
            }
            (FormMode::CreateSingle, AssetKind::Software) => {
                Ok(SubmitPayload::CreateSoftware(SoftwareAssetRequest {
                    kind: AssetKind::Software,
                    fields: self.common_fields()?,
                    license_key: required_text(&self.license_key, "License key")?,
                    expiry_date: optional_text(&self.expiry_date),
                }))
            }
            (FormMode::CreateBatch, AssetKind::Hardware) => {
                Ok(SubmitPayload::CreateBatchHardware(BatchHardwareRequest {
                    fields: self.common_fields()?,
                    serial_number_prefix: required_text(
                        &self.serial_number_prefix,
                        "Serial number prefix",
                    )?,
                    location: required_text(&self.location, "Location")?,
                    warranty_date: optional_text(&self.warranty_date),
                    quantity: self.quantity()?,
                }))
            }
            (FormMode::CreateBatch, AssetKind::Software) => {
                Ok(SubmitPayload::CreateBatchSoftware(BatchSoftwareRequest {
                    fields: self.common_fields()?,
                    license_key: required_text(&self.license_key, "License key")?,
                    expiry_date: optional_text(&self.expiry_date),
                    quantity: self.quantity()?,
                }))
            }
            (FormMode::Edit(id), kind) => {
                let fields = self.common_fields()?;
                let mut update = AssetUpdate {
                    name: Some(fields.name),
                    purchase_price: Some(fields.purchase_price),
                    purchase_date: Some(fields.purchase_date),
                    status: Some(fields.status),
                    residual_value: Some(fields.residual_value),
                    useful_life_years: Some(fields.useful_life_years),
                    ..Default::default()
                };
                // Only fields relevant to the asset's variant go out.
                match kind {
                    AssetKind::Hardware => {
                        update.serial_number =
                            Some(required_text(&self.serial_number, "Serial number")?);
                        update.location = Some(required_text(&self.location, "Location")?);
                        update.warranty_date = optional_text(&self.warranty_date);
                    }
                    AssetKind::Software => {
                        update.license_key =
                            Some(required_text(&self.license_key, "License key")?);
                        update.expiry_date = optional_text(&self.expiry_date);
                    }
                }
                Ok(SubmitPayload::Update(id, update))
            }
        }
    }
}

impl Default for AssetForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-side presence check for the login form; no HTTP call is made when
/// it fails.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, FormError> {
    Ok(LoginRequest {
        username: required_text(username, "Username")?,
        password: required_text(password, "Password")?,
    })
}

pub fn validate_register(
    firstname: &str,
    lastname: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, FormError> {
    Ok(RegisterRequest {
        firstname: required_text(firstname, "First name")?,
        lastname: required_text(lastname, "Last name")?,
        username: required_text(username, "Username")?,
        email: required_text(email, "Email")?,
        password: required_text(password, "Password")?,
    })
}

fn required_text(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required_number(value: &str, field: &'static str) -> Result<f64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber(field))
}

fn required_integer(value: &str, field: &'static str) -> Result<u32, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| FormError::InvalidNumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AssetForm {
        let mut form = AssetForm::new();
        form.name = "MacBook Pro 16".into();
        form.purchase_price = "2499".into();
        form.purchase_date = "2024-01-15".into();
        form.residual_value = "800".into();
        form.useful_life_years = "4".into();
        form.serial_number = "SN-42".into();
        form.location = "Office A".into();
        form.license_key = "AAAA-BBBB".into();
        form
    }

    fn hardware_asset() -> Asset {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "ThinkPad X1",
            "purchasePrice": 1899.0,
            "purchaseDate": "2023-06-01",
            "status": "AVAILABLE",
            "residualValue": 500.0,
            "usefulLifeYears": 4,
            "createdBy": "admin",
            "createdAt": "2023-06-01T12:00:00",
            "serialNumber": "TP-X1-001",
            "location": "Office B"
        }))
        .unwrap()
    }

    #[test]
    fn single_hardware_payload_carries_variant_fields() {
        let form = filled_form();
        match form.submit_payload().unwrap() {
            SubmitPayload::CreateHardware(req) => {
                assert_eq!(req.kind, AssetKind::Hardware);
                assert_eq!(req.serial_number, "SN-42");
                assert_eq!(req.location, "Office A");
                assert_eq!(req.fields.purchase_price, 2499.0);
            }
            other => panic!("expected CreateHardware, got {other:?}"),
        }
    }

    #[test]
    fn single_software_payload_carries_license_key() {
        let mut form = filled_form();
        form.set_kind(AssetKind::Software);
        match form.submit_payload().unwrap() {
            SubmitPayload::CreateSoftware(req) => {
                assert_eq!(req.kind, AssetKind::Software);
                assert_eq!(req.license_key, "AAAA-BBBB");
                assert_eq!(req.expiry_date, None);
            }
            other => panic!("expected CreateSoftware, got {other:?}"),
        }
    }

    #[test]
    fn batch_hardware_sends_prefix_and_quantity() {
        let mut form = filled_form();
        form.set_batch(true);
        form.serial_number_prefix = "LT-2024-".into();
        form.quantity = "8".into();
        match form.submit_payload().unwrap() {
            SubmitPayload::CreateBatchHardware(req) => {
                assert_eq!(req.serial_number_prefix, "LT-2024-");
                assert_eq!(req.quantity, 8);
            }
            other => panic!("expected CreateBatchHardware, got {other:?}"),
        }
    }

    #[test]
    fn batch_software_shares_license_key_across_quantity() {
        let mut form = filled_form();
        form.set_kind(AssetKind::Software);
        form.set_batch(true);
        form.quantity = "25".into();
        match form.submit_payload().unwrap() {
            SubmitPayload::CreateBatchSoftware(req) => {
                assert_eq!(req.license_key, "AAAA-BBBB");
                assert_eq!(req.quantity, 25);
            }
            other => panic!("expected CreateBatchSoftware, got {other:?}"),
        }
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut form = filled_form();
        form.set_batch(true);
        form.serial_number_prefix = "LT-".into();
        form.quantity = "0".into();
        assert_eq!(form.submit_payload(), Err(FormError::InvalidQuantity));
    }

    #[test]
    fn missing_serial_number_names_the_field() {
        let mut form = filled_form();
        form.serial_number.clear();
        assert_eq!(
            form.submit_payload(),
            Err(FormError::Missing("Serial number"))
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut form = filled_form();
        form.purchase_price = "a lot".into();
        assert_eq!(
            form.submit_payload(),
            Err(FormError::InvalidNumber("Purchase price"))
        );
    }

    #[test]
    fn edit_prepopulates_and_infers_kind() {
        let form = AssetForm::edit(&hardware_asset());
        assert_eq!(form.mode, FormMode::Edit(7));
        assert_eq!(form.kind, AssetKind::Hardware);
        assert_eq!(form.name, "ThinkPad X1");
        assert_eq!(form.serial_number, "TP-X1-001");
    }

    #[test]
    fn edit_update_carries_only_variant_relevant_fields() {
        let mut form = AssetForm::edit(&hardware_asset());
        form.status = AssetStatus::Broken;
        match form.submit_payload().unwrap() {
            SubmitPayload::Update(id, update) => {
                assert_eq!(id, 7);
                assert_eq!(update.status, Some(AssetStatus::Broken));
                assert_eq!(update.serial_number.as_deref(), Some("TP-X1-001"));
                assert_eq!(update.location.as_deref(), Some("Office B"));
                assert_eq!(update.license_key, None);
                assert_eq!(update.expiry_date, None);
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn batch_toggle_is_ignored_while_editing() {
        let mut form = AssetForm::edit(&hardware_asset());
        form.set_batch(true);
        assert_eq!(form.mode, FormMode::Edit(7));
        assert!(!form.is_batch());
    }

    #[test]
    fn kind_is_immutable_while_editing() {
        let mut form = AssetForm::edit(&hardware_asset());
        form.set_kind(AssetKind::Software);
        assert_eq!(form.kind, AssetKind::Hardware);
    }

    #[test]
    fn empty_password_fails_login_validation() {
        assert_eq!(
            validate_login("alice", ""),
            Err(FormError::Missing("Password"))
        );
        assert!(validate_login("alice", "secret").is_ok());
    }

    #[test]
    fn register_requires_every_field() {
        assert_eq!(
            validate_register("Ada", "Lovelace", "ada", "", "pw"),
            Err(FormError::Missing("Email"))
        );
        assert!(validate_register("Ada", "Lovelace", "ada", "ada@example.com", "pw").is_ok());
    }
}
