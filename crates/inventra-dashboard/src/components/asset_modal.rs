//! Add/edit asset modal.
//!
//! The same dialog serves create-single, create-batch and edit. The variant
//! selector and the batch toggle only exist at creation; editing keeps the
//! asset's variant fixed. A failed submit keeps the dialog open with the
//! typed values intact.

use leptos::*;

use super::primitives::{Modal, TextField};
use crate::api::Api;
use crate::form::{AssetForm, SubmitPayload};
use crate::models::{AssetKind, AssetStatus};
use crate::services::asset;
use crate::state::Toasts;

#[component]
pub fn AssetModal(
    form: AssetForm,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<Toasts>();

    let is_edit = form.is_edit();
    let title = if is_edit { "Edit Asset" } else { "Add Asset" };

    let state = create_rw_signal(form);
    let error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match state.with_untracked(AssetForm::submit_payload) {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        let api = api.clone();
        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match payload {
                SubmitPayload::CreateHardware(request) => {
                    asset::create_hardware(&api, &request).await.map(|_| "Asset created")
                }
                SubmitPayload::CreateSoftware(request) => {
                    asset::create_software(&api, &request).await.map(|_| "Asset created")
                }
                SubmitPayload::CreateBatchHardware(request) => {
                    asset::create_batch_hardware(&api, &request)
                        .await
                        .map(|_| "Batch created")
                }
                SubmitPayload::CreateBatchSoftware(request) => {
                    asset::create_batch_software(&api, &request)
                        .await
                        .map(|_| "Batch created")
                }
                SubmitPayload::Update(id, update) => {
                    asset::update(&api, id, &update).await.map(|_| "Asset updated")
                }
            };
            match result {
                Ok(message) => {
                    toasts.success(message);
                    on_saved.call(());
                }
                Err(err) => {
                    log::error!("asset save failed: {err}");
                    let message = err
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Failed to save asset".to_string());
                    error.set(Some(message));
                }
            }
            submitting.set(false);
        });
    };

    let kind = move || state.with(|f| f.kind);
    let is_batch = move || state.with(AssetForm::is_batch);

    let on_kind_change = move |ev: ev::Event| {
        let kind = if event_target_value(&ev) == "SOFTWARE" {
            AssetKind::Software
        } else {
            AssetKind::Hardware
        };
        state.update(|f| f.set_kind(kind));
    };

    let on_status_change = move |ev: ev::Event| {
        if let Some(status) = AssetStatus::parse(&event_target_value(&ev)) {
            state.update(|f| f.status = status);
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <Show when=move || error.get().is_some()>
                    <div class="form-error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show when=move || !is_edit>
                    <div class="form-row">
                        <div class="form-field">
                            <label class="form-label">"Type"</label>
                            <select class="select" on:change=on_kind_change>
                                <option value="HARDWARE" selected=move || kind() == AssetKind::Hardware>
                                    "Hardware"
                                </option>
                                <option value="SOFTWARE" selected=move || kind() == AssetKind::Software>
                                    "Software"
                                </option>
                            </select>
                        </div>
                        <label class="form-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=is_batch
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|f| f.set_batch(checked));
                                }
                            />
                            "Create a batch"
                        </label>
                    </div>
                </Show>

                <TextField
                    label="Name"
                    value=Signal::derive(move || state.with(|f| f.name.clone()))
                    on_input=move |v| state.update(|f| f.name = v)
                    required=true
                />

                <div class="form-row">
                    <TextField
                        label="Purchase price"
                        value=Signal::derive(move || state.with(|f| f.purchase_price.clone()))
                        on_input=move |v| state.update(|f| f.purchase_price = v)
                        input_type="number"
                        required=true
                    />
                    <TextField
                        label="Purchase date"
                        value=Signal::derive(move || state.with(|f| f.purchase_date.clone()))
                        on_input=move |v| state.update(|f| f.purchase_date = v)
                        input_type="date"
                        required=true
                    />
                </div>

                <div class="form-row">
                    <TextField
                        label="Residual value"
                        value=Signal::derive(move || state.with(|f| f.residual_value.clone()))
                        on_input=move |v| state.update(|f| f.residual_value = v)
                        input_type="number"
                        required=true
                    />
                    <TextField
                        label="Useful life (years)"
                        value=Signal::derive(move || state.with(|f| f.useful_life_years.clone()))
                        on_input=move |v| state.update(|f| f.useful_life_years = v)
                        input_type="number"
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label class="form-label">"Status"</label>
                    <select class="select" on:change=on_status_change>
                        {AssetStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option
                                    value=status.as_str()
                                    selected=move || state.with(|f| f.status == status)
                                >
                                    {status.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <Show when=move || kind() == AssetKind::Hardware>
                    <Show
                        when=is_batch
                        fallback=move || view! {
                            <TextField
                                label="Serial number"
                                value=Signal::derive(move || state.with(|f| f.serial_number.clone()))
                                on_input=move |v| state.update(|f| f.serial_number = v)
                                required=true
                            />
                        }
                    >
                        <TextField
                            label="Serial number prefix"
                            value=Signal::derive(move || {
                                state.with(|f| f.serial_number_prefix.clone())
                            })
                            on_input=move |v| state.update(|f| f.serial_number_prefix = v)
                            placeholder="e.g. LT-2024-"
                            required=true
                        />
                    </Show>
                    <div class="form-row">
                        <TextField
                            label="Location"
                            value=Signal::derive(move || state.with(|f| f.location.clone()))
                            on_input=move |v| state.update(|f| f.location = v)
                            required=true
                        />
                        <TextField
                            label="Warranty until"
                            value=Signal::derive(move || state.with(|f| f.warranty_date.clone()))
                            on_input=move |v| state.update(|f| f.warranty_date = v)
                            input_type="date"
                        />
                    </div>
                </Show>

                <Show when=move || kind() == AssetKind::Software>
                    <TextField
                        label="License key"
                        value=Signal::derive(move || state.with(|f| f.license_key.clone()))
                        on_input=move |v| state.update(|f| f.license_key = v)
                        required=true
                    />
                    <TextField
                        label="Expires on"
                        value=Signal::derive(move || state.with(|f| f.expiry_date.clone()))
                        on_input=move |v| state.update(|f| f.expiry_date = v)
                        input_type="date"
                    />
                </Show>

                <Show when=is_batch>
                    <TextField
                        label="Quantity"
                        value=Signal::derive(move || state.with(|f| f.quantity.clone()))
                        on_input=move |v| state.update(|f| f.quantity = v)
                        input_type="number"
                        required=true
                    />
                </Show>

                <div class="modal-actions">
                    <button type="button" class="btn" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if is_edit {
                                "Save Changes"
                            } else {
                                "Create"
                            }
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
