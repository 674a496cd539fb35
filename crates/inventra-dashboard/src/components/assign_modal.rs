//! Assign-asset modal: pick a user from the summary list and hand the asset
//! over. The status transition happens server-side.

use leptos::*;

use super::primitives::{LoadingSpinner, Modal};
use crate::api::Api;
use crate::models::{Asset, UserSummary};
use crate::services::{asset, user};
use crate::state::Toasts;

#[component]
pub fn AssignModal(
    asset: Asset,
    on_close: Callback<()>,
    on_assigned: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<Toasts>();

    let asset_id = asset.id;
    let asset_name = asset.name.clone();

    let users = create_rw_signal(Vec::<UserSummary>::new());
    let is_loading = create_rw_signal(true);
    let selected = create_rw_signal(Option::<i64>::None);
    let error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    {
        let api = api.clone();
        spawn_local(async move {
            match user::list(&api).await {
                Ok(list) => users.set(list),
                Err(err) => {
                    log::error!("user list failed: {err}");
                    error.set(Some("Failed to load users".to_string()));
                }
            }
            is_loading.set(false);
        });
    }

    let on_select = move |ev: ev::Event| {
        selected.set(event_target_value(&ev).parse::<i64>().ok());
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = selected.get_untracked() else {
            return;
        };
        let api = api.clone();
        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            match asset::assign(&api, asset_id, user_id).await {
                Ok(_) => {
                    toasts.success("Asset assigned");
                    on_assigned.call(());
                }
                Err(err) => {
                    log::error!("assign failed: {err}");
                    let message = err
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Failed to assign asset".to_string());
                    error.set(Some(message));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Modal title=format!("Assign \"{asset_name}\"") on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <Show when=move || error.get().is_some()>
                    <div class="form-error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading users..."/> }
                >
                    <div class="form-field">
                        <label class="form-label">"Assign to"</label>
                        <select class="select" on:change=on_select aria-label="Assign to user">
                            <option value="" selected=move || selected.get().is_none()>
                                "Select a user..."
                            </option>
                            <For
                                each=move || users.get()
                                key=|user| user.id
                                children=move |user: UserSummary| {
                                    let label = user.display_name();
                                    view! {
                                        <option value=user.id.to_string()>{label}</option>
                                    }
                                }
                            />
                        </select>
                    </div>
                </Show>

                <div class="modal-actions">
                    <button type="button" class="btn" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || selected.get().is_none() || submitting.get()
                    >
                        {move || if submitting.get() { "Assigning..." } else { "Assign" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
