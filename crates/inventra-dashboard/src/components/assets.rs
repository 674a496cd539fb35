//! Asset list page: debounced search, status filter, sortable columns,
//! pagination and the row actions that open the edit/assign modals.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::*;

use super::asset_modal::AssetModal;
use super::assign_modal::AssignModal;
use super::icons::{EditIcon, PlusIcon, TrashIcon, UserPlusIcon};
use super::primitives::{
    EmptyState, KindBadge, LoadingSpinner, SearchInput, StatusBadge,
};
use crate::api::Api;
use crate::form::AssetForm;
use crate::models::{Asset, AssetStatus, Page, SortDir};
use crate::query::{AssetQuery, SEARCH_DEBOUNCE_MS};
use crate::services::asset;
use crate::state::{format_currency, StatsState, Toasts};

#[component]
pub fn AssetsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let stats = expect_context::<StatsState>();
    let toasts = expect_context::<Toasts>();

    let query = create_rw_signal(AssetQuery::default());
    let page = create_rw_signal(Option::<Page<Asset>>::None);
    let is_loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);

    // None = closed; Some(form) drives the add/edit modal.
    let modal_form = create_rw_signal(Option::<AssetForm>::None);
    let assign_target = create_rw_signal(Option::<Asset>::None);

    let fetch_now = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            let params = query.with_untracked(AssetQuery::to_params);
            is_loading.set(true);
            spawn_local(async move {
                match asset::search_assets(&api, &params).await {
                    Ok(result) => {
                        page.set(Some(result));
                        error.set(None);
                    }
                    Err(err) => {
                        log::error!("asset search failed: {err}");
                        error.set(Some("Failed to load assets".to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    // One re-armed timer covers every query-state change; the first run
    // fetches immediately so the page is not blank for the debounce window.
    let debounce = store_value(Option::<TimeoutHandle>::None);
    create_effect(move |prev: Option<()>| {
        query.track();
        if prev.is_none() {
            fetch_now.call(());
            return;
        }
        if let Some(handle) = debounce.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || fetch_now.call(()),
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        )
        .ok();
        debounce.set_value(handle);
    });

    // An armed timer must not outlive the page: firing after navigation
    // would call into a disposed reactive scope.
    on_cleanup(move || {
        if let Some(handle) = debounce.get_value() {
            handle.clear();
        }
        debounce.set_value(None);
    });

    // Mutations refresh both the list and the shared dashboard data.
    let refresh_all = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            fetch_now.call(());
            stats.refetch(&api);
        })
    };

    let delete_asset = {
        let api = api.clone();
        Callback::new(move |asset: Asset| {
            let prompt = format!("Delete asset \"{}\"?", asset.name);
            if !gloo_dialogs::confirm(&prompt) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match asset::delete(&api, asset.id).await {
                    Ok(()) => {
                        toasts.success("Asset deleted");
                        refresh_all.call(());
                    }
                    Err(err) => {
                        log::error!("delete failed: {err}");
                        toasts.error("Failed to delete asset");
                    }
                }
            });
        })
    };

    let on_status_change = move |ev: ev::Event| {
        let status = AssetStatus::parse(&event_target_value(&ev));
        query.update(|q| q.set_status(status));
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Assets"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| modal_form.set(Some(AssetForm::new()))
                >
                    <PlusIcon/>
                    "Add Asset"
                </button>
            </div>

            <div class="toolbar">
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.query.clone()))
                    on_input=move |value: String| query.update(|q| q.set_query(value))
                    placeholder="Search by name or serial number..."
                />
                <select class="select" on:change=on_status_change aria-label="Filter by status">
                    <option value="">"All Statuses"</option>
                    {AssetStatus::ALL
                        .into_iter()
                        .map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="form-error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !(is_loading.get() && page.with(Option::is_none))
                fallback=|| view! { <LoadingSpinner message="Loading assets..."/> }
            >
                <AssetTable
                    query=query
                    page=page
                    on_edit=Callback::new(move |asset: Asset| {
                        modal_form.set(Some(AssetForm::edit(&asset)));
                    })
                    on_assign=Callback::new(move |asset: Asset| assign_target.set(Some(asset)))
                    on_delete=delete_asset
                />
                <Pagination query=query page=page/>
            </Show>

            {move || modal_form.get().map(|form| view! {
                <AssetModal
                    form=form
                    on_close=Callback::new(move |_| modal_form.set(None))
                    on_saved=Callback::new(move |_| {
                        modal_form.set(None);
                        refresh_all.call(());
                    })
                />
            })}

            {move || assign_target.get().map(|target| view! {
                <AssignModal
                    asset=target
                    on_close=Callback::new(move |_| assign_target.set(None))
                    on_assigned=Callback::new(move |_| {
                        assign_target.set(None);
                        refresh_all.call(());
                    })
                />
            })}
        </div>
    }
}

#[component]
fn AssetTable(
    query: RwSignal<AssetQuery>,
    page: RwSignal<Option<Page<Asset>>>,
    on_edit: Callback<Asset>,
    on_assign: Callback<Asset>,
    on_delete: Callback<Asset>,
) -> impl IntoView {
    let rows = move || page.get().map(|p| p.content).unwrap_or_default();
    let is_empty = move || page.with(|p| p.as_ref().map(|p| p.empty).unwrap_or(true));

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No assets found"
                    description="Try a different search or add your first asset."
                />
            }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader query=query column="name" label="Name"/>
                        <th>"Type"</th>
                        <SortHeader query=query column="status" label="Status"/>
                        <SortHeader query=query column="purchasePrice" label="Price"/>
                        <SortHeader query=query column="purchaseDate" label="Purchased"/>
                        <th>"Identifier"</th>
                        <th>"Assigned To"</th>
                        <th class="cell-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|asset| asset.id
                        children=move |asset: Asset| {
                            view! {
                                <AssetRow
                                    asset=asset
                                    on_edit=on_edit
                                    on_assign=on_assign
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn AssetRow(
    asset: Asset,
    on_edit: Callback<Asset>,
    on_assign: Callback<Asset>,
    on_delete: Callback<Asset>,
) -> impl IntoView {
    let identifier = asset.identifier().unwrap_or("-").to_string();
    let assigned_to = asset
        .assigned_to
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_else(|| "-".to_string());
    let can_assign = asset.status == AssetStatus::Available;

    let edit_target = asset.clone();
    let assign_target = asset.clone();
    let delete_target = asset.clone();

    view! {
        <tr>
            <td class="cell-name">{asset.name.clone()}</td>
            <td><KindBadge kind=asset.kind()/></td>
            <td><StatusBadge status=asset.status/></td>
            <td>{format_currency(asset.purchase_price)}</td>
            <td class="cell-muted">{asset.purchase_date.clone()}</td>
            <td class="cell-mono">{identifier}</td>
            <td>{assigned_to}</td>
            <td class="cell-right">
                <div class="row-actions">
                    <button
                        class="btn btn-icon"
                        title="Edit"
                        on:click=move |_| on_edit.call(edit_target.clone())
                    >
                        <EditIcon/>
                    </button>
                    <Show when=move || can_assign>
                        {
                            let assign_target = assign_target.clone();
                            view! {
                                <button
                                    class="btn btn-icon"
                                    title="Assign"
                                    on:click=move |_| on_assign.call(assign_target.clone())
                                >
                                    <UserPlusIcon/>
                                </button>
                            }
                        }
                    </Show>
                    <button
                        class="btn btn-icon btn-danger"
                        title="Delete"
                        on:click=move |_| on_delete.call(delete_target.clone())
                    >
                        <TrashIcon/>
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn SortHeader(
    query: RwSignal<AssetQuery>,
    column: &'static str,
    label: &'static str,
) -> impl IntoView {
    let indicator = move || {
        query.with(|q| match q.sort_indicator(column) {
            Some(SortDir::Asc) => " \u{25B2}",
            Some(SortDir::Desc) => " \u{25BC}",
            None => "",
        })
    };

    view! {
        <th
            class="sortable"
            role="button"
            on:click=move |_| query.update(|q| q.toggle_sort(column))
        >
            {label}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}

#[component]
fn Pagination(
    query: RwSignal<AssetQuery>,
    page: RwSignal<Option<Page<Asset>>>,
) -> impl IntoView {
    let summary = move || {
        page.with(|p| {
            p.as_ref()
                .map(|p| {
                    format!(
                        "Page {} of {} ({} assets)",
                        p.number + 1,
                        p.total_pages.max(1),
                        p.total_elements
                    )
                })
                .unwrap_or_default()
        })
    };
    let at_first = move || page.with(|p| p.as_ref().map(|p| p.first).unwrap_or(true));
    let at_last = move || page.with(|p| p.as_ref().map(|p| p.last).unwrap_or(true));

    view! {
        <div class="pagination">
            <span class="pagination-summary">{summary}</span>
            <div class="pagination-controls">
                <button
                    class="btn"
                    disabled=at_first
                    on:click=move |_| query.update(|q| {
                        let page = q.page.saturating_sub(1);
                        q.set_page(page);
                    })
                >
                    "Previous"
                </button>
                <button
                    class="btn"
                    disabled=at_last
                    on:click=move |_| query.update(|q| q.set_page(q.page + 1))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
