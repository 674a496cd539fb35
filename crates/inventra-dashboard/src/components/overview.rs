//! Dashboard overview page: aggregate stat cards and the recently added
//! assets table. Data comes from the shared [`StatsState`] so a mutation on
//! the assets page is reflected here without another fetch.

use leptos::*;

use super::icons::{BoxIcon, CheckCircleIcon, CurrencyIcon, KeyIcon};
use super::primitives::{
    EmptyState, ErrorState, KindBadge, LoadingSpinner, StatCard, StatusBadge,
};
use crate::api::Api;
use crate::models::RecentAsset;
use crate::state::{format_currency, format_number, StatsState};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let state = expect_context::<StatsState>();

    let retry = {
        let api = api.clone();
        Callback::new(move |_| state.refetch(&api))
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Dashboard"</h1>
            </div>

            <Show
                when=move || !state.is_loading.get()
                fallback=|| view! { <LoadingSpinner message="Loading dashboard..."/> }
            >
                {move || state.error.get().map(|message| view! {
                    <ErrorState message=message retry=retry/>
                })}
                <Show when=move || state.error.get().is_none()>
                    <StatGrid/>
                    <RecentAssets/>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn StatGrid() -> impl IntoView {
    let state = expect_context::<StatsState>();

    let total_assets = Signal::derive(move || {
        state
            .stats
            .get()
            .map(|s| format_number(s.total_assets))
            .unwrap_or_else(|| "-".to_string())
    });
    let total_value = Signal::derive(move || {
        state
            .stats
            .get()
            .map(|s| format_currency(s.total_value))
            .unwrap_or_else(|| "-".to_string())
    });
    let active_licenses = Signal::derive(move || {
        state
            .stats
            .get()
            .map(|s| format_number(s.active_licenses))
            .unwrap_or_else(|| "-".to_string())
    });
    let available = Signal::derive(move || {
        state
            .stats
            .get()
            .map(|s| format_number(s.available_assets))
            .unwrap_or_else(|| "-".to_string())
    });

    view! {
        <div class="stats-grid">
            <StatCard
                label="Total Assets"
                value=total_assets
                color="stat-blue"
                icon=view! { <BoxIcon/> }.into_view()
            />
            <StatCard
                label="Total Value"
                value=total_value
                color="stat-green"
                icon=view! { <CurrencyIcon/> }.into_view()
            />
            <StatCard
                label="Active Licenses"
                value=active_licenses
                color="stat-purple"
                icon=view! { <KeyIcon/> }.into_view()
            />
            <StatCard
                label="Available Assets"
                value=available
                color="stat-amber"
                icon=view! { <CheckCircleIcon/> }.into_view()
            />
        </div>
    }
}

#[component]
fn RecentAssets() -> impl IntoView {
    let state = expect_context::<StatsState>();

    view! {
        <section class="panel">
            <h2 class="panel-title">"Recently Added"</h2>
            <Show
                when=move || !state.recent.with(Vec::is_empty)
                fallback=|| view! {
                    <EmptyState
                        title="No assets yet"
                        description="Assets you add will show up here."
                    />
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th class="cell-right">"Current Value"</th>
                            <th>"Added"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.recent.get()
                            key=|asset| asset.id
                            children=|asset: RecentAsset| view! {
                                <tr>
                                    <td class="cell-name">{asset.name}</td>
                                    <td><KindBadge kind=asset.kind/></td>
                                    <td><StatusBadge status=asset.status/></td>
                                    <td class="cell-right">{format_currency(asset.current_value)}</td>
                                    <td class="cell-muted">{asset.created_at}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
