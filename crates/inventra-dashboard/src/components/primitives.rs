//! Reusable UI primitive components
//!
//! Foundational building blocks for the dashboard UI: loading spinner, empty
//! and error states, badges, stat cards, form fields, search input and the
//! modal shell.

use leptos::*;

use super::icons::CloseIcon;
use crate::models::{AssetKind, AssetStatus};

// ============================================================================
// Loading & status states
// ============================================================================

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <svg class="spinner" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3"/>
                <circle class="spinner-head" cx="12" cy="12" r="10" fill="none" stroke-width="3"
                        stroke-dasharray="31.4 31.4" stroke-linecap="round"/>
            </svg>
            {message.map(|msg| view! { <span class="loading-message">{msg}</span> })}
        </div>
    }
}

/// Generic empty state component
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-text">{title}</div>
            {description.map(|desc| view! { <p class="empty-description">{desc}</p> })}
        </div>
    }
}

/// Error state display with an optional retry action
#[component]
pub fn ErrorState(
    #[prop(into)] message: String,
    #[prop(optional)] retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-state" role="alert">
            <div class="error-content">
                <h3 class="error-title">"Something went wrong"</h3>
                <p class="error-message">{message}</p>
            </div>
            {retry.map(|on_retry| view! {
                <button class="btn btn-primary" on:click=move |_| on_retry.call(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Badge variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Primary => "badge badge-primary",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Error => "badge badge-error",
            BadgeVariant::Info => "badge badge-info",
        }
    }
}

/// Badge component with text
#[component]
pub fn Badge<T: IntoView + 'static>(
    text: T,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    view! {
        <span class=variant.class()>
            {text}
        </span>
    }
}

/// Badge color for an asset status.
pub fn status_badge_variant(status: AssetStatus) -> BadgeVariant {
    match status {
        AssetStatus::Available => BadgeVariant::Success,
        AssetStatus::Assigned => BadgeVariant::Info,
        AssetStatus::Broken => BadgeVariant::Error,
        AssetStatus::Repairing => BadgeVariant::Warning,
        AssetStatus::Disposed => BadgeVariant::Secondary,
    }
}

/// Status badge with the standard color mapping
#[component]
pub fn StatusBadge(status: AssetStatus) -> impl IntoView {
    view! { <Badge text=status.label() variant=status_badge_variant(status)/> }
}

/// Hardware/Software variant badge
#[component]
pub fn KindBadge(kind: AssetKind) -> impl IntoView {
    let variant = match kind {
        AssetKind::Hardware => BadgeVariant::Warning,
        AssetKind::Software => BadgeVariant::Primary,
    };
    view! { <Badge text=kind.label() variant=variant/> }
}

// ============================================================================
// Cards
// ============================================================================

/// Stat card for overview metrics
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] color: Option<&'static str>,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    let class = format!("stat-card {}", color.unwrap_or(""));

    view! {
        <div class=class>
            <div class="stat-header">
                {icon.map(|i| view! { <div class="stat-icon">{i}</div> })}
                <span class="stat-label">{label}</span>
            </div>
            <div class="stat-value" aria-label=format!("{}: ", label)>
                {move || value.get()}
            </div>
        </div>
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Labeled text input bound to a signal via a change callback
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </label>
            <input
                type=input_type
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                aria-label=label
            />
        </div>
    }
}

/// Search input
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <div class="search-icon" aria-hidden="true">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="m21 21-5.197-5.197m0 0A7.5 7.5 0 1 0 5.196 5.196a7.5 7.5 0 0 0 10.607 10.607Z"/>
                </svg>
            </div>
            <input
                type="search"
                placeholder=placeholder
                class="search-input"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                aria-label=placeholder
            />
        </div>
    }
}

// ============================================================================
// Modal shell
// ============================================================================

/// Modal dialog shell: backdrop, header with close button, body.
/// Clicking the backdrop closes the dialog; submit/cancel live in `children`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-label=title.clone()>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())></div>
            <div class="modal">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                    >
                        <CloseIcon/>
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
