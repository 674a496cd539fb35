//! Application shell: sidebar navigation, top header, auth guard and the
//! toast overlay. Routed pages render into the shell through an `Outlet`.

use leptos::*;
use leptos_router::{use_navigate, Outlet, A};

use super::icons::{BoxIcon, CloseIcon, HomeIcon, LogoutIcon, UsersIcon};
use crate::api::Api;
use crate::services::auth;
use crate::session;
use crate::state::{StatsState, Toast, ToastLevel, Toasts};

/// Layout wrapper for all authenticated routes.
///
/// Redirects to the login screen whenever no token is stored, and provides
/// the shared [`StatsState`] so the overview and the assets page observe the
/// same dashboard data.
#[component]
pub fn Shell() -> impl IntoView {
    let api = expect_context::<Api>();
    let stats = StatsState::new();
    provide_context(stats);

    let navigate = use_navigate();
    create_effect(move |_| {
        if !session::is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    stats.refetch(&api);

    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-main">
                <Header/>
                <main class="app-content">
                    <Outlet/>
                </main>
            </div>
            <ToastHost/>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <BoxIcon/>
                <span class="brand-name">"Inventra"</span>
            </div>
            <nav class="sidebar-nav" aria-label="Main">
                <A href="/dashboard" class="nav-link">
                    <HomeIcon/>
                    <span>"Dashboard"</span>
                </A>
                <A href="/assets" class="nav-link">
                    <BoxIcon/>
                    <span>"Assets"</span>
                </A>
                <A href="/users" class="nav-link">
                    <UsersIcon/>
                    <span>"Users"</span>
                </A>
            </nav>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let navigate = use_navigate();
    let username = session::current_username().unwrap_or_else(|| "Account".to_string());

    let logout = move |_| {
        auth::logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="app-header">
            <div class="header-spacer"></div>
            <div class="header-profile">
                <span class="header-username">{username}</span>
                <button class="btn btn-ghost" on:click=logout aria-label="Log out">
                    <LogoutIcon/>
                    <span>"Logout"</span>
                </button>
            </div>
        </header>
    }
}

/// Fixed overlay rendering the active notifications.
#[component]
fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let items = toasts.items();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <CloseIcon/>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
