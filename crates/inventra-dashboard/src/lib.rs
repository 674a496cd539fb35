//! Inventra Dashboard - Leptos-based WebAssembly UI
//!
//! A single-page front-end for the Inventra asset-management REST API.
//! Built with the Leptos framework and compiled to WebAssembly.
//!
//! ## Features
//!
//! - **Auth**: login and registration backed by a bearer token in local
//!   storage; any 401 drops the session and returns to the login screen
//! - **Dashboard**: aggregate stats and the recently added assets
//! - **Assets**: debounced search, status filter, sortable columns,
//!   pagination, single/batch creation, editing, assignment and deletion
//! - **User Management**: admin-only role and account-status toggles
//! - **Zero JavaScript**: 100% Rust compiled to WASM
//!
//! ## Configuration
//!
//! The API endpoint can be injected by the hosting server:
//!
//! ```html
//! <meta name="inventra:api-url" content="http://inventra.local:8080">
//! ```
//!
//! Or via JavaScript:
//!
//! ```javascript
//! window.__INVENTRA_CONFIG__ = { api_url: "http://inventra.local:8080" };
//! ```
//!
//! Without either, the page origin is used, falling back to
//! `http://localhost:8080` during local development.

pub mod api;
pub mod components;
pub mod config;
pub mod form;
pub mod models;
pub mod query;
pub mod services;
pub mod session;
pub mod state;

use leptos::*;
use leptos_router::*;

use api::Api;
use components::{AssetsPage, LoginPage, OverviewPage, RegisterPage, Shell, UsersPage};
use config::DashboardConfig;
use state::Toasts;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = DashboardConfig::load();
    provide_context(Api::from_config(&config));
    provide_context(Toasts::new());

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=LoginPage/>
                <Route path="/register" view=RegisterPage/>
                <Route path="/" view=Shell>
                    <Route path="dashboard" view=OverviewPage/>
                    <Route path="assets" view=AssetsPage/>
                    <Route path="users" view=UsersPage/>
                    <Route path="" view=|| view! { <Redirect path="/dashboard"/> }/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    mount_to_body(|| view! { <App/> });
}
