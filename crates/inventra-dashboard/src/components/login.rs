//! Login screen.

use leptos::*;
use leptos_router::{use_navigate, A};

use super::primitives::TextField;
use crate::api::Api;
use crate::form::validate_login;
use crate::services::auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        let api = api.clone();
        let navigate = navigate.clone();
        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            match auth::login(&api, &request).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(err) => {
                    log::warn!("login failed: {err}");
                    error.set(Some("Invalid username or password".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Inventra"</h1>
                <p class="auth-subtitle">"Sign in to manage your assets"</p>
                <Show when=move || error.get().is_some()>
                    <div class="form-error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <form on:submit=submit>
                    <TextField
                        label="Username"
                        value=username
                        on_input=move |v| username.set(v)
                        required=true
                    />
                    <TextField
                        label="Password"
                        value=password
                        on_input=move |v| password.set(v)
                        input_type="password"
                        required=true
                    />
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "No account yet? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
