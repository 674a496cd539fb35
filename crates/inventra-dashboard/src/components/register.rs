//! Registration screen.

use leptos::*;
use leptos_router::{use_navigate, A};

use super::primitives::TextField;
use crate::api::Api;
use crate::form::validate_register;
use crate::services::auth;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let firstname = create_rw_signal(String::new());
    let lastname = create_rw_signal(String::new());
    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_register(
            &firstname.get_untracked(),
            &lastname.get_untracked(),
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
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
            match auth::register(&api, &request).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    let message = err
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Registration failed".to_string());
                    error.set(Some(message));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Create Account"</h1>
                <p class="auth-subtitle">"Join Inventra to track your inventory"</p>
                <Show when=move || error.get().is_some()>
                    <div class="form-error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <form on:submit=submit>
                    <div class="form-row">
                        <TextField
                            label="First name"
                            value=firstname
                            on_input=move |v| firstname.set(v)
                            required=true
                        />
                        <TextField
                            label="Last name"
                            value=lastname
                            on_input=move |v| lastname.set(v)
                            required=true
                        />
                    </div>
                    <TextField
                        label="Username"
                        value=username
                        on_input=move |v| username.set(v)
                        required=true
                    />
                    <TextField
                        label="Email"
                        value=email
                        on_input=move |v| email.set(v)
                        input_type="email"
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
                        {move || if submitting.get() { "Creating..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
