//! Admin user management page.
//!
//! The whole page is gated server-side: a 403 on the initial listing renders
//! an access-denied state instead of the table. Role changes and the
//! enable/disable toggle each confirm before firing; a conflict from the
//! backend (such as disabling your own account) is shown verbatim.

use leptos::*;

use super::icons::{LockIcon, ShieldIcon};
use super::primitives::{Badge, BadgeVariant, ErrorState, LoadingSpinner};
use crate::api::Api;
use crate::models::{Role, UserAccount};
use crate::services::admin;
use crate::session;
use crate::state::Toasts;

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<Toasts>();

    let users = create_rw_signal(Vec::<UserAccount>::new());
    let is_loading = create_rw_signal(true);
    let forbidden = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);

    let fetch = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            is_loading.set(true);
            spawn_local(async move {
                match admin::list_users(&api).await {
                    Ok(list) => {
                        users.set(list);
                        error.set(None);
                    }
                    Err(err) if err.is_forbidden() => forbidden.set(true),
                    Err(err) => {
                        log::error!("user list failed: {err}");
                        error.set(Some("Failed to load users".to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };
    fetch.call(());

    let toggle_role = {
        let api = api.clone();
        Callback::new(move |user: UserAccount| {
            let target = user.role.toggled();
            let prompt = format!("Change role of {} to {}?", user.username, target.label());
            if !gloo_dialogs::confirm(&prompt) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match admin::update_role(&api, user.id, target).await {
                    Ok(_) => {
                        toasts.success("Role updated");
                        fetch.call(());
                    }
                    Err(err) => {
                        log::error!("role update failed: {err}");
                        toasts.error("Failed to update role");
                    }
                }
            });
        })
    };

    let toggle_status = {
        let api = api.clone();
        Callback::new(move |user: UserAccount| {
            let enable = !user.enabled;
            let verb = if enable { "Enable" } else { "Disable" };
            if !gloo_dialogs::confirm(&format!("{verb} account {}?", user.username)) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match admin::update_status(&api, user.id, enable).await {
                    Ok(_) => {
                        toasts.success("Account updated");
                        fetch.call(());
                    }
                    Err(err) => {
                        log::error!("status update failed: {err}");
                        let message = err
                            .server_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| "Failed to update account".to_string());
                        toasts.error(message);
                    }
                }
            });
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"User Management"</h1>
            </div>

            <Show
                when=move || !forbidden.get()
                fallback=|| view! { <AccessDenied/> }
            >
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading users..."/> }
                >
                    {move || error.get().map(|message| view! {
                        <ErrorState
                            message=message
                            retry=Callback::new(move |_| fetch.call(()))
                        />
                    })}
                    <Show when=move || error.get().is_none()>
                        <UserTable
                            users=users
                            on_toggle_role=toggle_role
                            on_toggle_status=toggle_status
                        />
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied" role="alert">
            <LockIcon/>
            <h2>"Access denied"</h2>
            <p>"You need administrator rights to manage users."</p>
        </div>
    }
}

#[component]
fn UserTable(
    users: RwSignal<Vec<UserAccount>>,
    on_toggle_role: Callback<UserAccount>,
    on_toggle_status: Callback<UserAccount>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th class="cell-right">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || users.get()
                    key=|user| (user.id, user.role, user.enabled)
                    children=move |user: UserAccount| {
                        view! {
                            <UserRow
                                user=user
                                on_toggle_role=on_toggle_role
                                on_toggle_status=on_toggle_status
                            />
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn UserRow(
    user: UserAccount,
    on_toggle_role: Callback<UserAccount>,
    on_toggle_status: Callback<UserAccount>,
) -> impl IntoView {
    // The role toggle is hidden on the operator's own row. The status toggle
    // always renders: the self-disable guard lives server-side and answers
    // 409, whose message is shown verbatim.
    let is_self = is_own_row(session::current_username().as_deref(), &user.username);

    let role_variant = match user.role {
        Role::Admin => BadgeVariant::Primary,
        Role::User => BadgeVariant::Default,
    };
    let (status_text, status_variant) = if user.enabled {
        ("Enabled", BadgeVariant::Success)
    } else {
        ("Disabled", BadgeVariant::Error)
    };

    let role_label = if user.role == Role::Admin {
        "Demote to USER"
    } else {
        "Promote to ADMIN"
    };
    let status_label = if user.enabled { "Disable" } else { "Enable" };

    let full_name = format!("{} {}", user.firstname, user.lastname);
    let role_target = user.clone();
    let status_target = user.clone();
    let enabled = user.enabled;

    view! {
        <tr class:row-disabled=!enabled>
            <td class="cell-name">{full_name}</td>
            <td class="cell-mono">{user.username.clone()}</td>
            <td class="cell-muted">{user.email.clone()}</td>
            <td>
                <span class="role-badge">
                    {(user.role == Role::Admin).then(|| view! { <ShieldIcon/> })}
                    <Badge text=user.role.label() variant=role_variant/>
                </span>
            </td>
            <td><Badge text=status_text variant=status_variant/></td>
            <td class="cell-right">
                <div class="row-actions">
                    <Show
                        when=move || !is_self
                        fallback=|| view! { <span class="cell-muted">"Current User"</span> }
                    >
                        {
                            let role_target = role_target.clone();
                            view! {
                                <button
                                    class="btn btn-small"
                                    disabled=!enabled
                                    on:click=move |_| on_toggle_role.call(role_target.clone())
                                >
                                    {role_label}
                                </button>
                            }
                        }
                    </Show>
                    <button
                        class="btn btn-small"
                        on:click=move |_| on_toggle_status.call(status_target.clone())
                    >
                        {status_label}
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Whether a listed account belongs to the operator, per the token `sub`.
/// Only the role toggle is gated on this; the status toggle stays available
/// on every row.
fn is_own_row(current_username: Option<&str>, row_username: &str) -> bool {
    current_username == Some(row_username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_row_matches_token_sub() {
        assert!(is_own_row(Some("alice"), "alice"));
        assert!(!is_own_row(Some("alice"), "bob"));
        assert!(!is_own_row(None, "alice"), "no session means no self row");
    }
}
