//! Login page: username + password against the task backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login persists the credentials, publishes them to the shared
//! `AuthState`, and routes to the role's landing page without a reload.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::LoginResponse;
use crate::state::auth::{AuthState, Session};
use crate::state::ui::UiState;
use crate::util::auth::{REGISTER_PATH, root_target};
use crate::util::session_store::{SessionStorage, SessionStore};

pub(crate) const LOGIN_FAILED: &str = "Login failed. Check your username and password.";

/// Trim the username; both fields must be non-empty.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Persist a login response and return the session as the store now reads it.
pub(crate) fn persist_login<S: SessionStorage>(store: &SessionStore<S>, response: &LoginResponse) -> Session {
    store.write(&response.token, &response.role, &response.id);
    store.read()
}

/// Route a freshly stored session lands on. A role the client does not
/// recognize stays on `/login`.
pub(crate) fn post_login_path(session: &Session) -> &'static str {
    root_target(session.phase())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (name, secret) = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(msg) => {
                ui.update(|u| {
                    u.error(msg);
                });
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &name, &secret).await {
                    Ok(response) => {
                        let session = persist_login(&crate::util::session_store::browser_store(), &response);
                        let target = post_login_path(&session);
                        if target == crate::util::auth::LOGIN_PATH {
                            leptos::logging::warn!("login returned unrecognized role {:?}", response.role);
                        }
                        auth.set(AuthState::loaded(session));
                        password.set(String::new());
                        navigate(target, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => crate::util::notify::report_failure(ui, "login", &err, LOGIN_FAILED),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, auth, name, secret);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Task Desk"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? " <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
