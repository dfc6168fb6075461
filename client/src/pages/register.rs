//! Registration page: username, password, and role.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::Role;
use crate::state::ui::UiState;
use crate::util::auth::LOGIN_PATH;

pub(crate) const REGISTER_FAILED: &str = "Registration failed. Please try again later.";

/// Validated registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub username: String,
    pub password: String,
    pub role: Role,
}

pub(crate) fn validate_registration(username: &str, password: &str, role: Role) -> Result<Registration, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Registration {
        username: username.to_owned(),
        password: password.to_owned(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match validate_registration(&username.get_untracked(), &password.get_untracked(), role.get_untracked()) {
            Ok(form) => form,
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
                match crate::net::api::register(&config, &form.username, &form.password, form.role).await {
                    Ok(()) => {
                        crate::util::notify::report_success(ui, "Registered", "Account created. Please log in.");
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => crate::util::notify::report_failure(ui, "register", &err, REGISTER_FAILED),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, form);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Task Desk"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)).unwrap_or_default())
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? " <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
