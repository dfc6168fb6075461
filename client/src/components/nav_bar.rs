//! Top bar with page title, navigation links, identity, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by every authenticated page; logout clears the session store and
//! returns to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{
    ALL_TASKS_PATH, COMPLETED_TASKS_PATH, DASHBOARD_PATH, LOGIN_PATH, MY_TASKS_PATH, UNFULFILLED_TASKS_PATH, USERS_PATH,
    logout,
};

#[component]
pub fn NavBar(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let role_label = move || {
        auth.get()
            .session
            .authenticated_role()
            .map(|role| role.label())
    };

    let on_logout = move |_| {
        logout(auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="toolbar__links">{children.map(|c| c())}</nav>

            <span class="toolbar__spacer"></span>

            <span class="toolbar__self" hidden=move || role_label().is_none()>
                {move || role_label().unwrap_or_default()}
            </span>
            <button
                class="btn toolbar__logout"
                hidden=move || role_label().is_none()
                on:click=on_logout
                title="Logout"
            >
                "Logout"
            </button>
        </header>
    }
}

/// Navigation for admin pages.
#[component]
pub fn AdminLinks() -> impl IntoView {
    view! {
        <a class="toolbar__link" href=DASHBOARD_PATH>"Dashboard"</a>
        <a class="toolbar__link" href=ALL_TASKS_PATH>"All Tasks"</a>
        <a class="toolbar__link" href=USERS_PATH>"Users"</a>
    }
}

/// Navigation for a user's own task views.
#[component]
pub fn UserLinks() -> impl IntoView {
    view! {
        <a class="toolbar__link" href=MY_TASKS_PATH>"My Tasks"</a>
        <a class="toolbar__link" href=COMPLETED_TASKS_PATH>"Completed"</a>
        <a class="toolbar__link" href=UNFULFILLED_TASKS_PATH>"Unfulfilled"</a>
    }
}
