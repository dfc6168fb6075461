//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only and user-only pages wrap their content in `RoleGate`, which
//! renders the content only when `guard_outcome` allows it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, ROOT_PATH, guard_outcome, install_guard_redirect};

#[component]
pub fn RoleGate(required: Role, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, required, use_navigate());

    let outcome = Memo::new(move |_| guard_outcome(&auth.get(), required));

    view! {
        {move || match outcome.get() {
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Forbidden => view! { <Forbidden required=required/> }.into_any(),
            GuardOutcome::Loading => {
                view! {
                    <div class="page">
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            GuardOutcome::RedirectLogin => {
                view! {
                    <div class="page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Shown to an authenticated user whose role does not match the route.
#[component]
fn Forbidden(required: Role) -> impl IntoView {
    view! {
        <div class="page page--forbidden">
            <div class="card">
                <h1>"403 Forbidden"</h1>
                <p>{format!("This page is only available to the {} role.", required.as_str())}</p>
                <a class="btn btn--primary" href=ROOT_PATH>
                    "Go to my start page"
                </a>
            </div>
        </div>
    }
}
