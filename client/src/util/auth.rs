//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role-gated route goes through `guard_outcome`, so the policy is the
//! same everywhere: no usable session redirects to `/login`, a session with
//! the wrong role gets the forbidden view, and nothing protected renders
//! until the session store has been read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::{AuthPhase, AuthState, Session};
use crate::util::session_store::browser_store;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ALL_TASKS_PATH: &str = "/all-tasks";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const USERS_PATH: &str = "/users";
pub const MY_TASKS_PATH: &str = "/tasks";
pub const COMPLETED_TASKS_PATH: &str = "/completed-tasks";
pub const UNFULFILLED_TASKS_PATH: &str = "/unfulfilled-tasks";

/// Result of checking a gated route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session store not read yet.
    Loading,
    Allow,
    RedirectLogin,
    Forbidden,
}

/// Landing route for a freshly logged-in role.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => DASHBOARD_PATH,
        Role::User => MY_TASKS_PATH,
    }
}

/// Where `/` sends each phase.
#[must_use]
pub fn root_target(phase: AuthPhase) -> &'static str {
    match phase {
        AuthPhase::AuthenticatedAdmin => landing_path(Role::Admin),
        AuthPhase::AuthenticatedUser => landing_path(Role::User),
        AuthPhase::Unauthenticated => LOGIN_PATH,
    }
}

/// Decide what a route requiring `required` shows for `state`.
#[must_use]
pub fn guard_outcome(state: &AuthState, required: Role) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    match state.session.authenticated_role() {
        None => GuardOutcome::RedirectLogin,
        Some(role) if role == required => GuardOutcome::Allow,
        Some(_) => GuardOutcome::Forbidden,
    }
}

/// Navigate to `/login` whenever the guard for `required` says so.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_outcome(&auth.get(), required) == GuardOutcome::RedirectLogin {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Forget the session: clear the persisted credentials and the reactive copy.
pub fn logout(auth: RwSignal<AuthState>) {
    browser_store().clear();
    auth.set(AuthState::loaded(Session::default()));
}
