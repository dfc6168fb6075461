//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, request builders, and identity-dependent rendering.
//! `Session` is the only typed view of the persisted credentials; the reactive
//! `AuthState` wrapping it is provided once from `App` through context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;

/// Credentials persisted at login and cleared at logout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    /// `None` when nothing, or an unrecognized value, is stored.
    pub role: Option<Role>,
    pub user_id: Option<String>,
}

/// Coarse authentication phase used by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    AuthenticatedAdmin,
    AuthenticatedUser,
}

impl Session {
    /// Non-empty token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Non-empty user identifier, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    /// `Authorization` header value for authenticated requests.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    /// Token and user id together; both are needed to fetch "my tasks".
    #[must_use]
    pub fn user_credentials(&self) -> Option<(&str, &str)> {
        Some((self.token()?, self.user_id()?))
    }

    /// A token without a recognized role is treated as no session at all.
    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        match (self.token(), self.role) {
            (Some(_), Some(Role::Admin)) => AuthPhase::AuthenticatedAdmin,
            (Some(_), Some(Role::User)) => AuthPhase::AuthenticatedUser,
            _ => AuthPhase::Unauthenticated,
        }
    }

    /// Role of an authenticated session.
    #[must_use]
    pub fn authenticated_role(&self) -> Option<Role> {
        match self.phase() {
            AuthPhase::AuthenticatedAdmin => Some(Role::Admin),
            AuthPhase::AuthenticatedUser => Some(Role::User),
            AuthPhase::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.phase() == AuthPhase::AuthenticatedAdmin
    }
}

/// Reactive authentication state.
///
/// `loading` stays `true` until the hydrated app has read the session store,
/// so server-rendered HTML never commits to a route decision.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

impl AuthState {
    /// State after the store has been read.
    #[must_use]
    pub fn loaded(session: Session) -> Self {
        Self { session, loading: false }
    }
}
