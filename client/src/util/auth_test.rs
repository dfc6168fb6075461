use super::*;
use crate::state::auth::Session;

fn loaded(token: Option<&str>, role: Option<Role>) -> AuthState {
    AuthState::loaded(Session {
        token: token.map(str::to_owned),
        role,
        user_id: Some("u1".to_owned()),
    })
}

// =============================================================
// Root resolution
// =============================================================

#[test]
fn root_sends_admin_to_dashboard() {
    assert_eq!(root_target(AuthPhase::AuthenticatedAdmin), "/dashboard");
}

#[test]
fn root_sends_user_to_tasks() {
    assert_eq!(root_target(AuthPhase::AuthenticatedUser), "/tasks");
}

#[test]
fn root_sends_anonymous_to_login() {
    assert_eq!(root_target(AuthPhase::Unauthenticated), "/login");
}

#[test]
fn login_with_role_lands_where_root_would() {
    for role in Role::ALL {
        let state = loaded(Some("t1"), Some(role));
        assert_eq!(landing_path(role), root_target(state.session.phase()));
    }
}

// =============================================================
// Guard
// =============================================================

#[test]
fn guard_waits_while_loading() {
    let state = AuthState::default();
    assert_eq!(guard_outcome(&state, Role::Admin), GuardOutcome::Loading);
    assert_eq!(guard_outcome(&state, Role::User), GuardOutcome::Loading);
}

#[test]
fn guard_allows_matching_role() {
    assert_eq!(guard_outcome(&loaded(Some("t"), Some(Role::Admin)), Role::Admin), GuardOutcome::Allow);
    assert_eq!(guard_outcome(&loaded(Some("t"), Some(Role::User)), Role::User), GuardOutcome::Allow);
}

#[test]
fn guard_forbids_mismatched_role() {
    assert_eq!(
        guard_outcome(&loaded(Some("t"), Some(Role::User)), Role::Admin),
        GuardOutcome::Forbidden
    );
    assert_eq!(
        guard_outcome(&loaded(Some("t"), Some(Role::Admin)), Role::User),
        GuardOutcome::Forbidden
    );
}

#[test]
fn guard_never_allows_without_token_or_known_role() {
    let sessions = [
        loaded(None, Some(Role::Admin)),
        loaded(None, Some(Role::User)),
        loaded(Some(""), Some(Role::Admin)),
        loaded(Some("t"), None),
        loaded(None, None),
    ];
    for state in &sessions {
        for required in Role::ALL {
            let outcome = guard_outcome(state, required);
            assert_ne!(outcome, GuardOutcome::Allow, "{state:?} must not reach {required:?} routes");
            assert_eq!(outcome, GuardOutcome::RedirectLogin);
        }
    }
}
