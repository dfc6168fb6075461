use super::*;
use crate::net::types::LoginResponse;
use crate::util::session_store::{MemoryStorage, SessionStore};

fn user_session() -> Session {
    Session {
        token: Some("t1".to_owned()),
        role: Some(Role::User),
        user_id: Some("u1".to_owned()),
    }
}

// =============================================================
// Auth endpoints
// =============================================================

#[test]
fn login_posts_credentials_without_authorization() {
    let req = login("alice", "x");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Some(json!({ "username": "alice", "password": "x" })));
    assert_eq!(req.authorization, None);
}

#[test]
fn register_posts_role_in_wire_spelling() {
    let req = register("bob", "pw", Role::Admin);
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/register");
    assert_eq!(
        req.body,
        Some(json!({ "username": "bob", "password": "pw", "role": "admin" }))
    );
}

// =============================================================
// Task endpoints
// =============================================================

#[test]
fn list_tasks_is_plain_get() {
    let req = list_tasks();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/tasks");
    assert!(req.body.is_none());
}

#[test]
fn create_task_posts_to_resources() {
    let req = create_task(&NewTask {
        name: "Ship".to_owned(),
        description: "v1".to_owned(),
        assignee: "u2".to_owned(),
    });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/resources");
    assert_eq!(
        req.body,
        Some(json!({ "name": "Ship", "description": "v1", "assignee": "u2" }))
    );
}

#[test]
fn rename_and_redescribe_patch_task_with_single_field() {
    let rename = rename_task("t9", "New");
    assert_eq!(rename.method, Method::Patch);
    assert_eq!(rename.path, "/tasks/t9");
    assert_eq!(rename.body, Some(json!({ "name": "New" })));

    let redescribe = redescribe_task("t9", "Details");
    assert_eq!(redescribe.method, Method::Patch);
    assert_eq!(redescribe.path, "/tasks/t9");
    assert_eq!(redescribe.body, Some(json!({ "description": "Details" })));
}

#[test]
fn assign_task_uses_assignee_subresource() {
    let req = assign_task("t9", "u3");
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.path, "/tasks/t9/assignee");
    assert_eq!(req.body, Some(json!({ "assigneeId": "u3" })));
}

#[test]
fn delete_task_has_no_body() {
    let req = delete_task("t9");
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/tasks/t9");
    assert!(req.body.is_none());
}

#[test]
fn completion_uses_two_distinct_endpoints() {
    let complete = set_task_completed("t9", true);
    assert_eq!(complete.method, Method::Patch);
    assert_eq!(complete.path, "/resources/t9/complete");
    assert_eq!(complete.body, Some(json!({})));

    let uncomplete = set_task_completed("t9", false);
    assert_eq!(uncomplete.method, Method::Patch);
    assert_eq!(uncomplete.path, "/resources/t9/uncomplete");
    assert_eq!(uncomplete.body, Some(json!({})));
}

// =============================================================
// User endpoints
// =============================================================

#[test]
fn user_management_paths() {
    assert_eq!(list_users().path, "/users");
    assert_eq!(delete_user("u5").describe(), "DELETE /user/u5");

    let role = change_user_role("u5", Role::User);
    assert_eq!(role.describe(), "PATCH /user/u5/role");
    assert_eq!(role.body, Some(json!({ "role": "user" })));

    let username = change_username("u5", "carol");
    assert_eq!(username.describe(), "PATCH /user/u5/username");
    assert_eq!(username.body, Some(json!({ "username": "carol" })));
}

// =============================================================
// Authorization
// =============================================================

#[test]
fn authorized_attaches_bearer_header() {
    let req = list_tasks().authorized(&user_session());
    assert_eq!(req.authorization.as_deref(), Some("Bearer t1"));
}

#[test]
fn authorized_without_token_leaves_header_off() {
    let req = list_tasks().authorized(&Session::default());
    assert_eq!(req.authorization, None);
}

#[test]
fn login_response_drives_user_task_fetch() {
    let response: LoginResponse = serde_json::from_value(json!({
        "id": "u1",
        "token": "t1",
        "role": "user"
    }))
    .unwrap();

    let store = SessionStore::new(MemoryStorage::default());
    store.write(&response.token, &response.role, &response.id);
    let session = store.read();
    assert_eq!(session, user_session());

    let (_, user_id) = session.user_credentials().unwrap();
    let req = list_user_tasks(user_id).authorized(&session);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/resources/user-tasks/u1");
    assert_eq!(req.authorization.as_deref(), Some("Bearer t1"));
}
