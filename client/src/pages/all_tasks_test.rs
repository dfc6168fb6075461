use super::*;
use crate::net::types::Role;

fn users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
            role: Role::User,
        },
        User {
            id: "u2".to_owned(),
            username: "bob".to_owned(),
            role: Role::Admin,
        },
    ]
}

fn task() -> Task {
    Task {
        id: "t1".to_owned(),
        name: "Write report".to_owned(),
        description: "Quarterly numbers".to_owned(),
        assignee: None,
        completed: false,
    }
}

#[test]
fn resolve_assignee_finds_selected_user() {
    let assignee = resolve_assignee(&users(), "u2").expect("known user");
    assert_eq!(assignee.id, "u2");
    assert_eq!(assignee.username, "bob");
}

#[test]
fn resolve_assignee_requires_a_selection() {
    assert_eq!(resolve_assignee(&users(), ""), Err("Select a user to assign."));
}

#[test]
fn resolve_assignee_rejects_unknown_user() {
    assert_eq!(resolve_assignee(&users(), "u9"), Err("Selected user no longer exists."));
}

#[test]
fn edit_field_prefills_current_value() {
    let task = task();
    assert_eq!(EditField::Title.current_value(&task), "Write report");
    assert_eq!(EditField::Description.current_value(&task), "Quarterly numbers");
    assert_ne!(EditField::Title.dialog_title(), EditField::Description.dialog_title());
}
