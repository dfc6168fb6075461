use super::*;
use crate::net::types::Assignee;

fn task(assignee: Option<Assignee>) -> Task {
    Task {
        id: "t1".to_owned(),
        name: "n".to_owned(),
        description: String::new(),
        assignee,
        completed: false,
    }
}

#[test]
fn assignee_label_prefers_username() {
    let t = task(Some(Assignee {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
    }));
    assert_eq!(assignee_label(&t), "User: alice");
}

#[test]
fn assignee_label_falls_back_to_id() {
    let t = task(Some(Assignee {
        id: "u1".to_owned(),
        username: String::new(),
    }));
    assert_eq!(assignee_label(&t), "User: u1");
}

#[test]
fn assignee_label_unassigned() {
    assert_eq!(assignee_label(&task(None)), "Unassigned");
}
