use super::*;

#[test]
fn new_lifetime_is_alive() {
    assert!(ViewLifetime::default().is_alive());
}

#[test]
fn end_is_visible_through_clones() {
    let lifetime = ViewLifetime::default();
    let request_handle = lifetime.clone();
    lifetime.end();
    assert!(!request_handle.is_alive());
}

#[test]
fn end_is_idempotent() {
    let lifetime = ViewLifetime::default();
    lifetime.end();
    lifetime.end();
    assert!(!lifetime.is_alive());
}
