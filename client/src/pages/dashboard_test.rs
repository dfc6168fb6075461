use super::*;

#[test]
fn validate_new_task_trims_fields() {
    assert_eq!(
        validate_new_task("  Write report ", " quarterly ", " u1 "),
        Ok(NewTask {
            name: "Write report".to_owned(),
            description: "quarterly".to_owned(),
            assignee: "u1".to_owned(),
        })
    );
}

#[test]
fn validate_new_task_requires_name() {
    assert_eq!(validate_new_task("   ", "desc", "u1"), Err("Enter a task name."));
}

#[test]
fn validate_new_task_allows_missing_assignee_and_description() {
    let task = validate_new_task("Ship", "", "").expect("valid");
    assert!(task.assignee.is_empty());
    assert!(task.description.is_empty());
}
