use super::*;

fn task(id: &str, completed: bool) -> Task {
    Task {
        id: id.to_owned(),
        name: format!("Task {id}"),
        description: format!("About {id}"),
        assignee: None,
        completed,
    }
}

fn loaded(items: Vec<Task>) -> TasksState {
    let mut state = TasksState::default();
    state.begin_load(TaskScope::All);
    state.finish_load(&TaskScope::All, Ok(items));
    state
}

fn transport_error() -> ApiError {
    ApiError::Transport("network down".to_owned())
}

// =============================================================
// Loading
// =============================================================

#[test]
fn tasks_state_defaults() {
    let s = TasksState::default();
    assert!(s.scope.is_none());
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert!(s.pending.is_empty());
}

#[test]
fn begin_load_marks_loading_and_keeps_same_scope_items() {
    let mut s = loaded(vec![task("a", false)]);
    s.begin_load(TaskScope::All);
    assert!(s.loading);
    assert_eq!(s.items.len(), 1);
}

#[test]
fn begin_load_for_new_scope_drops_previous_items() {
    let mut s = loaded(vec![task("a", false)]);
    s.begin_load(TaskScope::Assigned("u1".to_owned()));
    assert!(s.items.is_empty());
    assert_eq!(s.scope, Some(TaskScope::Assigned("u1".to_owned())));
}

#[test]
fn finish_load_failure_leaves_empty_list_with_error() {
    let mut s = loaded(vec![task("a", false)]);
    s.begin_load(TaskScope::All);
    s.finish_load(&TaskScope::All, Err(transport_error()));
    assert!(!s.loading);
    assert!(s.items.is_empty());
    assert!(s.error.is_some());
}

#[test]
fn finish_load_for_stale_scope_is_ignored() {
    let mut s = TasksState::default();
    s.begin_load(TaskScope::All);
    s.begin_load(TaskScope::Assigned("u1".to_owned()));
    s.finish_load(&TaskScope::All, Ok(vec![task("a", false)]));
    assert!(s.items.is_empty());
    assert!(s.loading);
}

#[test]
fn visible_only_for_matching_scope() {
    let s = loaded(vec![task("a", false), task("b", true)]);
    assert_eq!(s.visible(&TaskScope::All, TaskFilter::All).len(), 2);
    assert!(s.visible(&TaskScope::Assigned("u1".to_owned()), TaskFilter::All).is_empty());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filters_select_by_completed_flag() {
    let s = loaded(vec![task("a", false), task("b", true), task("c", false)]);
    let completed: Vec<_> = s
        .visible(&TaskScope::All, TaskFilter::Completed)
        .into_iter()
        .map(|t| t.id)
        .collect();
    let unfulfilled: Vec<_> = s
        .visible(&TaskScope::All, TaskFilter::Unfulfilled)
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(completed, vec!["b"]);
    assert_eq!(unfulfilled, vec!["a", "c"]);
}

#[test]
fn partition_places_every_task_exactly_once() {
    let tasks = vec![task("a", false), task("b", true), task("c", true), task("d", false)];
    let (completed, unfulfilled) = partition(&tasks);
    assert_eq!(completed.len() + unfulfilled.len(), tasks.len());
    assert!(completed.iter().all(|t| t.completed));
    assert!(unfulfilled.iter().all(|t| !t.completed));
    for t in &tasks {
        let hits = completed.iter().chain(unfulfilled.iter()).filter(|x| x.id == t.id).count();
        assert_eq!(hits, 1, "task {} should appear once", t.id);
    }
}

#[test]
fn partition_of_empty_list_is_empty() {
    let (completed, unfulfilled) = partition(&[]);
    assert!(completed.is_empty());
    assert!(unfulfilled.is_empty());
}

#[test]
fn filter_titles() {
    assert_eq!(TaskFilter::Completed.title(), "Completed Tasks");
    assert_eq!(TaskFilter::Unfulfilled.title(), "Unfulfilled Tasks");
}

// =============================================================
// Patches
// =============================================================

#[test]
fn delete_removes_only_matching_task() {
    let mut s = loaded(vec![task("a", false), task("b", true), task("c", false)]);
    let before = s.items.clone();
    assert!(s.apply("b", TaskPatch::Delete));
    assert_eq!(s.items, vec![before[0].clone(), before[2].clone()]);
}

#[test]
fn delete_unknown_id_changes_nothing() {
    let mut s = loaded(vec![task("a", false)]);
    assert!(!s.apply("zzz", TaskPatch::Delete));
    assert_eq!(s.items.len(), 1);
}

#[test]
fn rename_and_redescribe_touch_only_target() {
    let mut s = loaded(vec![task("a", false), task("b", false)]);
    s.apply("a", TaskPatch::Rename("Renamed".to_owned()));
    s.apply("a", TaskPatch::Redescribe("New text".to_owned()));
    assert_eq!(s.get("a").unwrap().name, "Renamed");
    assert_eq!(s.get("a").unwrap().description, "New text");
    assert_eq!(s.get("b").unwrap(), &task("b", false));
}

#[test]
fn assign_sets_assignee() {
    let mut s = loaded(vec![task("a", false)]);
    let assignee = Assignee {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
    };
    s.apply("a", TaskPatch::Assign(assignee.clone()));
    assert_eq!(s.get("a").unwrap().assignee, Some(assignee));
}

#[test]
fn complete_then_uncomplete_round_trips() {
    let original = task("a", false);
    let mut s = loaded(vec![original.clone(), task("b", true)]);

    s.settle("a", Ok(()), TaskPatch::SetCompleted(true)).unwrap();
    assert!(s.get("a").unwrap().completed);

    s.settle("a", Ok(()), TaskPatch::SetCompleted(false)).unwrap();
    assert_eq!(s.get("a").unwrap(), &original);
    assert_eq!(s.get("b").unwrap(), &task("b", true));
}

// =============================================================
// Settle / pending
// =============================================================

#[test]
fn failed_rename_leaves_list_byte_identical() {
    let mut s = loaded(vec![task("a", false), task("b", true)]);
    let before = serde_json::to_vec(&s.items).unwrap();

    assert!(s.begin("a"));
    let result = s.settle("a", Err(transport_error()), TaskPatch::Rename("X".to_owned()));

    assert_eq!(result, Err(transport_error()));
    assert_eq!(serde_json::to_vec(&s.items).unwrap(), before);
    assert!(!s.is_pending("a"));
}

#[test]
fn failed_delete_keeps_task() {
    let mut s = loaded(vec![task("a", false)]);
    let result = s.settle("a", Err(ApiError::from_status(500, "")), TaskPatch::Delete);
    assert!(result.is_err());
    assert_eq!(s.items.len(), 1);
}

#[test]
fn begin_refuses_second_mutation_while_pending() {
    let mut s = loaded(vec![task("a", false)]);
    assert!(s.begin("a"));
    assert!(!s.begin("a"));
    assert!(s.begin("b"));
    s.finish("a");
    assert!(s.begin("a"));
}

#[test]
fn settle_success_releases_pending() {
    let mut s = loaded(vec![task("a", false)]);
    s.begin("a");
    s.settle("a", Ok(()), TaskPatch::Delete).unwrap();
    assert!(!s.is_pending("a"));
    assert!(s.items.is_empty());
}
