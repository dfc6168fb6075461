//! Reusable row for a task in any task list.
//!
//! DESIGN
//! ======
//! The card only renders task data; each page passes its own controls as
//! children so admin and user lists share presentation but not actions.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::net::types::Task;

/// Assignee line for a task.
pub(crate) fn assignee_label(task: &Task) -> String {
    match &task.assignee {
        Some(a) if !a.username.is_empty() => format!("User: {}", a.username),
        Some(a) => format!("User: {}", a.id),
        None => "Unassigned".to_owned(),
    }
}

#[component]
pub fn TaskCard(task: Task, #[prop(optional)] pending: bool, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let assignee = assignee_label(&task);
    let completed = task.completed;

    view! {
        <li class="task-card" class:task-card--completed=completed class:task-card--pending=pending>
            <div class="task-card__body">
                <h2 class="task-card__name">{task.name}</h2>
                <p class="task-card__description">{task.description}</p>
                <span class="task-card__assignee">{assignee}</span>
                <span class="task-card__status">{if completed { "Completed" } else { "Open" }}</span>
            </div>
            <div class="task-card__actions">{children.map(|c| c())}</div>
        </li>
    }
}
