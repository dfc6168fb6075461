//! All-tasks list. Anyone can view it; admins also get edit, delete, and
//! assign controls on each task.

#[cfg(test)]
#[path = "all_tasks_test.rs"]
mod all_tasks_test;

use leptos::prelude::*;

use crate::components::nav_bar::{AdminLinks, NavBar};
use crate::components::prompt_dialog::PromptDialog;
use crate::components::task_card::TaskCard;
use crate::net::types::{Assignee, Task, User};
use crate::pages::task_actions::TaskView;
use crate::pages::users::UserView;
use crate::state::tasks::{TaskFilter, TaskScope};

/// Which text field an edit dialog changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditField {
    Title,
    Description,
}

impl EditField {
    pub(crate) fn dialog_title(self) -> &'static str {
        match self {
            Self::Title => "Edit task title",
            Self::Description => "Edit task description",
        }
    }

    pub(crate) fn current_value(self, task: &Task) -> String {
        match self {
            Self::Title => task.name.clone(),
            Self::Description => task.description.clone(),
        }
    }
}

/// Resolve the picked user id into the assignee the list will show.
pub(crate) fn resolve_assignee(users: &[User], selected: &str) -> Result<Assignee, &'static str> {
    if selected.is_empty() {
        return Err("Select a user to assign.");
    }
    users
        .iter()
        .find(|u| u.id == selected)
        .map(Assignee::from)
        .ok_or("Selected user no longer exists.")
}

#[component]
pub fn AllTasksPage() -> impl IntoView {
    let tasks_view = TaskView::from_context();
    let users_view = UserView::from_context();
    let auth = tasks_view.auth;
    let tasks = tasks_view.tasks;
    let users = users_view.users;

    let is_admin = Memo::new(move |_| auth.get().session.is_admin());
    let options = Signal::derive(move || users.get().items);

    // Wait until the stored session has been read so the fetch carries it.
    let loader = tasks_view.clone();
    let requested_tasks = RwSignal::new(false);
    Effect::new(move || {
        if requested_tasks.get_untracked() || auth.get().loading {
            return;
        }
        requested_tasks.set(true);
        loader.load(TaskScope::All);
    });

    let requested_users = RwSignal::new(false);
    Effect::new(move || {
        if requested_users.get_untracked() || !is_admin.get() {
            return;
        }
        requested_users.set(true);
        users_view.load(false);
    });

    let editing = RwSignal::new(None::<(String, EditField)>);
    let draft = RwSignal::new(String::new());
    let on_cancel = Callback::new(move |()| editing.set(None));
    let submit_view = tasks_view.clone();
    let on_submit = Callback::new(move |value: String| {
        match editing.get_untracked() {
            Some((task_id, EditField::Title)) => submit_view.rename(task_id, value),
            Some((task_id, EditField::Description)) => submit_view.redescribe(task_id, value),
            None => {}
        }
        editing.set(None);
    });

    let list_view = tasks_view.clone();
    let list = move || {
        let state = tasks.get();
        let items = state.visible(&TaskScope::All, TaskFilter::All);
        if state.loading && items.is_empty() {
            return view! { <p class="page__status">"Loading tasks..."</p> }.into_any();
        }
        if items.is_empty() && state.error.is_some() {
            return view! { <p class="page__status page__status--error">"Could not load tasks."</p> }.into_any();
        }
        if items.is_empty() {
            return view! { <p class="page__status">"No tasks."</p> }.into_any();
        }
        let admin = is_admin.get();
        view! {
            <ul class="task-list">
                {items
                    .into_iter()
                    .map(|task| {
                        let pending = state.is_pending(&task.id);
                        if admin {
                            let ctx = list_view.clone();
                            view! {
                                <TaskCard task=task.clone() pending=pending>
                                    <AdminTaskControls
                                        task=task.clone()
                                        busy=pending
                                        ctx=ctx.clone()
                                        options=options
                                        editing=editing
                                        draft=draft
                                    />
                                </TaskCard>
                            }
                                .into_any()
                        } else {
                            view! { <TaskCard task=task pending=pending/> }.into_any()
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <NavBar title="All Tasks">
                <Show when=move || is_admin.get()>
                    <AdminLinks/>
                </Show>
            </NavBar>
            <main class="page__body">{list}</main>
            {move || {
                editing
                    .get()
                    .map(|(_, field)| {
                        view! {
                            <PromptDialog
                                title=field.dialog_title()
                                value=draft
                                multiline={field == EditField::Description}
                                on_cancel=on_cancel
                                on_submit=on_submit
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn AdminTaskControls(
    task: Task,
    busy: bool,
    ctx: TaskView,
    options: Signal<Vec<User>>,
    editing: RwSignal<Option<(String, EditField)>>,
    draft: RwSignal<String>,
) -> impl IntoView {
    let choice = RwSignal::new(task.assignee.as_ref().map(|a| a.id.clone()).unwrap_or_default());

    let open_editor = move |field: EditField, task: &Task| {
        draft.set(field.current_value(task));
        editing.set(Some((task.id.clone(), field)));
    };
    let title_task = task.clone();
    let on_edit_title = move |_| open_editor(EditField::Title, &title_task);
    let description_task = task.clone();
    let on_edit_description = move |_| open_editor(EditField::Description, &description_task);

    let delete_ctx = ctx.clone();
    let delete_id = task.id.clone();
    let on_delete = move |_| delete_ctx.delete(delete_id.clone());

    let assign_id = task.id.clone();
    let on_assign = move |_| match resolve_assignee(&options.get_untracked(), &choice.get_untracked()) {
        Ok(assignee) => ctx.assign(assign_id.clone(), assignee),
        Err(msg) => ctx.ui.update(|u| {
            u.error(msg);
        }),
    };
    let assign_label = if task.assignee.is_some() { "Reassign" } else { "Assign" };

    view! {
        <button class="btn" on:click=on_edit_title disabled=busy>
            "Edit Title"
        </button>
        <button class="btn" on:click=on_edit_description disabled=busy>
            "Edit Description"
        </button>
        <select
            class="task-card__assign"
            prop:value=move || choice.get()
            on:change=move |ev| choice.set(event_target_value(&ev))
            disabled=busy
        >
            <option value="">"Select user"</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|u| view! { <option value=u.id>{u.username}</option> })
                    .collect_view()
            }}
        </select>
        <button class="btn" on:click=on_assign disabled=busy>
            {assign_label}
        </button>
        <button class="btn btn--danger" on:click=on_delete disabled=busy>
            "Delete"
        </button>
    }
}
