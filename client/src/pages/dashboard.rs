//! Admin dashboard: create a task and optionally assign it.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the admin landing route. A create succeeds only on `201 Created`,
//! after which the admin is taken to the all-tasks list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::{AdminLinks, NavBar};
use crate::components::role_gate::RoleGate;
use crate::config::ApiConfig;
use crate::net::types::{NewTask, Role};
use crate::pages::users::UserView;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

pub(crate) const CREATE_FAILED: &str = "Error creating task. Please try again later.";

/// Build the create payload. The name is required; an empty assignee leaves
/// the task unassigned.
pub(crate) fn validate_new_task(name: &str, description: &str, assignee: &str) -> Result<NewTask, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a task name.");
    }
    Ok(NewTask {
        name: name.to_owned(),
        description: description.trim().to_owned(),
        assignee: assignee.trim().to_owned(),
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RoleGate required=Role::Admin>
            <DashboardContent/>
        </RoleGate>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let users_view = UserView::from_context();
    let users = users_view.users;
    Effect::new(move || users_view.load(false));

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let assignee = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let task = match validate_new_task(&name.get_untracked(), &description.get_untracked(), &assignee.get_untracked()) {
            Ok(task) => task,
            Err(msg) => {
                ui.update(|u| {
                    u.error(msg);
                });
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            let session = auth.get_untracked().session;
            leptos::task::spawn_local(async move {
                match crate::net::api::create_task(&config, &session, &task).await {
                    Ok(()) => {
                        crate::util::notify::report_success(ui, "Task Created", "The task has been created successfully!");
                        name.set(String::new());
                        description.set(String::new());
                        assignee.set(String::new());
                        navigate(crate::util::auth::ALL_TASKS_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => crate::util::notify::report_failure(ui, "create task", &err, CREATE_FAILED),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, auth, task);
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <NavBar title="Dashboard">
                <AdminLinks/>
            </NavBar>
            <main class="page__body">
                <section class="card">
                    <h1>"Create Task"</h1>
                    <form class="task-form" on:submit=on_submit>
                        <label class="task-form__label">
                            "Name"
                            <input
                                class="task-form__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="task-form__label">
                            "Description"
                            <textarea
                                class="task-form__textarea"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="task-form__label">
                            "Assignee"
                            <select
                                class="task-form__input"
                                prop:value=move || assignee.get()
                                on:change=move |ev| assignee.set(event_target_value(&ev))
                            >
                                <option value="">"Unassigned"</option>
                                {move || {
                                    users
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|u| view! { <option value=u.id>{u.username}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create Task" }}
                        </button>
                    </form>
                </section>
            </main>
        </div>
    }
}
