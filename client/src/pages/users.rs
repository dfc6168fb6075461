//! Admin user management: list, delete, change role, rename.
//!
//! SYSTEM CONTEXT
//! ==============
//! `UserView` also backs the assignee pickers on the dashboard and the
//! all-tasks page, which only need the list and log failures quietly.

#![allow(clippy::unused_async)]

use std::future::Future;

use leptos::prelude::*;

use crate::components::nav_bar::{AdminLinks, NavBar};
use crate::components::prompt_dialog::PromptDialog;
use crate::components::role_gate::RoleGate;
use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::pages::task_actions::Messages;
use crate::state::auth::{AuthState, Session};
use crate::state::ui::UiState;
use crate::state::users::{UserPatch, UsersState};
use crate::util::lifetime::ViewLifetime;

pub(crate) const FETCH_USERS_FAILED: &str = "Error fetching users. Please try again later.";

pub(crate) const DELETE_USER: Messages = Messages {
    operation: "delete user",
    success_title: "Deleted",
    success_text: "User has been deleted.",
    failure: "Error deleting user. Please try again later.",
};

pub(crate) const CHANGE_ROLE: Messages = Messages {
    operation: "change user role",
    success_title: "Updated",
    success_text: "User role has been updated.",
    failure: "Error updating user role. Please try again later.",
};

pub(crate) const CHANGE_USERNAME: Messages = Messages {
    operation: "change username",
    success_title: "Updated",
    success_text: "Username has been updated.",
    failure: "Error updating username. Please try again later.",
};

#[derive(Clone)]
pub(crate) struct UserView {
    pub config: ApiConfig,
    pub auth: RwSignal<AuthState>,
    pub users: RwSignal<UsersState>,
    pub ui: RwSignal<UiState>,
    pub lifetime: ViewLifetime,
}

impl UserView {
    pub fn from_context() -> Self {
        Self {
            config: expect_context::<ApiConfig>(),
            auth: expect_context::<RwSignal<AuthState>>(),
            users: expect_context::<RwSignal<UsersState>>(),
            ui: expect_context::<RwSignal<UiState>>(),
            lifetime: ViewLifetime::for_current_view(),
        }
    }

    pub fn session(&self) -> Session {
        self.auth.get_untracked().session
    }

    /// Fetch `GET /users`. With `notify`, a failure also raises a notice.
    pub fn load(&self, notify: bool) {
        self.users.update(UsersState::begin_load);

        #[cfg(feature = "hydrate")]
        {
            let view = self.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_users(&view.config, &view.session()).await;
                if !view.lifetime.is_alive() {
                    return;
                }
                if let Err(err) = &result {
                    if notify {
                        crate::util::notify::report_failure(view.ui, "fetch users", err, FETCH_USERS_FAILED);
                    } else {
                        crate::util::notify::log_failure("fetch users", err);
                    }
                }
                view.users.update(|s| s.finish_load(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notify;
            self.users.update(|s| s.finish_load(Err(ApiError::Unavailable)));
        }
    }

    /// Run one mutation for `user_id` unless another is already in flight.
    pub fn mutate<F, Fut>(&self, user_id: String, patch: UserPatch, messages: Messages, call: F)
    where
        F: FnOnce(ApiConfig, Session) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let claimed = self.users.try_update(|s| s.begin(&user_id)).unwrap_or(false);
        if !claimed {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let view = self.clone();
            leptos::task::spawn_local(async move {
                let outcome = call(view.config.clone(), view.session()).await;
                if !view.lifetime.is_alive() {
                    view.users.update(|s| s.finish(&user_id));
                    return;
                }
                let mut settled = Ok(());
                view.users.update(|s| settled = s.settle(&user_id, outcome, patch));
                match settled {
                    Ok(()) => crate::util::notify::report_success(view.ui, messages.success_title, messages.success_text),
                    Err(err) => crate::util::notify::report_failure(view.ui, messages.operation, &err, messages.failure),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (call, patch, messages);
            self.users.update(|s| s.finish(&user_id));
        }
    }

    pub fn delete(&self, user_id: String) {
        let id = user_id.clone();
        self.mutate(user_id, UserPatch::Delete, DELETE_USER, move |config, session| async move {
            crate::net::api::delete_user(&config, &session, &id).await
        });
    }

    pub fn set_role(&self, user_id: String, role: Role) {
        let id = user_id.clone();
        self.mutate(user_id, UserPatch::SetRole(role), CHANGE_ROLE, move |config, session| async move {
            crate::net::api::change_user_role(&config, &session, &id, role).await
        });
    }

    pub fn rename(&self, user_id: String, username: String) {
        let id = user_id.clone();
        let name = username.clone();
        self.mutate(user_id, UserPatch::Rename(username), CHANGE_USERNAME, move |config, session| async move {
            crate::net::api::change_username(&config, &session, &id, &name).await
        });
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RoleGate required=Role::Admin>
            <UsersContent/>
        </RoleGate>
    }
}

#[component]
fn UsersContent() -> impl IntoView {
    let view_ctx = UserView::from_context();
    let users = view_ctx.users;

    let loader = view_ctx.clone();
    Effect::new(move || loader.load(true));

    let editing = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());

    let on_cancel = Callback::new(move |()| editing.set(None));
    let submit_ctx = view_ctx.clone();
    let on_submit = Callback::new(move |username: String| {
        if let Some(user_id) = editing.get_untracked() {
            submit_ctx.rename(user_id, username);
        }
        editing.set(None);
    });

    let rows_ctx = view_ctx.clone();
    let rows = move || {
        let state = users.get();
        if state.loading && state.items.is_empty() {
            return view! { <p class="page__status">"Loading users..."</p> }.into_any();
        }
        if state.items.is_empty() && state.error.is_some() {
            return view! { <p class="page__status page__status--error">"Could not load users."</p> }.into_any();
        }
        if state.items.is_empty() {
            return view! { <p class="page__status">"No users."</p> }.into_any();
        }
        let pending = state.pending.clone();
        view! {
            <table class="user-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Role"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {state
                        .items
                        .into_iter()
                        .map(|user| {
                            let busy = pending.contains(&user.id);
                            view! { <UserRow user=user busy=busy ctx=rows_ctx.clone() editing=editing draft=draft/> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <NavBar title="Users">
                <AdminLinks/>
            </NavBar>
            <main class="page__body">{rows}</main>
            {move || {
                editing
                    .get()
                    .map(|_| {
                        view! {
                            <PromptDialog
                                title="Edit username"
                                value=draft
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
fn UserRow(
    user: User,
    busy: bool,
    ctx: UserView,
    editing: RwSignal<Option<String>>,
    draft: RwSignal<String>,
) -> impl IntoView {
    let id = user.id.clone();
    let role_ctx = ctx.clone();
    let role_id = id.clone();
    let on_role = move |ev: leptos::ev::Event| {
        if let Some(role) = Role::parse(&event_target_value(&ev)) {
            role_ctx.set_role(role_id.clone(), role);
        }
    };
    let delete_id = id.clone();
    let on_delete = move |_| ctx.delete(delete_id.clone());
    let current_name = user.username.clone();
    let on_edit = move |_| {
        draft.set(current_name.clone());
        editing.set(Some(id.clone()));
    };
    let role = user.role;

    view! {
        <tr class="user-table__row" class:user-table__row--pending=busy>
            <td>{user.username}</td>
            <td>
                <select prop:value=role.as_str() on:change=on_role disabled=busy>
                    {Role::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.as_str() selected={r == role}>{r.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td class="user-table__actions">
                <button class="btn" on:click=on_edit disabled=busy>
                    "Edit Username"
                </button>
                <button class="btn btn--danger" on:click=on_delete disabled=busy>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
