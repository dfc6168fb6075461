//! Request descriptions for every backend endpoint.
//!
//! DESIGN
//! ======
//! Endpoints are described as plain `ApiRequest` values (method, path, body,
//! bearer) and only executed by `api`. Paths and payloads are therefore
//! checked in unit tests without a browser or a live backend.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde_json::json;

use super::types::{NewTask, Role};
use crate::state::auth::Session;

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A single call to the backend, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, always starting with `/`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Full `Authorization` header value.
    pub authorization: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: String, body: Option<serde_json::Value>) -> Self {
        Self {
            method,
            path,
            body,
            authorization: None,
        }
    }

    /// Attach `Authorization: Bearer <token>` from the session. Without a
    /// token the request goes out bare and the backend decides.
    #[must_use]
    pub fn authorized(mut self, session: &Session) -> Self {
        self.authorization = session.bearer();
        self
    }

    /// Human-readable `METHOD /path` for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} {}", self.method.as_str(), self.path)
    }
}

// =============================================================================
// AUTH
// =============================================================================

pub fn register(username: &str, password: &str, role: Role) -> ApiRequest {
    ApiRequest::new(
        Method::Post,
        "/auth/register".to_owned(),
        Some(json!({ "username": username, "password": password, "role": role })),
    )
}

pub fn login(username: &str, password: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Post,
        "/auth/login".to_owned(),
        Some(json!({ "username": username, "password": password })),
    )
}

// =============================================================================
// TASKS
// =============================================================================

pub fn list_tasks() -> ApiRequest {
    ApiRequest::new(Method::Get, "/tasks".to_owned(), None)
}

pub fn list_user_tasks(user_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("/resources/user-tasks/{user_id}"), None)
}

pub fn create_task(task: &NewTask) -> ApiRequest {
    ApiRequest::new(
        Method::Post,
        "/resources".to_owned(),
        Some(json!({
            "name": task.name,
            "description": task.description,
            "assignee": task.assignee,
        })),
    )
}

pub fn rename_task(task_id: &str, name: &str) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("/tasks/{task_id}"), Some(json!({ "name": name })))
}

pub fn redescribe_task(task_id: &str, description: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Patch,
        format!("/tasks/{task_id}"),
        Some(json!({ "description": description })),
    )
}

pub fn assign_task(task_id: &str, assignee_id: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Patch,
        format!("/tasks/{task_id}/assignee"),
        Some(json!({ "assigneeId": assignee_id })),
    )
}

pub fn delete_task(task_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/tasks/{task_id}"), None)
}

/// Completion is two separate endpoints on the backend, not one setter.
pub fn set_task_completed(task_id: &str, completed: bool) -> ApiRequest {
    let action = if completed { "complete" } else { "uncomplete" };
    ApiRequest::new(Method::Patch, format!("/resources/{task_id}/{action}"), Some(json!({})))
}

// =============================================================================
// USERS
// =============================================================================

pub fn list_users() -> ApiRequest {
    ApiRequest::new(Method::Get, "/users".to_owned(), None)
}

pub fn delete_user(user_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/user/{user_id}"), None)
}

pub fn change_user_role(user_id: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("/user/{user_id}/role"), Some(json!({ "role": role })))
}

pub fn change_username(user_id: &str, username: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Patch,
        format!("/user/{user_id}/username"),
        Some(json!({ "username": username })),
    )
}
