//! REST API calls against the task backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! the backend is only ever contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics, retries, or
//! touches view state. Call sites decide what to log and show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::{self, ApiRequest};
use super::types::{LoginResponse, NewTask, Role, Task, User};
use crate::config::ApiConfig;
use crate::state::auth::Session;

/// `POST /resources` answers 201 on success; anything else is a failure.
pub const CREATED: u16 = 201;

/// Whether `status` counts as success. With no explicit expectation any 2xx
/// is accepted.
pub(crate) fn status_accepted(status: u16, expected: Option<u16>) -> bool {
    match expected {
        Some(code) => status == code,
        None => (200..300).contains(&status),
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    config: &ApiConfig,
    req: &ApiRequest,
    expected: Option<u16>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    use super::request::Method;

    let url = config.url(&req.path);
    let builder = match req.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    let builder = match req.authorization.as_deref() {
        Some(value) => builder.header("Authorization", value),
        None => builder,
    };
    let resp = match &req.body {
        Some(body) => builder.json(body)?.send().await?,
        None => builder.send().await?,
    };
    if !status_accepted(resp.status(), expected) {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), &body));
    }
    Ok(resp)
}

async fn fetch_json<T: DeserializeOwned>(config: &ApiConfig, req: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(config, &req, None).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

async fn fetch_unit(config: &ApiConfig, req: ApiRequest, expected: Option<u16>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(config, &req, expected).await.map(drop)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req, expected);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn register(config: &ApiConfig, username: &str, password: &str, role: Role) -> Result<(), ApiError> {
    fetch_unit(config, request::register(username, password, role), None).await
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the body
/// lacks `{id, token, role}`.
pub async fn login(config: &ApiConfig, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    fetch_json(config, request::login(username, password)).await
}

// =============================================================================
// TASKS
// =============================================================================

/// Fetch every task (`GET /tasks`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn fetch_all_tasks(config: &ApiConfig, session: &Session) -> Result<Vec<Task>, ApiError> {
    fetch_json(config, request::list_tasks().authorized(session)).await
}

/// Fetch the tasks assigned to `user_id` (`GET /resources/user-tasks/:id`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn fetch_user_tasks(config: &ApiConfig, session: &Session, user_id: &str) -> Result<Vec<Task>, ApiError> {
    fetch_json(config, request::list_user_tasks(user_id).authorized(session)).await
}

/// Create a task via `POST /resources`. Only HTTP 201 counts as success.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and any status other
/// than 201, carrying the backend's message when it sent one.
pub async fn create_task(config: &ApiConfig, session: &Session, task: &NewTask) -> Result<(), ApiError> {
    fetch_unit(config, request::create_task(task).authorized(session), Some(CREATED)).await
}

/// Change a task's name.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn rename_task(config: &ApiConfig, session: &Session, task_id: &str, name: &str) -> Result<(), ApiError> {
    fetch_unit(config, request::rename_task(task_id, name).authorized(session), None).await
}

/// Change a task's description.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn redescribe_task(
    config: &ApiConfig,
    session: &Session,
    task_id: &str,
    description: &str,
) -> Result<(), ApiError> {
    fetch_unit(config, request::redescribe_task(task_id, description).authorized(session), None).await
}

/// Assign a task to a user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn assign_task(
    config: &ApiConfig,
    session: &Session,
    task_id: &str,
    assignee_id: &str,
) -> Result<(), ApiError> {
    fetch_unit(config, request::assign_task(task_id, assignee_id).authorized(session), None).await
}

/// Delete a task.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn delete_task(config: &ApiConfig, session: &Session, task_id: &str) -> Result<(), ApiError> {
    fetch_unit(config, request::delete_task(task_id).authorized(session), None).await
}

/// Mark a task complete or incomplete through the matching endpoint.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn set_task_completed(
    config: &ApiConfig,
    session: &Session,
    task_id: &str,
    completed: bool,
) -> Result<(), ApiError> {
    fetch_unit(config, request::set_task_completed(task_id, completed).authorized(session), None).await
}

// =============================================================================
// USERS
// =============================================================================

/// Fetch every registered user (`GET /users`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn fetch_users(config: &ApiConfig, session: &Session) -> Result<Vec<User>, ApiError> {
    fetch_json(config, request::list_users().authorized(session)).await
}

/// Delete a user account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn delete_user(config: &ApiConfig, session: &Session, user_id: &str) -> Result<(), ApiError> {
    fetch_unit(config, request::delete_user(user_id).authorized(session), None).await
}

/// Change a user's role.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn change_user_role(config: &ApiConfig, session: &Session, user_id: &str, role: Role) -> Result<(), ApiError> {
    fetch_unit(config, request::change_user_role(user_id, role).authorized(session), None).await
}

/// Change a user's username.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn change_username(
    config: &ApiConfig,
    session: &Session,
    user_id: &str,
    username: &str,
) -> Result<(), ApiError> {
    fetch_unit(config, request::change_username(user_id, username).authorized(session), None).await
}
