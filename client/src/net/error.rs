//! Error type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, rejected statuses, and undecodable bodies all land in
//! one enum so call sites can log and notify uniformly without aborting the
//! view. None of these is ever fatal to the application.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("transport error: {0}")]
    Transport(String),
    /// The backend answered with a status the caller does not accept.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP calls are only issued from the hydrated browser app.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, extracting the backend's message from `body`.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: backend_message(body),
        }
    }

    /// Text for a user-facing notification: the backend's message verbatim
    /// when it sent one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message), ..
            } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status of a rejected call, if there was a response at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Longest plain-text body shown to the user verbatim.
const MAX_PLAIN_MESSAGE_CHARS: usize = 200;

/// Pull a human-readable message out of an error body.
///
/// JSON bodies are searched for `message`, then `error`. Non-JSON bodies are
/// used as-is only when short and not markup, so a proxy's HTML error page
/// never reaches a notice.
pub(crate) fn backend_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key))
            .filter_map(serde_json::Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_owned),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Ok(_) => None,
        Err(_) if trimmed.starts_with('<') || trimmed.chars().count() > MAX_PLAIN_MESSAGE_CHARS => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
