//! Shared wire DTOs for the task backend's REST API.
//!
//! DESIGN
//! ======
//! Shapes follow the backend's JSON (Mongo-style `_id` keys) so responses
//! can be stored as-is and patched locally after a successful mutation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Privilege level attached to a user and to the browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Both roles, in the order they are offered in selects.
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// Wire/storage spelling of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Human-readable label for selects and listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }

    /// Parse a stored or submitted role string. Anything other than the two
    /// known spellings yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// A registered account as returned by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    /// Missing in some backend projections; treated as a regular user.
    #[serde(default)]
    pub role: Role,
}

/// The user a task is assigned to, as embedded in task payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Empty when the backend only sent the bare id.
    #[serde(default)]
    pub username: String,
}

impl From<&User> for Assignee {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

/// A task as returned by the task list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `None` when the task is unassigned.
    #[serde(default, deserialize_with = "deserialize_assignee")]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub completed: bool,
}

/// Successful `POST /auth/login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Identifier of the logged-in user.
    pub id: String,
    pub token: String,
    /// Stored verbatim; an unknown value simply fails every role gate.
    pub role: String,
}

/// Body of `POST /resources`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    /// Identifier of the chosen user; empty when none was selected.
    pub assignee: String,
}

/// Accepts an absent/`null` assignee, a bare id string, or an embedded
/// user object.
fn deserialize_assignee<'de, D>(deserializer: D) -> Result<Option<Assignee>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(id) if id.is_empty() => Ok(None),
        serde_json::Value::String(id) => Ok(Some(Assignee {
            id,
            username: String::new(),
        })),
        object @ serde_json::Value::Object(_) => serde_json::from_value(object)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected assignee object, id string, or null")),
    }
}
