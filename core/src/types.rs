//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates. Server
//! payloads are loosely shaped (optional `description`, `priority` the server
//! may omit), so every optional field carries `#[serde(default)]` — defaults
//! are applied once at the deserialization boundary, never checked ad hoc at
//! use sites.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Importance of a todo item.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A single todo item returned by the API.
///
/// `id` is assigned by the server and never invented or mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

/// Unsubmitted form input for a new todo. Client-only, never persisted.
///
/// `Default` is the empty form; the view resets to it after a successful
/// create and only then.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Draft {
    /// Whether submitting this draft should issue a request at all.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Convert to the create payload. A blank description is omitted rather
    /// than sent as an empty string.
    pub fn to_create(&self) -> CreateTodo {
        CreateTodo {
            title: self.title.clone(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            priority: self.priority,
        }
    }
}

/// Request payload for creating a new todo. The server assigns the id and
/// defaults `completed` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
