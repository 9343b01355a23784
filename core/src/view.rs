//! Stateful todo-list view: a local mirror of the remote collection plus the
//! transient UI state around it.
//!
//! # Design
//! `TodoListView` owns the collection mirror, the draft form input, the
//! loading flag, and the single error-message slot. Every operation issues
//! its request, waits for the response, and only then applies or reports:
//! the mirror changes only in response to a successful server round-trip,
//! never speculatively. The one exception allowed is resetting the draft
//! after a successful create.
//!
//! Failures never escape these methods. Each one is logged through the `log`
//! facade with operation context and surfaced to the user as a single
//! message, preferring the server's own wording over the per-operation
//! fallback. The view stays fully interactive after any error.

use std::fmt;

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Draft, Todo, UpdateTodo};

const FETCH_FALLBACK: &str = "Error fetching todos";
const CREATE_FALLBACK: &str = "Error creating todo";
const UPDATE_FALLBACK: &str = "Error updating todo";
const DELETE_FALLBACK: &str = "Error deleting todo";

/// Local mirror of the server's todo collection and the form state around it.
///
/// Starts in the loading state; `load_all` must settle before the list or
/// form is rendered. `Display` produces a plain-text snapshot in which the
/// loading indicator is exclusive with everything else.
#[derive(Debug)]
pub struct TodoListView {
    client: TodoClient,
    todos: Vec<Todo>,
    draft: Draft,
    loading: bool,
    error: Option<String>,
}

impl TodoListView {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
            draft: Draft::default(),
            loading: true,
            error: None,
        }
    }

    /// The mirrored collection, in server order with creates appended.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the form input, for the host to bind edits to.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The most recent failure's user-visible message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the full collection and replace the mirror with the result.
    ///
    /// On failure the mirror is reset to empty and the error slot is set.
    /// The loading flag clears once the request settles either way.
    pub fn load_all(&mut self, transport: &dyn Transport) {
        self.loading = true;
        self.error = None;
        let outcome = transport
            .execute(self.client.build_list_todos())
            .map_err(ApiError::from)
            .and_then(|resp| self.client.parse_list_todos(resp));
        match outcome {
            Ok(todos) => {
                log::debug!("fetched {} todos", todos.len());
                self.todos = todos;
            }
            Err(err) => {
                self.todos.clear();
                self.report("fetching todos", FETCH_FALLBACK, err);
            }
        }
        self.loading = false;
    }

    /// Submit the current draft. Suppressed entirely when the trimmed title
    /// is blank: no request is issued and nothing changes.
    ///
    /// On success the server's todo (with its assigned id) is appended
    /// verbatim and the draft resets to its empty defaults. On failure both
    /// the draft and the mirror are left untouched.
    pub fn create(&mut self, transport: &dyn Transport) {
        if !self.draft.is_submittable() {
            return;
        }
        self.error = None;
        let input = self.draft.to_create();
        let outcome = self
            .client
            .build_create_todo(&input)
            .and_then(|req| transport.execute(req).map_err(ApiError::from))
            .and_then(|resp| self.client.parse_create_todo(resp));
        match outcome {
            Ok(Some(todo)) => {
                log::debug!("created todo {}", todo.id);
                self.todos.push(todo);
                self.draft = Draft::default();
            }
            // 2xx with a body that is not a todo object: apply nothing and
            // keep the draft so the user can resubmit.
            Ok(None) => log::warn!("create returned a malformed payload; ignoring"),
            Err(err) => self.report("creating todo", CREATE_FALLBACK, err),
        }
    }

    /// Request `completed = !completed` for the given item and replace the
    /// local copy with the server's returned object verbatim, absorbing any
    /// other server-side field changes. The local flag is never flipped
    /// optimistically.
    pub fn toggle_complete(&mut self, transport: &dyn Transport, id: Uuid, completed: bool) {
        self.error = None;
        let input = UpdateTodo {
            completed: Some(!completed),
            ..UpdateTodo::default()
        };
        let outcome = self
            .client
            .build_update_todo(id, &input)
            .and_then(|req| transport.execute(req).map_err(ApiError::from))
            .and_then(|resp| self.client.parse_update_todo(resp));
        match outcome {
            Ok(Some(updated)) => {
                log::debug!("updated todo {id}");
                // A missing slot means the row is already gone locally; the
                // late response is dropped rather than re-inserted.
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
            }
            Ok(None) => log::warn!("update returned a malformed payload; ignoring"),
            Err(err) => self.report("updating todo", UPDATE_FALLBACK, err),
        }
    }

    /// Delete the given item on the server, then drop it from the mirror.
    ///
    /// Removing an id that is already gone locally is a no-op, so duplicate
    /// submissions remove at most one item no matter how many responses
    /// report success.
    pub fn delete(&mut self, transport: &dyn Transport, id: Uuid) {
        self.error = None;
        let outcome = transport
            .execute(self.client.build_delete_todo(id))
            .map_err(ApiError::from)
            .and_then(|resp| self.client.parse_delete_todo(resp));
        match outcome {
            Ok(()) => {
                log::debug!("deleted todo {id}");
                self.todos.retain(|t| t.id != id);
            }
            Err(err) => self.report("deleting todo", DELETE_FALLBACK, err),
        }
    }

    fn report(&mut self, context: &str, fallback: &str, err: ApiError) {
        log::error!("{context}: {err}");
        self.error = Some(err.server_message().unwrap_or(fallback).to_string());
    }
}

impl fmt::Display for TodoListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            return writeln!(f, "Loading todos...");
        }
        if let Some(error) = &self.error {
            writeln!(f, "error: {error}")?;
        }
        if self.todos.is_empty() {
            return writeln!(f, "No todos yet. Add one above!");
        }
        for todo in &self.todos {
            let mark = if todo.completed { 'x' } else { ' ' };
            write!(f, "[{mark}] {} ({:?})", todo.title, todo.priority)?;
            if let Some(description) = &todo.description {
                write!(f, " {description}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
