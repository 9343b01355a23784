//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds a `base_url` and an optional bearer token and carries
//! no mutable state between calls. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. A `Transport` executes the actual HTTP
//! round-trip, keeping this layer deterministic and free of I/O.
//!
//! Any 2xx status counts as success. Non-2xx bodies are probed for the
//! conventional `{"message": ...}` field so the error carries the server's
//! own wording when it has one.

use uuid::Uuid;

use crate::auth::AuthToken;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The credential, when present, is attached to every
/// built request as an `authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    token: Option<AuthToken>,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token; the caller owns where the token comes from.
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    fn base_headers(&self) -> Vec<(String, String)> {
        match &self.token {
            Some(token) => vec![("authorization".to_string(), token.header_value())],
            None => Vec::new(),
        }
    }

    fn json_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.base_headers();
        headers.push(("content-type".to_string(), "application/json".to_string()));
        headers
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: self.base_headers(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: self.json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_todo(&self, id: Uuid, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{id}", self.base_url),
            headers: self.json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: self.base_headers(),
            body: None,
        }
    }

    /// Parse a list response. A 2xx body that is not a JSON array counts as
    /// an empty collection, and array items that do not decode as todos are
    /// dropped — a lenient server never crashes the list.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(serde_json::Value::Array(items)) => Ok(items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// Parse a create response. `Ok(None)` means the server answered 2xx but
    /// the body was not a todo object; the caller must treat that as a no-op.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        check_success(&response)?;
        Ok(serde_json::from_str(&response.body).ok())
    }

    /// Parse an update response. Same leniency as `parse_create_todo`.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        check_success(&response)?;
        Ok(serde_json::from_str(&response.body).ok())
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant, carrying
/// the server's `{"message": ...}` field when the body has one.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    let message = extract_message(&response.body);
    if response.status == 404 {
        return Err(ApiError::NotFound { message });
    }
    Err(ApiError::Http {
        status: response.status,
        message,
    })
}

/// Pull the conventional `message` field out of an error body, if present.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            description: Some("two liters".to_string()),
            priority: Priority::High,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "two liters");
        assert_eq!(body["priority"], "high");
    }

    #[test]
    fn build_update_todo_produces_correct_request() {
        let id = Uuid::nil();
        let input = UpdateTodo {
            completed: Some(true),
            ..UpdateTodo::default()
        };
        let req = client().build_update_todo(id, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:3000/todos/00000000-0000-0000-0000-000000000000"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["completed"], true);
        assert!(body.get("title").is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let id = Uuid::nil();
        let req = client().build_delete_todo(id);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn token_attaches_bearer_header_to_every_request() {
        let client = client().with_token(AuthToken::new("secret"));

        let req = client.build_list_todos();
        assert_eq!(
            req.headers,
            vec![("authorization".to_string(), "Bearer secret".to_string())]
        );

        let input = CreateTodo {
            title: "With auth".to_string(),
            description: None,
            priority: Priority::Medium,
        };
        let req = client.build_create_todo(&input).unwrap();
        assert!(req
            .headers
            .contains(&("authorization".to_string(), "Bearer secret".to_string())));
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));

        let req = client.build_delete_todo(Uuid::nil());
        assert_eq!(
            req.headers,
            vec![("authorization".to_string(), "Bearer secret".to_string())]
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"id":"00000000-0000-0000-0000-000000000001","title":"Test","completed":false}]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test");
        assert_eq!(todos[0].priority, Priority::Medium);
    }

    #[test]
    fn parse_list_todos_non_array_body_is_empty() {
        let todos = client()
            .parse_list_todos(response(200, r#"{"unexpected":"object"}"#))
            .unwrap();
        assert!(todos.is_empty());

        let todos = client().parse_list_todos(response(200, "not json")).unwrap();
        assert!(todos.is_empty());

        let todos = client().parse_list_todos(response(200, "")).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_list_todos_drops_undecodable_items() {
        let body = r#"[
            {"id":"00000000-0000-0000-0000-000000000001","title":"Good"},
            {"title":"No id"},
            42
        ]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Good");
    }

    #[test]
    fn parse_create_todo_success() {
        let body = r#"{"id":"00000000-0000-0000-0000-000000000001","title":"New","priority":"low","completed":false}"#;
        let todo = client()
            .parse_create_todo(response(201, body))
            .unwrap()
            .unwrap();
        assert_eq!(todo.title, "New");
        assert_eq!(todo.priority, Priority::Low);
    }

    #[test]
    fn parse_create_todo_accepts_plain_200() {
        let body = r#"{"id":"00000000-0000-0000-0000-000000000001","title":"New"}"#;
        assert!(client().parse_create_todo(response(200, body)).unwrap().is_some());
    }

    #[test]
    fn parse_create_todo_non_object_body_is_none() {
        assert!(client().parse_create_todo(response(201, "[]")).unwrap().is_none());
        assert!(client().parse_create_todo(response(201, "null")).unwrap().is_none());
        assert!(client().parse_create_todo(response(201, "")).unwrap().is_none());
    }

    #[test]
    fn parse_create_todo_error_carries_server_message() {
        let err = client()
            .parse_create_todo(response(400, r#"{"message":"Title is required"}"#))
            .unwrap_err();
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Title is required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_update_todo_success() {
        let body = r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Updated","completed":true}"#;
        let todo = client()
            .parse_update_todo(response(200, body))
            .unwrap()
            .unwrap();
        assert_eq!(todo.title, "Updated");
        assert!(todo.completed);
    }

    #[test]
    fn parse_update_todo_not_found() {
        let err = client()
            .parse_update_todo(response(404, r#"{"message":"Todo not found"}"#))
            .unwrap_err();
        match err {
            ApiError::NotFound { message } => {
                assert_eq!(message.as_deref(), Some("Todo not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found_without_message() {
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { message: None }));
    }

    #[test]
    fn non_json_error_body_has_no_message() {
        let err = client()
            .parse_list_todos(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, message: None }));
    }
}
