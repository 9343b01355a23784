//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." Both status variants carry the server's optional human-readable
//! message (the conventional `{"message": ...}` body field) so the view can
//! prefer it over a per-operation fallback string.
//!
//! A malformed *success* payload is not an error: a non-array list body
//! parses to an empty collection and a non-object create/update body parses
//! to `None`. Only transport failures, non-2xx statuses, and request
//! serialization failures surface here.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `TodoClient` parse methods and transport execution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found{}", fmt_message(.message))]
    NotFound { message: Option<String> },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}{}", fmt_message(.message))]
    Http { status: u16, message: Option<String> },

    /// The HTTP round-trip itself failed; no response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// The server-supplied human-readable message, when one was present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message } | ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.0)
    }
}

fn fmt_message(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}
