//! Bearer-token credential for the todo API.
//!
//! The token is an explicit value injected into `TodoClient` by whoever owns
//! the session, never read from ambient storage inside this crate. Servers
//! that run without authentication simply get a client with no token.

/// An opaque bearer token attached to every request the client builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The `authorization` header value for this token.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}
