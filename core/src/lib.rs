//! Client core for a todo-list view backed by a remote REST collection.
//!
//! # Overview
//! `TodoListView` keeps a local mirror of the server's todo collection and
//! exposes the operations a list UI needs: load everything, create from a
//! draft, toggle completion, delete. Every mutation is delegated to the
//! server and the mirror is updated only from the server's response — the
//! mirror is a cache, never the source of truth.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url` and an optional
//!   bearer token. Each CRUD operation is split into `build_*` (produces a
//!   request) and `parse_*` (consumes a response), so the I/O boundary is
//!   explicit.
//! - The view drives I/O through the `Transport` trait, injected by the
//!   caller. No networking happens inside this crate; tests script the
//!   transport, the integration suite plugs in a real HTTP agent.
//! - Server failures never escape the view. Each one lands in a single
//!   user-visible message slot and is logged through the `log` facade.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use auth::AuthToken;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{CreateTodo, Draft, Priority, Todo, UpdateTodo};
pub use view::TodoListView;
