//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and models the frontend as a
//! pure `(Model, Msg) -> (Model, Vec<Effect>)` transition plus a view
//! function. [`Runtime`] glues the two together over any [`Transport`].
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every mutation is followed by a full relist. There is no optimistic
//!   update beyond clearing the input field.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod runtime;
pub mod types;
pub mod view;

pub use app::{update, EditState, Effect, Model, Msg};
pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use runtime::Runtime;
pub use types::{CreateTodo, Todo, UpdateTodo};
pub use view::{view, FormView, RowView, View};
