#![forbid(unsafe_code)]

//! HTTP surface for the Registra student-record service.
//!
//! Two handler surfaces share one router: the auth surface (`/users/login`,
//! `/users/profile/{userId}`) and the student CRUD surface (`/students`).
//! Layout: `http/` (router, handlers, response policies), `models.rs`
//! (request/response DTOs), `state.rs` (shared handler state).

pub mod http;
pub mod models;
mod state;

pub use http::router::{ApiServer, ApiServerError};
pub use state::ApiState;
