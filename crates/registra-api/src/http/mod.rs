//! HTTP surface modules (router, handlers, response policies).

/// Login and profile handlers.
pub mod auth;
/// Fixed CORS header application.
pub mod cors;
/// Error wrapper and response mapping.
pub mod errors;
/// Decimal rendering policy for record payloads.
pub mod render;
/// Router construction and server host.
pub mod router;
/// Student CRUD handlers.
pub mod students;
