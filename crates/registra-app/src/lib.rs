#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Registra application bootstrap wiring.
//!
//! Layout: `bootstrap.rs` (logging, settings, and service wiring),
//! `error.rs` (application-level errors).

pub mod bootstrap;
pub mod error;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};
