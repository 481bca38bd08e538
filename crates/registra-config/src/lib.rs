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

//! Runtime settings for the Registra service.
//!
//! Layout: `settings.rs` (the `Settings` model and environment loader),
//! `error.rs` (typed configuration errors).

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::Settings;
