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

//! Single-table record storage for Registra.
//!
//! Layout: `record.rs` (open-map student records), `store.rs` (the
//! `RecordStore` boundary consumed by the HTTP surface), `memory.rs`
//! (hash-map backend), `error.rs` (error taxonomy).

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use error::{Result as StoreResult, StoreError};
pub use memory::MemoryRecordStore;
pub use record::{KEY_ATTRIBUTE, StudentRecord};
pub use store::{RecordStore, SharedStore};
