//! The record store boundary consumed by the HTTP surface.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::record::StudentRecord;

/// Single-table record store with named secondary indexes.
///
/// Semantics follow the managed key-value service this API fronts: `put`
/// replaces whole records, `update_field` mutates one attribute and creates
/// the record when absent, `delete` is idempotent, and `query_by_index`
/// performs exact-match lookups on a named index.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a record by primary key.
    async fn get(&self, key: &str) -> Result<Option<StudentRecord>>;

    /// Write a full record, replacing any existing record with the same key.
    ///
    /// Records without a string key attribute are rejected.
    async fn put(&self, record: StudentRecord) -> Result<()>;

    /// Set a single attribute on the record at `key`, leaving every other
    /// attribute untouched, and return the attributes that changed.
    ///
    /// Creates the record (key attribute plus the named field) when absent.
    async fn update_field(&self, key: &str, field: &str, value: Value) -> Result<StudentRecord>;

    /// Remove the record at `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Exact-match lookup of `field == value` on the named secondary index.
    async fn query_by_index(
        &self,
        index: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StudentRecord>>;
}

/// Shared handle to a record store backend.
pub type SharedStore = Arc<dyn RecordStore>;
