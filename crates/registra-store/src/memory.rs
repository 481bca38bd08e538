//! In-process record store backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::record::{KEY_ATTRIBUTE, StudentRecord};
use crate::store::RecordStore;

/// Hash-map backed [`RecordStore`] with the same observable semantics as the
/// managed single-table service it stands in for.
///
/// The table is constructed with its fixed name and secondary indexes; both
/// come from configuration, never from requests.
pub struct MemoryRecordStore {
    table: String,
    indexes: Vec<(String, String)>,
    records: RwLock<HashMap<String, StudentRecord>>,
}

impl MemoryRecordStore {
    /// Create an empty table with the given name and `(index name, indexed
    /// attribute)` pairs.
    #[must_use]
    pub fn new(table: impl Into<String>, indexes: Vec<(String, String)>) -> Self {
        let table = table.into();
        debug!(table = %table, indexes = indexes.len(), "memory record store initialised");
        Self {
            table,
            indexes,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Name of the backing table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, StudentRecord>>> {
        self.records
            .read()
            .map_err(|_| StoreError::backend(operation, "table lock poisoned"))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, StudentRecord>>> {
        self.records
            .write()
            .map_err(|_| StoreError::backend(operation, "table lock poisoned"))
    }

    fn indexed_attribute(&self, index: &str) -> Result<&str> {
        self.indexes
            .iter()
            .find(|(name, _)| name == index)
            .map(|(_, attribute)| attribute.as_str())
            .ok_or_else(|| StoreError::UnknownIndex {
                name: index.to_string(),
            })
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: &str) -> Result<Option<StudentRecord>> {
        Ok(self.read("get")?.get(key).cloned())
    }

    async fn put(&self, record: StudentRecord) -> Result<()> {
        let Some(key) = record.student_id().map(str::to_owned) else {
            return Err(StoreError::MissingKey {
                attribute: KEY_ATTRIBUTE,
            });
        };
        self.write("put")?.insert(key, record);
        Ok(())
    }

    async fn update_field(&self, key: &str, field: &str, value: Value) -> Result<StudentRecord> {
        let mut records = self.write("update_field")?;
        let record = records.entry(key.to_string()).or_insert_with(|| {
            let mut created = StudentRecord::default();
            created.set(KEY_ATTRIBUTE, Value::String(key.to_string()));
            created
        });
        record.set(field, value.clone());

        let mut changed = Map::new();
        changed.insert(field.to_string(), value);
        Ok(StudentRecord::new(changed))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.write("delete")?.remove(key);
        Ok(())
    }

    async fn query_by_index(
        &self,
        index: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StudentRecord>> {
        let attribute = self.indexed_attribute(index)?;
        if attribute != field {
            return Err(StoreError::NotIndexed {
                index: index.to_string(),
                attribute: field.to_string(),
            });
        }

        let records = self.read("query_by_index")?;
        let mut matches: Vec<StudentRecord> = records
            .values()
            .filter(|record| record.get_str(field) == Some(value))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.student_id().cmp(&b.student_id()));
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> MemoryRecordStore {
        MemoryRecordStore::new(
            "students",
            vec![("email-index".to_string(), "email".to_string())],
        )
    }

    fn record(value: Value) -> StudentRecord {
        serde_json::from_value(value).expect("record")
    }

    #[tokio::test]
    async fn put_then_get_round_trips() -> anyhow::Result<()> {
        let store = store();
        let original = record(json!({"studentId": "s-1", "name": "Ada", "credits": 12}));
        store.put(original.clone()).await?;

        assert_eq!(store.get("s-1").await?, Some(original));
        assert_eq!(store.get("s-2").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn put_replaces_the_whole_record() -> anyhow::Result<()> {
        let store = store();
        store
            .put(record(json!({"studentId": "s-1", "name": "Ada"})))
            .await?;
        store
            .put(record(json!({"studentId": "s-1", "email": "ada@example.com"})))
            .await?;

        let stored = store.get("s-1").await?.expect("record");
        assert_eq!(stored.get("name"), None);
        assert_eq!(stored.get_str("email"), Some("ada@example.com"));
        Ok(())
    }

    #[tokio::test]
    async fn put_without_the_key_attribute_is_rejected() {
        let store = store();
        let err = store
            .put(record(json!({"name": "Ada"})))
            .await
            .expect_err("missing key");
        assert!(matches!(err, StoreError::MissingKey { attribute } if attribute == "studentId"));
    }

    #[tokio::test]
    async fn update_field_touches_only_the_named_attribute() -> anyhow::Result<()> {
        let store = store();
        store
            .put(record(json!({
                "studentId": "s-1",
                "email": "ada@example.com",
                "password": "pw",
                "name": "old",
            })))
            .await?;

        let changed = store
            .update_field("s-1", "name", json!("new"))
            .await?;
        assert_eq!(
            serde_json::to_value(changed)?,
            json!({"name": "new"})
        );

        let stored = store.get("s-1").await?.expect("record");
        assert_eq!(stored.get_str("name"), Some("new"));
        assert_eq!(stored.get_str("email"), Some("ada@example.com"));
        assert_eq!(stored.get_str("password"), Some("pw"));
        Ok(())
    }

    #[tokio::test]
    async fn update_field_creates_the_record_when_absent() -> anyhow::Result<()> {
        let store = store();
        store.update_field("s-9", "name", json!("late")).await?;

        let created = store.get("s-9").await?.expect("record");
        assert_eq!(created.student_id(), Some("s-9"));
        assert_eq!(created.get_str("name"), Some("late"));
        assert_eq!(created.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> anyhow::Result<()> {
        let store = store();
        store
            .put(record(json!({"studentId": "s-1", "name": "Ada"})))
            .await?;

        store.delete("s-1").await?;
        assert_eq!(store.get("s-1").await?, None);

        store.delete("s-1").await?;
        store.delete("never-existed").await?;
        Ok(())
    }

    #[tokio::test]
    async fn query_by_index_matches_exactly() -> anyhow::Result<()> {
        let store = store();
        store
            .put(record(
                json!({"studentId": "s-1", "email": "ada@example.com"}),
            ))
            .await?;
        store
            .put(record(
                json!({"studentId": "s-2", "email": "grace@example.com"}),
            ))
            .await?;

        let hits = store
            .query_by_index("email-index", "email", "ada@example.com")
            .await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].student_id(), Some("s-1"));

        let misses = store
            .query_by_index("email-index", "email", "nobody@example.com")
            .await?;
        assert!(misses.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn query_validates_the_index_and_attribute() {
        let store = store();

        let unknown = store.query_by_index("name-index", "name", "Ada").await;
        assert!(matches!(unknown, Err(StoreError::UnknownIndex { name }) if name == "name-index"));

        let mismatched = store.query_by_index("email-index", "name", "Ada").await;
        assert!(matches!(mismatched, Err(StoreError::NotIndexed { .. })));
    }
}
