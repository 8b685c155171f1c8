//! In-memory document store
//!
//! Same semantics as the remote store, kept in process, with write-failure
//! injection for exercising partial failures.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};
use super::push_id::PushIdGenerator;
use super::traits::DocumentStore;

type Collection = BTreeMap<String, Map<String, Value>>;

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Collection>>,
    ids: Mutex<PushIdGenerator>,
    /// Keys whose writes are rejected
    failing_keys: Mutex<BTreeSet<String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write (update/remove) to `key` fail as unavailable
    pub async fn fail_writes_to(&self, key: &str) {
        self.failing_keys.lock().await.insert(key.to_string());
    }

    pub async fn heal(&self) {
        self.failing_keys.lock().await.clear();
    }

    /// Number of accepted push/update/remove calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Store a raw record under a chosen key, bypassing key generation
    pub async fn insert_raw(&self, collection: &str, key: &str, value: Value) -> DomainResult<()> {
        let record = into_object(value)?;
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), record);
        Ok(())
    }

    async fn check_writable(&self, key: &str) -> DomainResult<()> {
        if self.failing_keys.lock().await.contains(key) {
            return Err(DomainError::Unavailable(format!("write to {} rejected", key)));
        }
        Ok(())
    }
}

fn into_object(value: Value) -> DomainResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::InvalidInput(format!("expected a JSON object, got {}", other))),
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn get_collection(&self, collection: &str) -> DomainResult<Map<String, Value>> {
        let collections = self.collections.lock().await;
        let records = collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .map(|(key, record)| (key.clone(), Value::Object(record.clone())))
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    async fn get(&self, collection: &str, key: &str) -> DomainResult<Option<Value>> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(key))
            .map(|record| Value::Object(record.clone())))
    }

    async fn push(&self, collection: &str, value: Value) -> DomainResult<String> {
        let record = into_object(value)?;
        let key = self.ids.lock().await.next_id();
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(key.clone(), record);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(key)
    }

    async fn update(&self, collection: &str, key: &str, patch: Value) -> DomainResult<()> {
        let patch = into_object(patch)?;
        self.check_writable(key).await?;

        let mut collections = self.collections.lock().await;
        let records = collections.entry(collection.to_string()).or_default();
        let record = records.entry(key.to_string()).or_default();
        for (field, value) in patch {
            if value.is_null() {
                record.remove(&field);
            } else {
                record.insert(field, value);
            }
        }
        // An emptied node no longer exists
        if record.is_empty() {
            records.remove(key);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, collection: &str, key: &str) -> DomainResult<()> {
        self.check_writable(key).await?;
        if let Some(records) = self.collections.lock().await.get_mut(collection) {
            records.remove(key);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.get_collection("tabs").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_and_null_removes() {
        let store = MemoryStore::new();
        let key = store.push("items", json!({ "title": "A", "fonte": "x" })).await.unwrap();
        store.update("items", &key, json!({ "order": 1, "fonte": null })).await.unwrap();
        let record = store.get("items", &key).await.unwrap().unwrap();
        assert_eq!(record, json!({ "title": "A", "order": 1 }));
    }

    #[tokio::test]
    async fn test_update_missing_key_creates_record() {
        let store = MemoryStore::new();
        store.update("tabs", "ghost", json!({ "order": 3 })).await.unwrap();
        assert_eq!(store.get("tabs", "ghost").await.unwrap(), Some(json!({ "order": 3 })));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("tabs", "nothing").await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_key_rejects_writes() {
        let store = MemoryStore::new();
        let key = store.push("tabs", json!({ "name": "A" })).await.unwrap();
        store.fail_writes_to(&key).await;
        let err = store.update("tabs", &key, json!({ "order": 1 })).await.unwrap_err();
        assert!(matches!(err, DomainError::Unavailable(_)));
        assert!(store.remove("tabs", &key).await.is_err());
        store.heal().await;
        store.remove("tabs", &key).await.unwrap();
    }

    #[tokio::test]
    async fn test_push_keys_follow_insertion_order() {
        let store = MemoryStore::new();
        let a = store.push("tabs", json!({ "name": "A" })).await.unwrap();
        let b = store.push("tabs", json!({ "name": "B" })).await.unwrap();
        let keys: Vec<String> = store.get_collection("tabs").await.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![a, b]);
        assert_eq!(store.write_count(), 2);
    }
}
