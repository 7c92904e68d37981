//! In-memory content store.
//!
//! Suitable for tests and the editor's in-process preview; nothing written
//! here survives the process.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;

use crate::error::StorageError;
use crate::ContentStore;

/// In-memory implementation of [`ContentStore`] backed by a `DashMap`.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    entries: DashMap<String, String>,
}

impl MemoryContentStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        trace!(key, len = value.len(), "Storing entry");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|e| e.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryContentStore::new();

        assert!(store.get("abc").await.unwrap().is_none());

        store.set("abc", "payload").await.unwrap();
        assert_eq!(store.get("abc").await.unwrap().as_deref(), Some("payload"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryContentStore::new();

        store.set("abc", "one").await.unwrap();
        store.set("abc", "two").await.unwrap();

        assert_eq!(store.get("abc").await.unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = MemoryContentStore::new();

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }
}
