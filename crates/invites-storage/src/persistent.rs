//! Persistent content store backed by redb.
//!
//! A single table maps invite keys to serialized record text. The database
//! file lives in the application data directory, so stored invitations
//! survive restarts until the store is cleared externally.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::ContentStore;

// Key: invite key, Value: serialized record JSON
const INVITES: TableDefinition<&str, &str> = TableDefinition::new("invites");

/// Persistent implementation of [`ContentStore`] using a redb database.
#[derive(Clone)]
pub struct RedbContentStore {
    db: Arc<Database>,
}

impl RedbContentStore {
    /// Open or create the database at the given file path.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(db_path).map_err(|e| StorageError::Database(e.to_string()))?;

        let store = Self { db: Arc::new(db) };
        store.init_table()?;

        info!(path = %db_path.display(), "Opened invite store");
        Ok(store)
    }

    /// Default database path under the given data directory.
    pub fn default_path(data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join("invites.redb")
    }

    fn init_table(&self) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        write_txn
            .open_table(INVITES)
            .map_err(|e| StorageError::Database(e.to_string()))?;
        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        debug!("Initialized invite table");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for RedbContentStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(INVITES)
                .map_err(|e| StorageError::Database(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        debug!(key, len = value.len(), "Stored invite record");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        let table = read_txn
            .open_table(INVITES)
            .map_err(|e| StorageError::Database(e.to_string()))?;
        let value = table
            .get(key)
            .map_err(|e| StorageError::Database(e.to_string()))?
            .map(|guard| guard.value().to_string());

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbContentStore::open(dir.path().join("test.redb")).unwrap();

        assert!(store.get("k1").await.unwrap().is_none());

        store.set("k1", "hello").await.unwrap();
        assert_eq!(store.get("k1").await.unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.redb");

        {
            let store = RedbContentStore::open(&path).unwrap();
            store.set("k1", "persisted").await.unwrap();
        }

        let store = RedbContentStore::open(&path).unwrap();
        assert_eq!(store.get("k1").await.unwrap().as_deref(), Some("persisted"));
    }

    #[tokio::test]
    async fn test_get_unknown_key_is_none_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbContentStore::open(dir.path().join("test.redb")).unwrap();

        let result = store.get("nope").await;
        assert!(matches!(result, Ok(None)));
    }
}
