//! Local content store for Love Invites.
//!
//! The store is a key-value byte store addressable by an opaque string key:
//! a record is written once at link-generation time and read once at
//! viewer-load time. No expiry, no transactional guarantees beyond what the
//! backing database provides.

pub mod error;
pub mod fetch;
pub mod memory;
pub mod persistent;
pub mod publish;

pub use error::StorageError;
pub use fetch::load_or_sample;
pub use memory::MemoryContentStore;
pub use persistent::RedbContentStore;
pub use publish::{generate_key, publish, PublishedInvite, KEY_LEN};

use async_trait::async_trait;

/// A local key-value text store for serialized invitation records.
///
/// Keys are opaque strings. The invitation flow only exercises `set` and
/// `get`; there is no delete or update, and no TTL.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}
