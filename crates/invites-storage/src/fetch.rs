//! Viewer-side record loading with the degrade-to-demo policy.

use invites_core::{sample_record, InvitationRecord};
use tracing::{info, warn};

use crate::ContentStore;

/// Reads the record stored under `key`, falling back to the built-in sample.
///
/// A store miss, a read failure, or an unparsable record all degrade to the
/// sample record; no error reaches the recipient.
pub async fn load_or_sample(store: &dyn ContentStore, key: &str) -> InvitationRecord {
    let text = match store.get(key).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!(key, "No stored invitation for key, using sample");
            return sample_record();
        }
        Err(e) => {
            warn!(key, "Invite store read failed, using sample: {}", e);
            return sample_record();
        }
    };

    match InvitationRecord::from_json(&text) {
        Ok(record) => {
            info!(key, "Loaded invitation");
            record
        }
        Err(e) => {
            warn!(key, "Stored invitation did not parse, using sample: {}", e);
            sample_record()
        }
    }
}

#[cfg(test)]
mod tests {
    use invites_core::SAMPLE_OPENING_LINE;

    use super::*;
    use crate::memory::MemoryContentStore;

    #[tokio::test]
    async fn test_unknown_key_yields_sample_not_error() {
        let store = MemoryContentStore::new();
        let record = load_or_sample(&store, "nope").await;
        assert_eq!(record.opening_line, SAMPLE_OPENING_LINE);
    }

    #[tokio::test]
    async fn test_unparsable_record_yields_sample() {
        let store = MemoryContentStore::new();
        store.set("bad", "{not json").await.unwrap();

        let record = load_or_sample(&store, "bad").await;
        assert_eq!(record.opening_line, SAMPLE_OPENING_LINE);
    }

    #[tokio::test]
    async fn test_stored_record_is_returned() {
        let store = MemoryContentStore::new();
        let mut record = sample_record();
        record.opening_line = "Psst. Over here…".to_string();
        store
            .set("good", &record.to_json().unwrap())
            .await
            .unwrap();

        let loaded = load_or_sample(&store, "good").await;
        assert_eq!(loaded, record);
    }
}
