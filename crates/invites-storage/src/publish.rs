//! Link/record generation: materializing a draft into a retrievable record.

use invites_core::InvitationRecord;
use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::info;

use crate::error::StorageError;
use crate::ContentStore;

/// Length of generated invite keys.
pub const KEY_LEN: usize = 8;

/// A stored invitation, ready to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedInvite {
    /// The store key the record was written under.
    pub key: String,
    /// Viewer URL embedding the key as a path segment.
    pub url: String,
}

/// Generates a short pseudo-random alphanumeric key.
///
/// No uniqueness check against existing keys: collision is possible and
/// unhandled, matching the original link-generation behavior.
pub fn generate_key() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(KEY_LEN)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Serializes `record` under a fresh key and returns the shareable link.
///
/// Publishing twice stores two independent copies under two distinct keys;
/// neither invalidates the other.
pub async fn publish(
    store: &dyn ContentStore,
    record: &InvitationRecord,
    base_url: &str,
) -> Result<PublishedInvite, StorageError> {
    let key = generate_key();
    let text = record.to_json()?;
    store.set(&key, &text).await?;

    let url = format!("{}/invite/{}", base_url.trim_end_matches('/'), key);
    info!(key = %key, "Published invitation");

    Ok(PublishedInvite { key, url })
}

#[cfg(test)]
mod tests {
    use invites_core::sample_record;

    use super::*;
    use crate::memory::MemoryContentStore;

    #[test]
    fn test_generated_keys_are_short_and_alphanumeric() {
        let key = generate_key();
        assert_eq!(key.len(), KEY_LEN);
        assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_publish_twice_yields_distinct_keys_same_content() {
        let store = MemoryContentStore::new();
        let record = sample_record();

        let first = publish(&store, &record, "https://loveinvites.app")
            .await
            .unwrap();
        let second = publish(&store, &record, "https://loveinvites.app")
            .await
            .unwrap();

        assert_ne!(first.key, second.key);

        let a = store.get(&first.key).await.unwrap().unwrap();
        let b = store.get(&second.key).await.unwrap().unwrap();
        assert_eq!(
            InvitationRecord::from_json(&a).unwrap(),
            InvitationRecord::from_json(&b).unwrap()
        );
    }

    #[tokio::test]
    async fn test_url_embeds_key_as_path_segment() {
        let store = MemoryContentStore::new();
        let record = sample_record();

        let published = publish(&store, &record, "https://loveinvites.app/")
            .await
            .unwrap();

        assert_eq!(
            published.url,
            format!("https://loveinvites.app/invite/{}", published.key)
        );
    }
}
