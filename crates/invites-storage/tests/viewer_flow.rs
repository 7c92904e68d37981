//! End-to-end store flow: publish a record, resolve it the way the viewer
//! does, and degrade to the sample on a miss.

use invites_core::{sample_record, InvitationRecord, SAMPLE_OPENING_LINE};
use invites_storage::{load_or_sample, publish, ContentStore, RedbContentStore};

const BASE_URL: &str = "https://loveinvites.app";

fn custom_record() -> InvitationRecord {
    let mut record = sample_record();
    record.opening_line = "Good evening 🌙 An elegant invitation for you…".to_string();
    record.location = "The Grand Bistro".to_string();
    record
}

#[tokio::test]
async fn published_record_resolves_through_the_viewer_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = RedbContentStore::open(dir.path().join("invites.redb")).unwrap();
    let record = custom_record();

    let published = publish(&store, &record, BASE_URL).await.unwrap();
    assert!(published.url.ends_with(&published.key));

    let loaded = load_or_sample(&store, &published.key).await;
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn republishing_keeps_old_links_valid() {
    let dir = tempfile::tempdir().unwrap();
    let store = RedbContentStore::open(dir.path().join("invites.redb")).unwrap();
    let record = custom_record();

    let first = publish(&store, &record, BASE_URL).await.unwrap();
    let second = publish(&store, &record, BASE_URL).await.unwrap();
    assert_ne!(first.key, second.key);

    // Both keys resolve independently to equal content.
    assert_eq!(load_or_sample(&store, &first.key).await, record);
    assert_eq!(load_or_sample(&store, &second.key).await, record);
}

#[tokio::test]
async fn unknown_key_degrades_to_the_sample_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = RedbContentStore::open(dir.path().join("invites.redb")).unwrap();

    let loaded = load_or_sample(&store, "zzzzzzzz").await;
    assert_eq!(loaded.opening_line, SAMPLE_OPENING_LINE);
}

#[tokio::test]
async fn records_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invites.redb");
    let record = custom_record();

    let key = {
        let store = RedbContentStore::open(&path).unwrap();
        publish(&store, &record, BASE_URL).await.unwrap().key
    };

    let store = RedbContentStore::open(&path).unwrap();
    let text = store.get(&key).await.unwrap().unwrap();
    assert_eq!(InvitationRecord::from_json(&text).unwrap(), record);
}
