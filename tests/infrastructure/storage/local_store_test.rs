use std::path::PathBuf;

use pagepress::application::ports::{ArtifactStore, ArtifactStoreError};
use pagepress::domain::{BlobName, UploadTarget};
use pagepress::infrastructure::storage::LocalArtifactStore;

fn create_test_store() -> (tempfile::TempDir, LocalArtifactStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalArtifactStore::new(dir.path().join("blobs")).unwrap();
    (dir, store)
}

fn write_artifact(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn target(name: &str) -> UploadTarget {
    UploadTarget::new("documents", BlobName::new(name).unwrap())
}

#[tokio::test]
async fn given_local_file_when_uploading_then_blob_is_written_under_container() {
    let (dir, store) = create_test_store();
    let artifact = write_artifact(&dir, "artifact.pdf", b"%PDF-1.3 test");

    let size = store.upload(&artifact, &target("out")).await.unwrap();

    assert_eq!(size, 13);
    let stored = store.resolve(&target("out"));
    assert!(stored.ends_with("documents/out.pdf"));
    assert_eq!(std::fs::read(stored).unwrap(), b"%PDF-1.3 test");
}

#[tokio::test]
async fn given_existing_blob_when_uploading_same_name_then_it_is_overwritten() {
    let (dir, store) = create_test_store();
    let first = write_artifact(&dir, "first.pdf", b"first version");
    let second = write_artifact(&dir, "second.pdf", b"second");

    store.upload(&first, &target("report")).await.unwrap();
    store.upload(&second, &target("report")).await.unwrap();

    let stored = std::fs::read(store.resolve(&target("report"))).unwrap();
    assert_eq!(stored, b"second");
}

#[tokio::test]
async fn given_upload_when_complete_then_local_file_is_left_for_caller() {
    let (dir, store) = create_test_store();
    let artifact = write_artifact(&dir, "artifact.pdf", b"data");

    store.upload(&artifact, &target("kept")).await.unwrap();

    assert!(artifact.exists());
}

#[tokio::test]
async fn given_missing_local_file_when_uploading_then_returns_io_error() {
    let (dir, store) = create_test_store();
    let missing = dir.path().join("nope.pdf");

    let result = store.upload(&missing, &target("out")).await;

    assert!(matches!(result, Err(ArtifactStoreError::Io(_))));
}
