use std::path::{Path, PathBuf};
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::UploadTarget;

use super::object_upload::put_file;

/// Filesystem stand-in for blob storage: `{base}/{container}/{blob}`.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ArtifactStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    /// Where `target` lands on disk.
    pub fn resolve(&self, target: &UploadTarget) -> PathBuf {
        self.base_path
            .join(&target.container)
            .join(target.blob.as_str())
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn upload(
        &self,
        local_path: &Path,
        target: &UploadTarget,
    ) -> Result<u64, ArtifactStoreError> {
        let store_path = StorePath::from(target.object_path());
        put_file(self.inner.as_ref(), &store_path, local_path).await
    }
}
