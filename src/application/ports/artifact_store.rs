use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::UploadTarget;

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Uploads the file at `local_path` to `target`, replacing any existing
    /// blob. Returns the number of bytes written.
    async fn upload(&self, local_path: &Path, target: &UploadTarget)
    -> Result<u64, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("store misconfigured: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
