use std::fmt;

use super::BlobName;

/// Destination of an upload: a blob inside a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub container: String,
    pub blob: BlobName,
}

impl UploadTarget {
    pub fn new(container: impl Into<String>, blob: BlobName) -> Self {
        Self {
            container: container.into(),
            blob,
        }
    }

    /// Object path relative to the storage account.
    pub fn object_path(&self) -> String {
        format!("{}/{}", self.container, self.blob)
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.blob)
    }
}
