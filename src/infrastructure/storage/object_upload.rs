use std::path::Path;

use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::ArtifactStoreError;

/// Reads `local_path` and writes it to `path`, overwriting what is there.
pub(super) async fn put_file(
    store: &dyn ObjectStore,
    path: &StorePath,
    local_path: &Path,
) -> Result<u64, ArtifactStoreError> {
    let data = tokio::fs::read(local_path).await?;
    let size = data.len() as u64;

    store
        .put(path, PutPayload::from(data))
        .await
        .map_err(ArtifactStoreError::from)?;

    Ok(size)
}

const AZURE_STORE: &str = "MicrosoftAzure";
const CREDENTIAL_MARKERS: [&str; 3] = ["token", "credential", "access key"];

impl From<object_store::Error> for ArtifactStoreError {
    fn from(e: object_store::Error) -> Self {
        match &e {
            object_store::Error::Unauthenticated { .. }
            | object_store::Error::PermissionDenied { .. } => Self::Auth(e.to_string()),
            object_store::Error::Generic { store, source }
                if *store == AZURE_STORE && is_credential_failure(&**source) =>
            {
                Self::Auth(e.to_string())
            }
            _ => Self::Upload(e.to_string()),
        }
    }
}

/// Managed-identity token failures surface as generic Azure errors; look
/// for them anywhere in the source chain.
fn is_credential_failure(source: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(source);
    while let Some(err) = current {
        let message = err.to_string().to_lowercase();
        if CREDENTIAL_MARKERS.iter().any(|m| message.contains(m)) {
            return true;
        }
        current = err.source();
    }
    false
}
