use std::path::Path;

use object_store::azure::{MicrosoftAzure, MicrosoftAzureBuilder};
use object_store::path::Path as StorePath;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::UploadTarget;

use super::object_upload::put_file;

/// Azure Blob Storage authenticated through a user-assigned managed identity.
///
/// The container is chosen per upload, so a client is built for each call.
pub struct AzureArtifactStore {
    account: String,
    client_id: String,
    msi_endpoint: Option<String>,
}

impl AzureArtifactStore {
    pub fn new(
        account: &str,
        client_id: Option<&str>,
        msi_endpoint: Option<&str>,
    ) -> Result<Self, ArtifactStoreError> {
        if account.trim().is_empty() {
            return Err(ArtifactStoreError::Configuration(
                "storage account name is empty".to_string(),
            ));
        }

        let client_id = client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                ArtifactStoreError::Auth("managed identity client id is not configured".to_string())
            })?;

        Ok(Self {
            account: account.to_string(),
            client_id: client_id.to_string(),
            msi_endpoint: msi_endpoint.map(str::to_string),
        })
    }

    pub fn account_url(&self) -> String {
        format!("https://{}.blob.core.windows.net", self.account)
    }

    fn container_client(&self, container: &str) -> Result<MicrosoftAzure, ArtifactStoreError> {
        let mut builder = MicrosoftAzureBuilder::new()
            .with_account(&self.account)
            .with_container_name(container)
            .with_client_id(&self.client_id);

        if let Some(endpoint) = &self.msi_endpoint {
            builder = builder.with_msi_endpoint(endpoint);
        }

        builder
            .build()
            .map_err(|e| ArtifactStoreError::Configuration(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ArtifactStore for AzureArtifactStore {
    #[tracing::instrument(skip(self, local_path), fields(account = %self.account))]
    async fn upload(
        &self,
        local_path: &Path,
        target: &UploadTarget,
    ) -> Result<u64, ArtifactStoreError> {
        let client = self.container_client(&target.container)?;
        let blob_path = StorePath::from(target.blob.as_str());

        let size = put_file(&client, &blob_path, local_path).await?;

        tracing::debug!(
            url = %format!("{}/{}", self.account_url(), target.object_path()),
            bytes = size,
            "Blob written"
        );

        Ok(size)
    }
}
