use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::azure_store::AzureArtifactStore;
use super::local_store::LocalArtifactStore;

pub struct ArtifactStoreFactory;

impl ArtifactStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ArtifactStore>, ArtifactStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = LocalArtifactStore::new(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Azure => {
                let account = settings.account_name.as_deref().ok_or_else(|| {
                    ArtifactStoreError::Configuration("storage account name required".into())
                })?;
                let store = AzureArtifactStore::new(
                    account,
                    settings.client_id.as_deref(),
                    settings.msi_endpoint.as_deref(),
                )?;
                Ok(Arc::new(store))
            }
        }
    }
}
