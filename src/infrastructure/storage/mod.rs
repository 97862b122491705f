mod azure_store;
mod local_store;
mod object_upload;
mod store_factory;

pub use azure_store::AzureArtifactStore;
pub use local_store::LocalArtifactStore;
pub use store_factory::ArtifactStoreFactory;
