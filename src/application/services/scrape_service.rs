use std::sync::Arc;

use chrono::Utc;
use tempfile::NamedTempFile;

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, DocumentRenderer, FetchError, PageFetcher, ParseError,
    RenderError, TextExtractor,
};
use crate::domain::{BlobName, Fragment, ScrapeRequest, UploadTarget};

/// Runs the fetch → extract → render → upload pipeline for one request.
pub struct ScrapeService<F, X, R>
where
    F: PageFetcher,
    X: TextExtractor,
    R: DocumentRenderer,
{
    fetcher: Arc<F>,
    extractor: Arc<X>,
    renderer: Arc<R>,
    store: Arc<dyn ArtifactStore>,
    default_container: String,
}

impl<F, X, R> ScrapeService<F, X, R>
where
    F: PageFetcher,
    X: TextExtractor,
    R: DocumentRenderer + 'static,
{
    pub fn new(
        fetcher: Arc<F>,
        extractor: Arc<X>,
        renderer: Arc<R>,
        store: Arc<dyn ArtifactStore>,
        default_container: String,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            renderer,
            store,
            default_container,
        }
    }

    /// Picks the blob name and container for `request`, falling back to a
    /// generated name and the configured container.
    pub fn resolve_target(&self, request: &ScrapeRequest) -> UploadTarget {
        let host = reqwest::Url::parse(&request.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        let blob = BlobName::resolve(request.file_name.as_deref(), host.as_deref(), Utc::now());
        let container = request
            .container_name
            .clone()
            .unwrap_or_else(|| self.default_container.clone());

        UploadTarget::new(container, blob)
    }

    pub async fn extract(&self, url: &str) -> Result<Vec<Fragment>, ScrapeError> {
        let html = self.fetcher.fetch(url).await?;
        let fragments = self.extractor.extract(&html)?;

        tracing::debug!(
            bytes = html.len(),
            fragments = fragments.len(),
            "Page text extracted"
        );

        Ok(fragments)
    }

    /// Renders `fragments` into a fresh temporary `.pdf` file.
    pub async fn render(&self, fragments: Vec<Fragment>) -> Result<NamedTempFile, ScrapeError> {
        let artifact = tempfile::Builder::new()
            .prefix("pagepress-")
            .suffix(".pdf")
            .tempfile()
            .map_err(RenderError::Io)?;

        let renderer = Arc::clone(&self.renderer);
        let path = artifact.path().to_path_buf();

        let summary = tokio::task::spawn_blocking(move || renderer.render(&fragments, &path))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))??;

        tracing::debug!(
            pages = summary.pages,
            lines = summary.lines,
            "Document rendered"
        );

        Ok(artifact)
    }

    /// Uploads the artifact and releases the temporary file on every path.
    pub async fn upload(
        &self,
        artifact: NamedTempFile,
        target: &UploadTarget,
    ) -> Result<u64, ScrapeError> {
        let result = self.store.upload(artifact.path(), target).await;

        match &result {
            Ok(bytes) => tracing::info!(
                blob = %target.blob,
                container = %target.container,
                bytes,
                "Artifact uploaded"
            ),
            Err(e) => tracing::error!(
                error = %e,
                blob = %target.blob,
                container = %target.container,
                "Upload failed, discarding local artifact"
            ),
        }

        if let Err(e) = artifact.close() {
            tracing::warn!(error = %e, "Failed to delete temporary artifact");
        }

        result.map_err(ScrapeError::from)
    }

    #[tracing::instrument(skip(self, request), fields(file_name = ?request.file_name))]
    pub async fn scrape_page(&self, request: ScrapeRequest) -> Result<String, ScrapeError> {
        let target = self.resolve_target(&request);
        let fragments = self.extract(&request.url).await?;
        let artifact = self.render(fragments).await?;
        self.upload(artifact, &target).await?;

        Ok(format!(
            "{} uploaded to Azure Blob Storage and indexed successfully.",
            target.blob
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
    #[error("render: {0}")]
    Render(#[from] RenderError),
    #[error("store: {0}")]
    Store(#[from] ArtifactStoreError),
}
