mod artifact_store;
mod document_renderer;
mod page_fetcher;
mod text_extractor;
mod text_measure;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use document_renderer::{DocumentRenderer, RenderError, RenderSummary};
pub use page_fetcher::{FetchError, PageFetcher};
pub use text_extractor::{ParseError, TextExtractor};
pub use text_measure::TextMeasure;
