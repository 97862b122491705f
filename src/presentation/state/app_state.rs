use std::sync::Arc;

use crate::application::ports::{DocumentRenderer, PageFetcher, TextExtractor};
use crate::application::services::ScrapeService;

pub struct AppState<F, X, R>
where
    F: PageFetcher,
    X: TextExtractor,
    R: DocumentRenderer,
{
    pub scrape_service: Arc<ScrapeService<F, X, R>>,
}

impl<F, X, R> Clone for AppState<F, X, R>
where
    F: PageFetcher,
    X: TextExtractor,
    R: DocumentRenderer,
{
    fn clone(&self) -> Self {
        Self {
            scrape_service: Arc::clone(&self.scrape_service),
        }
    }
}
