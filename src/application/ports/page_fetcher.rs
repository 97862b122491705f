use async_trait::async_trait;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Downloads `url` and returns its body decoded as UTF-8, lossily.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Request(String),
}
