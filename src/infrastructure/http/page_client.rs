use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::USER_AGENT;

use crate::application::ports::{FetchError, PageFetcher};

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Fetches pages over HTTP with a browser user agent.
pub struct HttpPageFetcher {
    client: Client,
    user_agent: String,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Page returned non-success status, scraping body anyway");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(format!("failed to read body: {e}")))?;

        Ok(decode_body(&body))
    }
}

/// Decodes the body as UTF-8, substituting U+FFFD for invalid sequences.
fn decode_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if let Cow::Owned(_) = text {
        tracing::warn!(
            bytes = body.len(),
            "Page body is not valid UTF-8, invalid sequences replaced"
        );
    }
    text.into_owned()
}
