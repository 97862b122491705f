use std::fmt;

use chrono::{DateTime, Utc};

pub const DOCUMENT_EXTENSION: &str = ".pdf";

/// Name of the uploaded blob. Always ends with [`DOCUMENT_EXTENSION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobName(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BlobNameError {
    #[error("blob name is empty")]
    Empty,
}

impl BlobName {
    pub fn new(raw: &str) -> Result<Self, BlobNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BlobNameError::Empty);
        }

        if trimmed.to_lowercase().ends_with(DOCUMENT_EXTENSION) {
            Ok(Self(trimmed.to_string()))
        } else {
            Ok(Self(format!("{trimmed}{DOCUMENT_EXTENSION}")))
        }
    }

    /// Name for requests that did not supply one: `{host}-{timestamp}.pdf`.
    pub fn generate(host: Option<&str>, now: DateTime<Utc>) -> Self {
        let stem = host
            .map(|h| h.trim_start_matches("www.").replace(['.', ':'], "-"))
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "page".to_string());
        Self(format!(
            "{}-{}{}",
            stem,
            now.format("%Y%m%dT%H%M%SZ"),
            DOCUMENT_EXTENSION
        ))
    }

    /// Uses `raw` when it holds a usable name, otherwise generates one.
    pub fn resolve(raw: Option<&str>, host: Option<&str>, now: DateTime<Utc>) -> Self {
        raw.and_then(|r| Self::new(r).ok())
            .unwrap_or_else(|| Self::generate(host, now))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
