use crate::domain::Fragment;

pub trait TextExtractor: Send + Sync {
    /// Parses `html` into fragments, preserving document order.
    fn extract(&self, html: &str) -> Result<Vec<Fragment>, ParseError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid element selector: {0}")]
    Selector(String),
}
