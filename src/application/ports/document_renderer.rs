use std::io;
use std::path::Path;

use crate::domain::Fragment;

/// Outcome of a successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: usize,
    pub lines: usize,
}

pub trait DocumentRenderer: Send + Sync {
    /// Lays `fragments` out into pages and writes the document to `output`.
    fn render(&self, fragments: &[Fragment], output: &Path) -> Result<RenderSummary, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("font error: {0}")]
    Font(String),
    #[error("document write failed: {0}")]
    Write(String),
    #[error("render task failed: {0}")]
    Task(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
