mod font_metrics;
mod paginator;
mod pdf_renderer;
mod text_wrapper;

pub use font_metrics::RegisteredFont;
pub use paginator::paginate;
pub use pdf_renderer::PdfRenderer;
pub use text_wrapper::wrap_text;
