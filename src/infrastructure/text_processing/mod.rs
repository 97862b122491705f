mod html_extractor;

pub use html_extractor::HtmlTextExtractor;
