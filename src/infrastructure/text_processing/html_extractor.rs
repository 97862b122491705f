use scraper::{ElementRef, Html, Selector};

use crate::application::ports::{ParseError, TextExtractor};
use crate::domain::Fragment;

const CONTENT_SELECTOR: &str = "h1, h2, h3, p, a";
const SECURE_SCHEME_PREFIX: &str = "https";

/// Pulls headings, paragraphs and secure links out of an HTML page.
pub struct HtmlTextExtractor {
    selector: Selector,
}

impl HtmlTextExtractor {
    pub fn new() -> Result<Self, ParseError> {
        let selector =
            Selector::parse(CONTENT_SELECTOR).map_err(|e| ParseError::Selector(e.to_string()))?;
        Ok(Self { selector })
    }

    fn to_fragment(element: ElementRef<'_>) -> Option<Fragment> {
        let text: String = element.text().collect();

        if element.value().name() == "a" {
            return element
                .value()
                .attr("href")
                .filter(|href| href.starts_with(SECURE_SCHEME_PREFIX))
                .map(|href| Fragment::link(&text, href));
        }

        Fragment::text(&text)
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract(&self, html: &str) -> Result<Vec<Fragment>, ParseError> {
        let document = Html::parse_document(html);

        Ok(document
            .select(&self.selector)
            .filter_map(Self::to_fragment)
            .collect())
    }
}
