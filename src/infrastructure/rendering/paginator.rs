use crate::application::ports::TextMeasure;
use crate::domain::{Document, Fragment, PageGeometry, PositionedLine};

use super::text_wrapper::wrap_text;

/// Lays fragments out top to bottom, one wrapped line per line height.
///
/// A page break happens lazily, right before a line that would otherwise sit
/// below the bottom margin, so no page ends up empty.
pub fn paginate<M>(fragments: &[Fragment], geometry: &PageGeometry, measure: &M) -> Document
where
    M: TextMeasure + ?Sized,
{
    let mut document = Document::new();
    let mut cursor = geometry.top();

    for fragment in fragments {
        let lines = wrap_text(
            fragment.as_str(),
            geometry.available_width(),
            geometry.font_size,
            measure,
        );

        for text in lines {
            if cursor < geometry.bottom() {
                document.start_page();
                cursor = geometry.top();
            }

            document.push_line(PositionedLine {
                text,
                x: geometry.margin,
                y: cursor,
            });
            cursor -= geometry.line_height;
        }
    }

    document
}
