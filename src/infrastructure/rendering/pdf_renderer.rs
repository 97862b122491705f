use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use printpdf::{Mm, PdfDocument};

use crate::application::ports::{DocumentRenderer, RenderError, RenderSummary};
use crate::domain::{Document, Fragment, PageGeometry};

use super::font_metrics::RegisteredFont;
use super::paginator::paginate;

const DOCUMENT_TITLE: &str = "Scraped page";
const LAYER_NAME: &str = "text";
const MM_PER_PT: f32 = 25.4 / 72.0;

fn to_mm(points: f32) -> Mm {
    Mm(points * MM_PER_PT)
}

/// Writes paginated fragments to a PDF using the registered font.
pub struct PdfRenderer {
    font: Arc<RegisteredFont>,
    geometry: PageGeometry,
}

impl PdfRenderer {
    pub fn new(font: Arc<RegisteredFont>, geometry: PageGeometry) -> Self {
        Self { font, geometry }
    }

    pub fn layout(&self, fragments: &[Fragment]) -> Document {
        paginate(fragments, &self.geometry, self.font.as_ref())
    }

    fn write(&self, document: &Document, output: &Path) -> Result<(), RenderError> {
        let width = to_mm(self.geometry.width);
        let height = to_mm(self.geometry.height);

        let (pdf, first_page, first_layer) =
            PdfDocument::new(DOCUMENT_TITLE, width, height, LAYER_NAME);
        let font = pdf
            .add_external_font(self.font.bytes())
            .map_err(|e| RenderError::Font(format!("{}: {e}", self.font.name())))?;

        for (index, page) in document.pages().iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                pdf.add_page(width, height, LAYER_NAME)
            };
            let layer = pdf.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                layer.use_text(
                    line.text.as_str(),
                    self.geometry.font_size,
                    to_mm(line.x),
                    to_mm(line.y),
                    &font,
                );
            }
        }

        let mut writer = BufWriter::new(File::create(output)?);
        pdf.save(&mut writer)
            .map_err(|e| RenderError::Write(e.to_string()))?;
        writer.flush()?;

        Ok(())
    }
}

impl DocumentRenderer for PdfRenderer {
    #[tracing::instrument(skip(self, fragments), fields(fragments = fragments.len()))]
    fn render(&self, fragments: &[Fragment], output: &Path) -> Result<RenderSummary, RenderError> {
        let document = self.layout(fragments);
        self.write(&document, output)?;

        Ok(RenderSummary {
            pages: document.page_count(),
            lines: document.line_count(),
        })
    }
}
