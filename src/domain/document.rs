/// A line of text placed on a page. Coordinates are PDF points from the
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PositionedLine>,
}

/// Laid-out document. Always holds at least one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
        }
    }

    pub fn start_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn push_line(&mut self, line: PositionedLine) {
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}
