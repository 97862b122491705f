/// US letter page measured in PDF points (1/72 inch).
pub const LETTER_WIDTH_PT: f32 = 612.0;
pub const LETTER_HEIGHT_PT: f32 = 792.0;

/// Fixed page layout used for every rendered document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub line_height: f32,
    pub font_size: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: LETTER_WIDTH_PT,
            height: LETTER_HEIGHT_PT,
            margin: 40.0,
            line_height: 14.0,
            font_size: 12.0,
        }
    }
}

impl PageGeometry {
    pub fn available_width(&self) -> f32 {
        self.width - self.margin * 2.0
    }

    /// Baseline of the first line on a page.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }

    pub fn bottom(&self) -> f32 {
        self.margin
    }

    pub fn lines_per_page(&self) -> usize {
        ((self.top() - self.bottom()) / self.line_height).floor() as usize + 1
    }
}
