/// Measures rendered string widths for the registered font.
pub trait TextMeasure: Send + Sync {
    /// Width of `text` in points at `font_size`.
    fn string_width(&self, text: &str, font_size: f32) -> f32;
}
