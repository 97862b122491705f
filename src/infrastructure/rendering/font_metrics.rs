use std::collections::HashMap;
use std::path::Path;

use ttf_parser::{Face, GlyphId};

use crate::application::ports::{RenderError, TextMeasure};

/// TrueType font loaded once at startup and shared by every render.
///
/// Horizontal advances are read from the font's unicode cmap up front so
/// measuring does not have to re-parse the face.
pub struct RegisteredFont {
    name: String,
    data: Vec<u8>,
    units_per_em: f32,
    advances: HashMap<char, u16>,
    fallback_advance: u16,
}

impl RegisteredFont {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path).map_err(|e| {
            RenderError::Font(format!("failed to read font {}: {e}", path.display()))
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font")
            .to_string();

        Self::from_bytes(name, data)
    }

    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, RenderError> {
        let (units_per_em, advances, fallback_advance) = {
            let face = Face::parse(&data, 0)
                .map_err(|e| RenderError::Font(format!("failed to parse font: {e}")))?;

            let mut advances = HashMap::new();
            if let Some(cmap) = face.tables().cmap {
                for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                    subtable.codepoints(|code_point| {
                        let Some(c) = char::from_u32(code_point) else {
                            return;
                        };
                        if let Some(advance) =
                            face.glyph_index(c).and_then(|g| face.glyph_hor_advance(g))
                        {
                            advances.insert(c, advance);
                        }
                    });
                }
            }

            let units_per_em = face.units_per_em();
            let fallback = face
                .glyph_hor_advance(GlyphId(0))
                .unwrap_or(units_per_em / 2);
            (units_per_em, advances, fallback)
        };

        if advances.is_empty() {
            return Err(RenderError::Font("font has no unicode glyphs".to_string()));
        }

        Ok(Self {
            name: name.into(),
            data,
            units_per_em: f32::from(units_per_em),
            advances,
            fallback_advance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn glyph_count(&self) -> usize {
        self.advances.len()
    }
}

impl TextMeasure for RegisteredFont {
    fn string_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(*self.advances.get(&c).unwrap_or(&self.fallback_advance)))
            .sum();
        units as f32 * font_size / self.units_per_em
    }
}
