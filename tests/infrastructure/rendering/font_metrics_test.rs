use pagepress::application::ports::{RenderError, TextMeasure};
use pagepress::infrastructure::rendering::RegisteredFont;

use crate::helpers::{font_path, registered_font};

#[test]
fn given_bundled_font_when_loading_then_name_and_glyphs_are_available() {
    let font = registered_font();
    assert_eq!(font.name(), "DejaVuSans");
    assert!(font.glyph_count() > 100);
}

#[test]
fn given_longer_text_when_measuring_then_width_grows() {
    let font = registered_font();
    let short = font.string_width("Hello", 12.0);
    let long = font.string_width("Hello world", 12.0);
    assert!(short > 0.0);
    assert!(long > short);
}

#[test]
fn given_double_font_size_when_measuring_then_width_doubles() {
    let font = registered_font();
    let small = font.string_width("Scale", 12.0);
    let large = font.string_width("Scale", 24.0);
    assert!((large - small * 2.0).abs() < 0.001);
}

#[test]
fn given_empty_text_when_measuring_then_width_is_zero() {
    assert_eq!(registered_font().string_width("", 12.0), 0.0);
}

#[test]
fn given_missing_file_when_loading_then_returns_font_error() {
    let missing = font_path().with_file_name("NoSuchFont.ttf");
    let result = RegisteredFont::load(&missing);
    assert!(matches!(result, Err(RenderError::Font(_))));
}

#[test]
fn given_garbage_bytes_when_parsing_then_returns_font_error() {
    let result = RegisteredFont::from_bytes("garbage", b"not a font".to_vec());
    assert!(matches!(result, Err(RenderError::Font(_))));
}
