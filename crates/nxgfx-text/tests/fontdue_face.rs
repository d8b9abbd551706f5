//! Integration tests for the fontdue-backed face against a real font.
//!
//! `fixtures/DejaVuSerif.ttf` is distributed under the DejaVu fonts license,
//! see `fixtures/DejaVuSerif-LICENSE.txt`.

use nxgfx_render::Color;
use nxgfx_test_utils::MockTarget;
use nxgfx_text::{
    FontFace, FontFaceSet, FontSystem, FontdueFace, GlyphProvider, MemoryFontSource, NO_WRAP,
    TextConfig,
};

const DEJAVU_SERIF: &[u8] = include_bytes!("fixtures/DejaVuSerif.ttf");

fn face() -> FontdueFace {
    FontdueFace::from_bytes("DejaVuSerif", DEJAVU_SERIF).unwrap()
}

fn rasterize(face: &FontdueFace, ch: char, pixel_size: u32) -> nxgfx_text::RasterizedGlyph {
    let index = face.glyph_index(ch).unwrap();
    face.rasterize(index, pixel_size).unwrap()
}

#[test]
fn test_unmapped_codepoint_has_no_index() {
    let face = face();
    assert!(face.glyph_index('A').is_some());
    assert!(face.glyph_index('\u{10FFFF}').is_none());
}

#[test]
fn test_metrics_follow_fontdue() {
    let face = face();
    let reference = fontdue::Font::from_bytes(DEJAVU_SERIF, fontdue::FontSettings::default()).unwrap();

    for ch in ['A', 'g', 'j', 'W', '.'] {
        let glyph = rasterize(&face, ch, 20);
        let metrics = reference.metrics(ch, 20.0);

        assert_eq!(glyph.advance_x, metrics.advance_width.round() as i16, "{ch:?}");
        assert_eq!(glyph.bearing_left, metrics.xmin as i16, "{ch:?}");
        assert_eq!(glyph.bearing_top, (metrics.ymin + metrics.height as i32) as i16, "{ch:?}");
        assert_eq!((glyph.width as usize, glyph.height as usize), (metrics.width, metrics.height));
        assert_eq!(glyph.coverage.len(), metrics.width * metrics.height);
    }
}

#[test]
fn test_capital_sits_on_baseline() {
    let glyph = rasterize(&face(), 'A', 20);
    assert!(glyph.bearing_top > 0);
    // The bottom row is at the baseline, give or take antialiasing.
    assert!((glyph.bearing_top - glyph.height as i16).abs() <= 1);
    assert!(glyph.coverage.iter().any(|&c| c > 0));
}

#[test]
fn test_descender_reaches_below_baseline() {
    let glyph = rasterize(&face(), 'g', 20);
    assert!(glyph.bearing_top > 0);
    assert!(glyph.bearing_top < glyph.height as i16);
}

#[test]
fn test_face_set_uses_the_face() {
    let mut faces = FontFaceSet::new(20).with_face(face());
    let glyph = faces.rasterize('A').unwrap();
    assert_eq!(glyph, rasterize(&face(), 'A', 20));
    assert!(faces.rasterize('\u{10FFFF}').is_none());
}

#[test]
fn test_initialize_from_memory_source() {
    let source = MemoryFontSource::new().with_face("DejaVuSerif", DEJAVU_SERIF);
    let mut fonts = FontSystem::initialize(&source, TextConfig::default().with_locale("en-US")).unwrap();

    let a = fonts.find_or_load_glyph('A').unwrap();
    let g = fonts.find_or_load_glyph('g').unwrap();
    assert!(a.advance_x > 0);

    let mut target = MockTarget::new(200, 100);
    let cursor = fonts
        .render(&mut target, 10, 10, 20, NO_WRAP, Color::WHITE, "Ag")
        .unwrap();

    let baseline = 10 + 20;
    let draws = target.draws();
    assert_eq!(draws.len(), 2);
    assert!((draws[0].0.bottom() - baseline).abs() <= 1);
    assert!(draws[1].0.bottom() > baseline);
    assert_eq!(cursor.position.x, 10 + i32::from(a.advance_x) + i32::from(g.advance_x));
    assert_eq!(fonts.measure_width(20, "Ag"), cursor.position.x - 10);
}
