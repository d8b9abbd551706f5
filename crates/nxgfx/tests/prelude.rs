//! The prelude is enough to draw text onto a canvas.

use nxgfx::prelude::*;
use nxgfx_test_utils::FakeGlyphProvider;

#[test]
fn test_prelude_renders_onto_canvas() {
    let mut fonts = FontSystem::with_provider(FakeGlyphProvider::new(), TextConfig::default());
    let mut canvas = Canvas::new(64, 32);
    canvas.clear(Color::BLACK).unwrap();

    let cursor = fonts
        .render(&mut canvas, 2, 2, 10, NO_WRAP, Color::RED, "ab")
        .unwrap();

    assert_eq!(cursor.position, IVec2::new(14, 2));
    // Fake glyphs are solid, so the first glyph's top-left texel is pure tint.
    assert_eq!(canvas.pixel(2, 4), Some(Color::RED));
    assert_eq!(canvas.pixel(60, 30), Some(Color::BLACK));
}
