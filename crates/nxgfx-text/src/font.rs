//! Font faces and the ordered fallback set.

use nxgfx_core::profiling::profile_function;

use crate::{TextError, TextResult};

/// A rasterized glyph as produced by a font face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizedGlyph {
    pub width: u16,
    pub height: u16,
    /// Horizontal pen advance in whole pixels.
    pub advance_x: i16,
    /// Distance from the baseline up to the top row of the bitmap.
    pub bearing_top: i16,
    /// Distance from the pen position to the left column of the bitmap.
    pub bearing_left: i16,
    /// One coverage byte per pixel, row-major, `width * height` long.
    pub coverage: Vec<u8>,
}

/// One face of a rasterization backend.
pub trait FontFace {
    fn name(&self) -> &str;

    /// Glyph index for `ch`, `None` when this face does not cover it.
    fn glyph_index(&self, ch: char) -> Option<u16>;

    /// Render the glyph at `index` with an em height of `pixel_size` pixels.
    fn rasterize(&self, index: u16, pixel_size: u32) -> Option<RasterizedGlyph>;
}

/// Source of rasterized glyphs at a current pixel size.
///
/// The glyph cache is generic over this so tests and alternative backends can
/// replace the font stack.
pub trait GlyphProvider {
    /// Change the size used by subsequent [`rasterize`](Self::rasterize) calls.
    fn resize(&mut self, pixel_size: u32);

    fn pixel_size(&self) -> u32;

    /// Rasterize `ch` at the current size, `None` when nothing provides it.
    fn rasterize(&mut self, ch: char) -> Option<RasterizedGlyph>;
}

/// A face backed by the `fontdue` rasterizer.
pub struct FontdueFace {
    name: String,
    font: fontdue::Font,
}

impl FontdueFace {
    /// Parse a face from an in-memory TrueType/OpenType buffer.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> TextResult<Self> {
        let name = name.into();
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(
            |reason| TextError::FontLoadError {
                name: name.clone(),
                reason: reason.to_string(),
            },
        )?;
        tracing::debug!("Loaded font face '{}' ({} glyphs)", name, font.glyph_count());
        Ok(Self { name, font })
    }
}

impl FontFace for FontdueFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph_index(&self, ch: char) -> Option<u16> {
        match self.font.lookup_glyph_index(ch) {
            0 => None,
            index => Some(index),
        }
    }

    fn rasterize(&self, index: u16, pixel_size: u32) -> Option<RasterizedGlyph> {
        let (metrics, coverage) = self.font.rasterize_indexed(index, pixel_size as f32);
        let width = u16::try_from(metrics.width).ok()?;
        let height = u16::try_from(metrics.height).ok()?;
        Some(RasterizedGlyph {
            width,
            height,
            advance_x: metrics.advance_width.round() as i16,
            bearing_top: (metrics.ymin + metrics.height as i32) as i16,
            bearing_left: metrics.xmin as i16,
            coverage,
        })
    }
}

/// Ordered fallback faces sharing one pixel size.
///
/// Lookups try each face in order; the first face that maps the codepoint and
/// renders it wins.
pub struct FontFaceSet {
    faces: Vec<Box<dyn FontFace>>,
    pixel_size: u32,
}

impl FontFaceSet {
    pub fn new(pixel_size: u32) -> Self {
        Self {
            faces: Vec::new(),
            pixel_size,
        }
    }

    /// Append a face at the lowest priority.
    pub fn push(&mut self, face: impl FontFace + 'static) {
        self.faces.push(Box::new(face));
    }

    pub fn with_face(mut self, face: impl FontFace + 'static) -> Self {
        self.push(face);
        self
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face_names(&self) -> impl Iterator<Item = &str> {
        self.faces.iter().map(|face| face.name())
    }
}

impl GlyphProvider for FontFaceSet {
    fn resize(&mut self, pixel_size: u32) {
        self.pixel_size = pixel_size;
    }

    fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    fn rasterize(&mut self, ch: char) -> Option<RasterizedGlyph> {
        profile_function!();
        self.faces.iter().find_map(|face| {
            let index = face.glyph_index(ch)?;
            face.rasterize(index, self.pixel_size)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Face covering a fixed set of characters with a fixed advance.
    struct StubFace {
        name: &'static str,
        chars: &'static str,
        advance: i16,
    }

    impl FontFace for StubFace {
        fn name(&self) -> &str {
            self.name
        }

        fn glyph_index(&self, ch: char) -> Option<u16> {
            self.chars.chars().position(|c| c == ch).map(|i| i as u16 + 1)
        }

        fn rasterize(&self, _index: u16, pixel_size: u32) -> Option<RasterizedGlyph> {
            Some(RasterizedGlyph {
                width: 1,
                height: pixel_size as u16,
                advance_x: self.advance,
                bearing_top: pixel_size as i16,
                bearing_left: 0,
                coverage: vec![255; pixel_size as usize],
            })
        }
    }

    fn latin_and_cjk() -> FontFaceSet {
        FontFaceSet::new(10)
            .with_face(StubFace {
                name: "latin",
                chars: "AB",
                advance: 6,
            })
            .with_face(StubFace {
                name: "cjk",
                chars: "A漢",
                advance: 10,
            })
    }

    #[test]
    fn test_first_face_wins() {
        let mut faces = latin_and_cjk();
        assert_eq!(faces.rasterize('A').map(|g| g.advance_x), Some(6));
    }

    #[test]
    fn test_falls_back_to_later_face() {
        let mut faces = latin_and_cjk();
        assert_eq!(faces.rasterize('漢').map(|g| g.advance_x), Some(10));
    }

    #[test]
    fn test_missing_everywhere() {
        let mut faces = latin_and_cjk();
        assert!(faces.rasterize('Z').is_none());
    }

    #[test]
    fn test_resize_is_shared_by_later_lookups() {
        let mut faces = latin_and_cjk();
        faces.resize(16);
        assert_eq!(faces.pixel_size(), 16);
        assert_eq!(faces.rasterize('B').map(|g| g.height), Some(16));
    }

    #[test]
    fn test_face_order_is_kept() {
        let faces = latin_and_cjk();
        assert_eq!(faces.face_names().collect::<Vec<_>>(), vec!["latin", "cjk"]);
    }

    #[test]
    fn test_fontdue_rejects_garbage() {
        let result = FontdueFace::from_bytes("broken", b"not a font");
        assert!(matches!(result, Err(TextError::FontLoadError { .. })));
    }
}
