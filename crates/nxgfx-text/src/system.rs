//! The font system context.
//!
//! [`FontSystem`] owns the fallback faces, the glyph cache, the break
//! characters and the color directives. Every layout call goes through it, so
//! two systems never share a pixel size or a cache.

use nxgfx_core::profiling::profile_function;
use nxgfx_render::{Color, RenderTarget};

use crate::breaker::BreakPointSet;
use crate::cache::{GlyphCache, GlyphRecord};
use crate::config::TextConfig;
use crate::directive::ColorDirectiveSet;
use crate::font::{FontFaceSet, FontdueFace, GlyphProvider};
use crate::layout::{LayoutCursor, TextLayout, TextWrap};
use crate::source::FontSource;
use crate::{TextError, TextResult};

const FALLBACK_LOCALE: &str = "en-US";

/// Owned text state: faces, glyph cache and layout configuration.
pub struct FontSystem {
    cache: GlyphCache,
    pixel_size: u32,
    line_spacing: f32,
    break_points: BreakPointSet,
    directives: ColorDirectiveSet,
}

impl FontSystem {
    /// Load every face `source` has for the configured locale.
    ///
    /// Faces that fail to parse are skipped. Fails with
    /// [`TextError::NoFontData`] when no face is left, which callers should
    /// treat as fatal.
    pub fn initialize(source: &dyn FontSource, config: TextConfig) -> TextResult<Self> {
        profile_function!();
        let locale = config
            .locale
            .clone()
            .or_else(sys_locale::get_locale)
            .unwrap_or_else(|| FALLBACK_LOCALE.to_owned());

        let mut faces = FontFaceSet::new(config.default_pixel_size);
        for data in source.load_faces(&locale)? {
            match FontdueFace::from_bytes(data.name, &data.bytes) {
                Ok(face) => faces.push(face),
                Err(err) => tracing::warn!("Skipping font face: {}", err),
            }
        }

        if faces.is_empty() {
            return Err(TextError::NoFontData { locale });
        }

        tracing::info!(
            "Font system initialized for '{}' with {} faces: {}",
            locale,
            faces.len(),
            faces.face_names().collect::<Vec<_>>().join(", ")
        );
        Ok(Self::with_provider(faces, config))
    }

    /// Build a system around any glyph provider.
    pub fn with_provider(provider: impl GlyphProvider + 'static, config: TextConfig) -> Self {
        let mut provider: Box<dyn GlyphProvider> = Box::new(provider);
        provider.resize(config.default_pixel_size);
        Self {
            cache: GlyphCache::from_boxed(provider),
            pixel_size: config.default_pixel_size,
            line_spacing: config.line_spacing,
            break_points: config.break_points,
            directives: ColorDirectiveSet::new(),
        }
    }

    /// Set the size used by [`find_or_load_glyph`](Self::find_or_load_glyph)
    /// and resize the faces to it.
    pub fn resize(&mut self, pixel_size: u32) {
        self.pixel_size = pixel_size;
        self.cache.resize(pixel_size);
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Look up `codepoint` at the current pixel size.
    pub fn find_or_load_glyph(&mut self, codepoint: char) -> Option<GlyphRecord> {
        self.cache.find_or_load(codepoint, self.pixel_size)
    }

    /// Draw `text` onto `target`. See [`TextLayout::render`].
    #[allow(clippy::too_many_arguments)]
    pub fn render<T: RenderTarget + ?Sized>(
        &mut self,
        target: &mut T,
        x: i32,
        y: i32,
        pixel_size: u32,
        wrap: TextWrap,
        color: Color,
        text: impl AsRef<[u8]>,
    ) -> TextResult<LayoutCursor> {
        self.layout()
            .render(target, x, y, pixel_size, wrap, color, text)
    }

    /// Width of `text` on a single line. See [`TextLayout::measure_width`].
    pub fn measure_width(&mut self, pixel_size: u32, text: impl AsRef<[u8]>) -> i32 {
        self.layout().measure_width(pixel_size, text)
    }

    pub fn add_break_point(&mut self, ch: char) {
        self.break_points.add(ch);
    }

    pub fn add_break_points(&mut self, chars: impl IntoIterator<Item = char>) {
        self.break_points.extend(chars);
    }

    /// Make `ch` toggle the draw color to `color`.
    pub fn add_color_directive(&mut self, ch: char, color: Color) {
        if let Some(previous) = self.directives.add(ch, color) {
            tracing::debug!("Directive {:?} changed from {:?} to {:?}", ch, previous, color);
        }
    }

    pub fn add_color_directives(&mut self, directives: impl IntoIterator<Item = (char, Color)>) {
        self.directives.extend(directives);
    }

    pub fn break_points(&self) -> &BreakPointSet {
        &self.break_points
    }

    pub fn directives(&self) -> &ColorDirectiveSet {
        &self.directives
    }

    pub fn cache(&self) -> &GlyphCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut GlyphCache {
        &mut self.cache
    }

    /// Release the faces and every glyph texture.
    pub fn exit(self) {
        tracing::info!("Font system shutting down: {}", self.cache.stats_string());
    }

    fn layout(&mut self) -> TextLayout<'_> {
        TextLayout {
            cache: &mut self.cache,
            break_points: &self.break_points,
            directives: &self.directives,
            line_spacing: self.line_spacing,
        }
    }
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("pixel_size", &self.pixel_size)
            .field("line_spacing", &self.line_spacing)
            .field("break_points", &self.break_points.len())
            .field("directives", &self.directives.len())
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryFontSource;

    #[test]
    fn test_initialize_without_faces_fails() {
        let source = MemoryFontSource::new();
        let config = TextConfig::default().with_locale("ja-JP");
        match FontSystem::initialize(&source, config) {
            Err(TextError::NoFontData { locale }) => assert_eq!(locale, "ja-JP"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_faces_are_skipped() {
        let source = MemoryFontSource::new().with_face("junk", b"junk".to_vec());
        let result = FontSystem::initialize(&source, TextConfig::default().with_locale("en-US"));
        assert!(matches!(result, Err(TextError::NoFontData { .. })));
    }
}
