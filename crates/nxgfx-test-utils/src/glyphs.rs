//! Deterministic glyph provider.

use std::sync::Arc;

use nxgfx_core::alloc::{HashMap, HashSet};
use nxgfx_text::{GlyphProvider, RasterizedGlyph};
use parking_lot::Mutex;

/// A call made on a [`FakeGlyphProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphCall {
    Resize(u32),
    Rasterize { codepoint: char, pixel_size: u32 },
}

/// Shared view of a provider's calls.
#[derive(Debug, Clone, Default)]
pub struct GlyphLog {
    calls: Arc<Mutex<Vec<GlyphCall>>>,
}

impl GlyphLog {
    pub fn calls(&self) -> Vec<GlyphCall> {
        self.calls.lock().clone()
    }

    pub fn rasterize_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GlyphCall::Rasterize { .. }))
            .count()
    }

    /// Number of rasterizations of `codepoint` at any size.
    pub fn rasterized(&self, codepoint: char) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GlyphCall::Rasterize { codepoint: c, .. } if *c == codepoint))
            .count()
    }

    pub fn resizes(&self) -> Vec<u32> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                GlyphCall::Resize(size) => Some(*size),
                GlyphCall::Rasterize { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, call: GlyphCall) {
        self.calls.lock().push(call);
    }
}

/// Glyph provider with predictable metrics.
///
/// Every non-control character is covered unless removed with
/// [`without`](Self::without). A glyph's advance is `pixel_size * 3 / 5` unless
/// overridden with [`with_advance`](Self::with_advance). The bitmap is one
/// pixel narrower than the advance and `pixel_size` tall, with the baseline at
/// four fifths of the height. Spaces have an empty bitmap.
#[derive(Debug, Clone)]
pub struct FakeGlyphProvider {
    pixel_size: u32,
    advances: HashMap<char, i16>,
    missing: HashSet<char>,
    log: GlyphLog,
}

impl FakeGlyphProvider {
    pub fn new() -> Self {
        Self {
            pixel_size: 16,
            advances: HashMap::new(),
            missing: HashSet::new(),
            log: GlyphLog::default(),
        }
    }

    /// Give `ch` a fixed advance at every size.
    pub fn with_advance(mut self, ch: char, advance: i16) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    /// Make `ch` unavailable, as if no face covered it.
    pub fn without(mut self, ch: char) -> Self {
        self.missing.insert(ch);
        self
    }

    /// Handle onto the call log that stays valid after the provider is moved.
    pub fn log(&self) -> GlyphLog {
        self.log.clone()
    }

    /// Advance `ch` gets at `pixel_size`.
    pub fn advance(&self, ch: char, pixel_size: u32) -> i16 {
        self.advances
            .get(&ch)
            .copied()
            .unwrap_or((pixel_size * 3 / 5) as i16)
    }
}

impl Default for FakeGlyphProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphProvider for FakeGlyphProvider {
    fn resize(&mut self, pixel_size: u32) {
        self.log.push(GlyphCall::Resize(pixel_size));
        self.pixel_size = pixel_size;
    }

    fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    fn rasterize(&mut self, codepoint: char) -> Option<RasterizedGlyph> {
        if codepoint.is_control() || self.missing.contains(&codepoint) {
            return None;
        }
        self.log.push(GlyphCall::Rasterize {
            codepoint,
            pixel_size: self.pixel_size,
        });

        let advance = self.advance(codepoint, self.pixel_size);
        let (width, height) = if codepoint == ' ' {
            (0, 0)
        } else {
            ((advance - 1).max(1) as u16, self.pixel_size as u16)
        };
        Some(RasterizedGlyph {
            width,
            height,
            advance_x: advance,
            bearing_top: (self.pixel_size * 4 / 5) as i16,
            bearing_left: 0,
            coverage: vec![255; width as usize * height as usize],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_and_missing_characters() {
        let mut provider = FakeGlyphProvider::new().with_advance('W', 11).without('?');
        let log = provider.log();
        provider.resize(10);

        assert_eq!(provider.rasterize('W').map(|g| g.advance_x), Some(11));
        assert_eq!(provider.rasterize('a').map(|g| g.advance_x), Some(6));
        assert!(provider.rasterize('?').is_none());
        assert!(provider.rasterize('\n').is_none());

        assert_eq!(log.resizes(), vec![10]);
        assert_eq!(log.rasterize_count(), 2);
    }

    #[test]
    fn test_space_has_empty_bitmap() {
        let mut provider = FakeGlyphProvider::new();
        let space = provider.rasterize(' ').unwrap();
        assert_eq!((space.width, space.height), (0, 0));
        assert!(space.coverage.is_empty());
        assert_eq!(space.advance_x, 9);
    }
}
