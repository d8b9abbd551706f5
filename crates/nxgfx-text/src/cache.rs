//! Glyph cache keyed by codepoint and pixel size.
//!
//! Records are created on first lookup and never mutated afterwards. Changing
//! the pixel size changes the key, so every size of a codepoint gets its own
//! record and texture.

use std::sync::Arc;

use nxgfx_core::alloc::HashMap;
use nxgfx_core::profiling::profile_function;
use nxgfx_render::{Surface, Texture, TextureManager};

use crate::font::GlyphProvider;

/// Key for a cached glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub codepoint: char,
    pub pixel_size: u32,
}

impl GlyphKey {
    pub fn new(codepoint: char, pixel_size: u32) -> Self {
        Self {
            codepoint,
            pixel_size,
        }
    }

    /// Name of the glyph texture in the texture manager.
    pub fn texture_name(&self) -> String {
        format!("glyph:{:08x}:{}", self.codepoint as u32, self.pixel_size)
    }
}

/// Metrics and texture of one rasterized glyph.
///
/// The texture is white with the glyph coverage in its alpha channel, so a
/// draw-time tint gives it any color.
#[derive(Debug, Clone)]
pub struct GlyphRecord {
    pub width: u16,
    pub height: u16,
    pub advance_x: i16,
    pub bearing_top: i16,
    pub bearing_left: i16,
    pub texture: Arc<Texture>,
}

/// Lazily populated map from [`GlyphKey`] to [`GlyphRecord`].
pub struct GlyphCache {
    provider: Box<dyn GlyphProvider>,
    records: HashMap<GlyphKey, GlyphRecord>,
    textures: TextureManager,
    hits: u64,
    misses: u64,
}

impl GlyphCache {
    pub fn new(provider: impl GlyphProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn GlyphProvider>) -> Self {
        Self {
            provider,
            records: HashMap::with_capacity(256),
            textures: TextureManager::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the record for `codepoint` at `pixel_size`, rasterizing it on
    /// first use.
    ///
    /// A miss resizes the provider to `pixel_size` when it is at a different
    /// size. The provider keeps that size for every later lookup.
    ///
    /// Returns `None` when no face provides the codepoint. Nothing is cached
    /// in that case.
    pub fn find_or_load(&mut self, codepoint: char, pixel_size: u32) -> Option<GlyphRecord> {
        profile_function!();
        let key = GlyphKey::new(codepoint, pixel_size);
        if let Some(record) = self.records.get(&key) {
            self.hits += 1;
            tracing::trace!("Glyph cache hit for {:?} at {}px", codepoint, pixel_size);
            return Some(record.clone());
        }

        self.misses += 1;
        if self.provider.pixel_size() != pixel_size {
            self.provider.resize(pixel_size);
        }

        let Some(glyph) = self.provider.rasterize(codepoint) else {
            tracing::warn!("No face provides {:?} (U+{:04X})", codepoint, codepoint as u32);
            return None;
        };

        let surface = match Surface::from_coverage(
            u32::from(glyph.width),
            u32::from(glyph.height),
            &glyph.coverage,
        ) {
            Ok(surface) => surface,
            Err(err) => {
                tracing::warn!("Discarding glyph {:?}: {}", codepoint, err);
                return None;
            }
        };

        let name = key.texture_name();
        let texture = self
            .textures
            .load_with(&name, || Texture::new(name.clone(), surface));

        let record = GlyphRecord {
            width: glyph.width,
            height: glyph.height,
            advance_x: glyph.advance_x,
            bearing_top: glyph.bearing_top,
            bearing_left: glyph.bearing_left,
            texture,
        };
        tracing::debug!(
            "Cached glyph {:?} at {}px ({}x{}, advance {})",
            codepoint,
            pixel_size,
            record.width,
            record.height,
            record.advance_x
        );
        self.records.insert(key, record.clone());
        Some(record)
    }

    /// Resize the provider without touching any cached record.
    pub fn resize(&mut self, pixel_size: u32) {
        self.provider.resize(pixel_size);
    }

    /// Current provider size.
    pub fn pixel_size(&self) -> u32 {
        self.provider.pixel_size()
    }

    pub fn contains(&self, codepoint: char, pixel_size: u32) -> bool {
        self.records.contains_key(&GlyphKey::new(codepoint, pixel_size))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }

    pub fn stats_string(&self) -> String {
        format!(
            "GlyphCache: {} glyphs, {} textures, {:.1}% hit rate ({} hits, {} misses)",
            self.len(),
            self.textures.len(),
            self.hit_rate() * 100.0,
            self.hits,
            self.misses
        )
    }

    /// Drop every record and reset the statistics.
    ///
    /// Textures stay registered until [`evict_unused`](Self::evict_unused)
    /// finds nobody else holding them.
    pub fn clear(&mut self) {
        self.records.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Release glyph textures referenced by neither a record nor a caller.
    pub fn evict_unused(&mut self) -> usize {
        self.textures.evict_unused()
    }

    pub fn textures(&self) -> &TextureManager {
        &self.textures
    }
}

impl std::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphCache")
            .field("glyphs", &self.records.len())
            .field("textures", &self.textures.len())
            .field("pixel_size", &self.provider.pixel_size())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
