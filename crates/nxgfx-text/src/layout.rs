//! Greedy line layout and drawing.
//!
//! Text is split into words at break characters. Before a word is drawn its
//! width is measured, and when it would reach the wrap edge the pen moves to
//! the next line first. Words are never split. Inside a word a `'\n'` forces a
//! line break, color directives switch the tint, spaces only advance, and
//! every other codepoint is drawn from the glyph cache.
//!
//! Malformed UTF-8 ends the pass at the first bad sequence. Everything before
//! it stays drawn.

use nxgfx_core::math::IVec2;
use nxgfx_core::profiling::profile_function;
use nxgfx_render::{Color, RenderTarget};

use crate::TextResult;
use crate::breaker::BreakPointSet;
use crate::cache::GlyphCache;
use crate::config::line_advance;
use crate::decode::decode_utf8;
use crate::directive::{ColorDirectiveSet, ColorState};

/// Wrapping mode for [`TextLayout::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    /// Lines only end at `'\n'`.
    #[default]
    None,
    /// Wrap before a word whose right edge would reach `x + width`.
    Width(i32),
}

/// Shorthand for [`TextWrap::None`].
pub const NO_WRAP: TextWrap = TextWrap::None;

impl From<Option<i32>> for TextWrap {
    fn from(width: Option<i32>) -> Self {
        width.map_or(TextWrap::None, TextWrap::Width)
    }
}

/// Where a render pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCursor {
    /// Pen position after the last drawn glyph.
    pub position: IVec2,
    /// Line breaks emitted, both wrapped and explicit.
    pub line_breaks: u32,
}

/// One layout pass over borrowed font state.
pub struct TextLayout<'a> {
    pub cache: &'a mut GlyphCache,
    pub break_points: &'a BreakPointSet,
    pub directives: &'a ColorDirectiveSet,
    pub line_spacing: f32,
}

impl TextLayout<'_> {
    /// Lay out and draw `text` with its first line's top-left at `(x, y)`.
    ///
    /// Only render target failures are errors. Missing glyphs are skipped
    /// without moving the pen. Pen arithmetic saturates at the `i32` range,
    /// so `TextWrap::Width(i32::MAX)` never wraps.
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
        profile_function!();
        let text = text.as_ref();
        let line_height = line_advance(pixel_size, self.line_spacing);
        let size = i32::try_from(pixel_size).unwrap_or(i32::MAX);

        let mut pen = IVec2::new(x, y);
        let mut line_breaks = 0;
        let mut state = ColorState::new(color);
        let mut newline = |pen: &mut IVec2| {
            pen.x = x;
            pen.y = pen.y.saturating_add(line_height);
            line_breaks += 1;
        };

        let mut start = 0;
        'words: while start < text.len() {
            let end = start + self.break_points.next_break(&text[start..]);
            let word = &text[start..end];
            start = end;

            if let TextWrap::Width(width) = wrap
                && pen.x.saturating_add(self.measure_width(pixel_size, word)) >= x.saturating_add(width)
            {
                newline(&mut pen);
            }

            let mut offset = 0;
            while offset < word.len() {
                let Some((ch, len)) = decode_utf8(&word[offset..]) else {
                    break 'words;
                };
                offset += len;

                if ch == '\n' {
                    newline(&mut pen);
                    continue;
                }
                if state.apply(ch, self.directives) {
                    continue;
                }
                let Some(glyph) = self.cache.find_or_load(ch, pixel_size) else {
                    continue;
                };

                if ch != ' ' {
                    target.draw(
                        &glyph.texture,
                        pen.x.saturating_add(i32::from(glyph.bearing_left)),
                        pen.y
                            .saturating_add(size)
                            .saturating_sub(i32::from(glyph.bearing_top)),
                        state.active(),
                    )?;
                }
                pen.x = pen.x.saturating_add(i32::from(glyph.advance_x));
            }
        }

        Ok(LayoutCursor {
            position: pen,
            line_breaks,
        })
    }

    /// Sum of glyph advances in `text`, ignoring wrapping.
    ///
    /// Newlines and color directives add nothing. Missing glyphs are skipped.
    /// The sum saturates at `i32::MAX`.
    pub fn measure_width(&mut self, pixel_size: u32, text: impl AsRef<[u8]>) -> i32 {
        profile_function!();
        let mut text = text.as_ref();
        let mut width = 0;
        while let Some((ch, len)) = decode_utf8(text) {
            text = &text[len..];
            if ch == '\n' || self.directives.contains(ch) {
                continue;
            }
            if let Some(glyph) = self.cache.find_or_load(ch, pixel_size) {
                width = i32::saturating_add(width, i32::from(glyph.advance_x));
            }
        }
        width
    }
}
