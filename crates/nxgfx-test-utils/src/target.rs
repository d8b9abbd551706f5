//! Recording render target.

use std::sync::Arc;

use nxgfx_render::{Color, Rect, RenderError, RenderResult, RenderTarget, Size, Texture, TextureId};
use parking_lot::Mutex;

/// One call made on a [`MockTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    Copy {
        texture_name: String,
        texture_id: TextureId,
        src: Option<Rect<i32>>,
        dst: Rect<i32>,
        tint: Color,
    },
}

/// A render target that records calls instead of drawing.
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct MockTarget {
    size: Size<u32>,
    calls: Arc<Mutex<Vec<DrawCall>>>,
    fail_copies: bool,
}

impl MockTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_copies: false,
        }
    }

    /// A target whose every `copy` fails, for error propagation tests.
    pub fn failing(width: u32, height: u32) -> Self {
        Self {
            fail_copies: true,
            ..Self::new(width, height)
        }
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    /// Destination rectangles and tints of every copy, in draw order.
    pub fn draws(&self) -> Vec<(Rect<i32>, Color)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Copy { dst, tint, .. } => Some((*dst, *tint)),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }

    /// Tint of every copy, in draw order.
    pub fn tints(&self) -> Vec<Color> {
        self.draws().into_iter().map(|(_, tint)| tint).collect()
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DrawCall::Copy { .. }))
            .count()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl RenderTarget for MockTarget {
    fn size(&self) -> Size<u32> {
        self.size
    }

    fn clear(&mut self, color: Color) -> RenderResult<()> {
        self.calls.lock().push(DrawCall::Clear(color));
        Ok(())
    }

    fn copy(
        &mut self,
        texture: &Texture,
        src: Option<Rect<i32>>,
        dst: Rect<i32>,
        tint: Color,
    ) -> RenderResult<()> {
        if self.fail_copies {
            return Err(RenderError::TargetUnavailable("mock target is failing".into()));
        }
        self.calls.lock().push(DrawCall::Copy {
            texture_name: texture.name().to_owned(),
            texture_id: texture.id(),
            src,
            dst,
            tint,
        });
        Ok(())
    }
}
