//! Render target abstraction.

use nxgfx_core::geometry::{Rect, Size};

use crate::{Color, RenderResult, Texture};

/// Anything textures can be drawn onto.
///
/// Callers pass the target explicitly to every draw, so there is no global
/// "active target" to switch. Implemented by the software [`Canvas`] and by
/// test doubles; a hardware backend implements it for its window or
/// offscreen surfaces.
///
/// [`Canvas`]: crate::Canvas
pub trait RenderTarget {
    /// Size of the drawable area in pixels.
    fn size(&self) -> Size<u32>;

    /// Fill the whole target with `color`.
    fn clear(&mut self, color: Color) -> RenderResult<()>;

    /// Copy `src` of `texture` (the whole texture when `None`) into `dst`,
    /// multiplying every texel by `tint`.
    fn copy(
        &mut self,
        texture: &Texture,
        src: Option<Rect<i32>>,
        dst: Rect<i32>,
        tint: Color,
    ) -> RenderResult<()>;

    /// Draw the whole texture unscaled with its top-left corner at `(x, y)`.
    fn draw(&mut self, texture: &Texture, x: i32, y: i32, tint: Color) -> RenderResult<()> {
        let dst = Rect::new(x, y, texture.width() as i32, texture.height() as i32);
        self.copy(texture, None, dst, tint)
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn size(&self) -> Size<u32> {
        (**self).size()
    }

    fn clear(&mut self, color: Color) -> RenderResult<()> {
        (**self).clear(color)
    }

    fn copy(
        &mut self,
        texture: &Texture,
        src: Option<Rect<i32>>,
        dst: Rect<i32>,
        tint: Color,
    ) -> RenderResult<()> {
        (**self).copy(texture, src, dst, tint)
    }
}
