//! Software render target.

use nxgfx_core::geometry::{Rect, Size};
use nxgfx_core::profiling::profile_function;

use crate::{BlendMode, Color, RenderError, RenderResult, RenderTarget, Surface, Texture};

/// A CPU-side render target.
///
/// Copies are unscaled when `src` and `dst` have the same size and use
/// nearest-neighbour sampling otherwise. Everything is clipped to the canvas.
///
/// ```
/// use nxgfx_render::{Canvas, Color, RenderTarget};
///
/// let mut canvas = Canvas::new(4, 4);
/// canvas.clear(Color::BLUE).unwrap();
/// assert_eq!(canvas.pixel(3, 3), Some(Color::BLUE));
/// ```
pub struct Canvas {
    surface: Surface,
    blend_mode: BlendMode,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height, Color::TRANSPARENT),
            blend_mode: BlendMode::default(),
        }
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.surface.pixel(x, y)
    }

    pub fn pixels(&self) -> &[Color] {
        self.surface.pixels()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Consume the canvas, keeping its pixels.
    pub fn into_surface(self) -> Surface {
        self.surface
    }

    /// Encode the canvas as a PNG file.
    #[cfg(feature = "image")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> RenderResult<()> {
        let image = image::RgbaImage::from_raw(
            self.surface.width(),
            self.surface.height(),
            self.surface.as_bytes().to_vec(),
        )
        .ok_or_else(|| RenderError::TargetUnavailable("canvas buffer size mismatch".into()))?;
        image.save(path)?;
        Ok(())
    }
}

impl RenderTarget for Canvas {
    fn size(&self) -> Size<u32> {
        Size::new(self.surface.width(), self.surface.height())
    }

    fn clear(&mut self, color: Color) -> RenderResult<()> {
        self.surface.pixels_mut().fill(color);
        Ok(())
    }

    fn copy(
        &mut self,
        texture: &Texture,
        src: Option<Rect<i32>>,
        dst: Rect<i32>,
        tint: Color,
    ) -> RenderResult<()> {
        profile_function!();
        let bounds = Rect::new(0, 0, texture.width() as i32, texture.height() as i32);
        let src = match src {
            Some(src) => {
                if src.x < 0 || src.y < 0 || src.right() > bounds.right() || src.bottom() > bounds.bottom() {
                    return Err(RenderError::InvalidRegion {
                        texture: texture.name().to_owned(),
                        width: texture.width(),
                        height: texture.height(),
                    });
                }
                src
            }
            None => bounds,
        };
        if src.is_empty() || dst.is_empty() {
            return Ok(());
        }

        let canvas = Rect::new(0, 0, self.surface.width() as i32, self.surface.height() as i32);
        let Some(visible) = dst.intersect(&canvas) else {
            return Ok(());
        };

        let canvas_width = self.surface.width() as usize;
        let texels = texture.surface();
        let blend_mode = self.blend_mode;
        let pixels = self.surface.pixels_mut();

        for y in visible.y..visible.bottom() {
            let sy = src.y + (y - dst.y) * src.height / dst.height;
            for x in visible.x..visible.right() {
                let sx = src.x + (x - dst.x) * src.width / dst.width;
                let Some(texel) = texels.pixel(sx as u32, sy as u32) else {
                    continue;
                };
                let index = y as usize * canvas_width + x as usize;
                pixels[index] = blend_mode.blend(texel.modulate(tint), pixels[index]);
            }
        }
        Ok(())
    }
}
