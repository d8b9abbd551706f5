//! CPU-side pixel buffers.

use crate::{Color, RenderError, RenderResult};

/// An owned `width × height` RGBA pixel buffer, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Create a surface filled with `color`.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wrap existing pixels. Fails when the buffer length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> RenderResult<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(RenderError::InvalidSurface {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a white surface whose alpha channel is the given coverage map.
    ///
    /// Glyph bitmaps are stored this way so a draw-time tint recolors them
    /// without touching the pixels.
    pub fn from_coverage(width: u32, height: u32, coverage: &[u8]) -> RenderResult<Self> {
        let pixels = coverage
            .iter()
            .map(|&alpha| Color::rgba(255, 255, 255, alpha))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coverage_is_white_with_alpha() {
        let surface = Surface::from_coverage(2, 1, &[0, 200]).unwrap();
        assert_eq!(surface.pixel(0, 0), Some(Color::rgba(255, 255, 255, 0)));
        assert_eq!(surface.pixel(1, 0), Some(Color::rgba(255, 255, 255, 200)));
    }

    #[test]
    fn test_from_pixels_rejects_length_mismatch() {
        let result = Surface::from_pixels(2, 2, vec![Color::BLACK; 3]);
        assert!(matches!(result, Err(RenderError::InvalidSurface { len: 3, .. })));
    }

    #[test]
    fn test_zero_sized_surface() {
        let surface = Surface::from_coverage(0, 0, &[]).unwrap();
        assert!(surface.is_empty());
        assert_eq!(surface.pixel(0, 0), None);
    }

    #[test]
    fn test_as_bytes_layout() {
        let surface = Surface::new(1, 1, Color::rgba(1, 2, 3, 4));
        assert_eq!(surface.as_bytes(), &[1, 2, 3, 4]);
    }
}
