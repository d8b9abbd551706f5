/// An RGBA color with 8-bit channels.
///
/// Colors can be constructed from components, from a packed `0xRRGGBBAA`
/// value, or from a 24-bit hex code:
///
/// ```
/// use nxgfx_render::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// let packed = Color::from_raw(0xFF0000FF);
/// let from_hex = Color::from_hex(0xFF0000);
/// assert_eq!(red, packed);
/// assert_eq!(red, from_hex);
/// ```
///
/// Equality is exact per-channel equality. The struct is `#[repr(C)]` and
/// implements `bytemuck::Pod`, so a `&[Color]` can be viewed as raw RGBA8 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xRRGGBBAA` value.
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            r: (raw >> 24) as u8,
            g: (raw >> 16) as u8,
            b: (raw >> 8) as u8,
            a: raw as u8,
        }
    }

    /// Pack into a `0xRRGGBBAA` value.
    pub const fn to_raw(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Multiply every channel with `other`, the operation behind per-draw tints.
    pub const fn modulate(self, other: Color) -> Self {
        const fn mul(a: u8, b: u8) -> u8 {
            ((a as u16 * b as u16 + 127) / 255) as u8
        }
        Self {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }

    /// Convert to an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[u8; 3]> for Color {
    fn from(arr: [u8; 3]) -> Self {
        Self::rgb(arr[0], arr[1], arr[2])
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_packing() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_raw(), 0x12345678);
        assert_eq!(Color::from_raw(0x12345678), color);
    }

    #[test]
    fn test_modulate_by_white_is_identity() {
        let color = Color::rgba(10, 200, 33, 128);
        assert_eq!(color.modulate(Color::WHITE), color);
    }

    #[test]
    fn test_modulate_tints_white() {
        assert_eq!(Color::WHITE.modulate(Color::RED), Color::RED);
        let half = Color::rgba(255, 255, 255, 128).modulate(Color::BLUE);
        assert_eq!(half, Color::rgba(0, 0, 255, 128));
    }

    #[test]
    fn test_pod_cast() {
        let pixels = [Color::RED, Color::GREEN];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[255, 0, 0, 255, 0, 255, 0, 255]);
    }
}
