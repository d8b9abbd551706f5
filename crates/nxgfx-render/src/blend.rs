//! Blend mode presets for the software canvas.

use crate::Color;

/// How source texels combine with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// No blending - source completely replaces destination.
    Replace,

    /// Standard alpha blending.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb * (1 - src.a)`
    #[default]
    Alpha,

    /// Additive blending, weighted by source alpha.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb`
    Additive,

    /// Multiplicative blending.
    ///
    /// Formula: `src.rgb * dst.rgb`
    Multiply,
}

impl BlendMode {
    /// Combine `src` over `dst`.
    pub fn blend(self, src: Color, dst: Color) -> Color {
        match self {
            BlendMode::Replace => src,
            BlendMode::Alpha => {
                let sa = src.a as u32;
                let inv = 255 - sa;
                let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8;
                let a = sa + (dst.a as u32 * inv + 127) / 255;
                Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), a as u8)
            }
            BlendMode::Additive => {
                let sa = src.a as u32;
                let add = |s: u8, d: u8| (d as u32 + (s as u32 * sa + 127) / 255).min(255) as u8;
                Color::rgba(add(src.r, dst.r), add(src.g, dst.g), add(src.b, dst.b), dst.a)
            }
            BlendMode::Multiply => {
                let mul = |s: u8, d: u8| ((s as u32 * d as u32 + 127) / 255) as u8;
                Color::rgba(mul(src.r, dst.r), mul(src.g, dst.g), mul(src.b, dst.b), dst.a)
            }
        }
    }
}
