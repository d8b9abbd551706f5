//! nxgfx - a small wrapper around 2D drawing and font rasterization
//!
//! Resources are reference-counted handles kept in name-keyed caches, and text
//! is laid out through an explicit [`FontSystem`](text::FontSystem) context:
//!
//! - **Render**: colors, CPU surfaces, shared textures, the
//!   [`RenderTarget`](render::RenderTarget) trait and a software canvas
//! - **Text**: glyph cache, line wrapping and inline color directives
//! - **Core**: logging setup, puffin profiling, geometry and hash maps
//!
//! # Quick Start
//!
//! ```no_run
//! use nxgfx::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     nxgfx::core::logging::init();
//!
//!     let source = SystemFontSource::new("romfs/fonts");
//!     let mut fonts = FontSystem::initialize(&source, TextConfig::default())?;
//!     let mut canvas = Canvas::new(1280, 720);
//!
//!     canvas.clear(Color::BLACK)?;
//!     fonts.render(&mut canvas, 32, 32, 24, NO_WRAP, Color::WHITE, "Score: 100")?;
//!     fonts.exit();
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `render` (default) - re-export `nxgfx-render`
//! - `text` (default) - re-export `nxgfx-text`
//! - `image` - `Canvas::save_png`

// Re-export core types
pub use nxgfx_core as core;
pub use nxgfx_core::math;

#[cfg(feature = "render")]
pub use nxgfx_render as render;

#[cfg(feature = "text")]
pub use nxgfx_text as text;

/// Commonly used types.
pub mod prelude {
    pub use crate::math::{IVec2, Vec2};
    pub use nxgfx_core::geometry::{Rect, Size};

    #[cfg(feature = "render")]
    pub use nxgfx_render::{
        Canvas, Color, RenderError, RenderResult, RenderTarget, Texture, TextureManager,
    };

    #[cfg(feature = "text")]
    pub use nxgfx_text::{
        BreakPointSet, FontSource, FontSystem, MemoryFontSource, NO_WRAP, SystemFontSource,
        TextConfig, TextError, TextResult, TextWrap,
    };
}
