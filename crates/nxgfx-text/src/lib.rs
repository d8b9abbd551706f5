//! nxgfx Text - glyph caching and line layout on top of nxgfx-render
//!
//! This crate draws UTF-8 text onto any [`RenderTarget`]:
//! - Fallback font faces loaded from a [`FontSource`] and rasterized with `fontdue`
//! - A [`GlyphCache`] keyed by codepoint and pixel size, one texture per glyph
//! - Greedy word wrapping at configurable [`BreakPointSet`] characters
//! - Inline color directives that toggle the draw color
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nxgfx_render::{Canvas, Color};
//! use nxgfx_text::{FontSystem, SystemFontSource, TextConfig, TextWrap};
//!
//! let source = SystemFontSource::new("/usr/share/nxgfx/fonts");
//! let mut fonts = FontSystem::initialize(&source, TextConfig::default())?;
//! fonts.add_color_directive('\u{E000}', Color::RED);
//!
//! let mut canvas = Canvas::new(320, 240);
//! fonts.render(
//!     &mut canvas,
//!     8,
//!     8,
//!     20,
//!     TextWrap::Width(300),
//!     Color::WHITE,
//!     "Hello, \u{E000}world\u{E000}!",
//! )?;
//! # Ok::<(), nxgfx_text::TextError>(())
//! ```
//!
//! ## Examples
//!
//! ```bash
//! cargo run --package nxgfx-text --example render_text --features image -- <font-dir>
//! ```
//!
//! [`RenderTarget`]: nxgfx_render::RenderTarget

mod breaker;
mod cache;
mod config;
mod decode;
mod directive;
mod error;
mod font;
mod layout;
mod source;
mod system;

pub use breaker::BreakPointSet;
pub use cache::{GlyphCache, GlyphKey, GlyphRecord};
pub use config::TextConfig;
pub use decode::decode_utf8;
pub use directive::{ColorDirectiveSet, ColorState};
pub use error::{TextError, TextResult};
pub use font::{FontFace, FontFaceSet, FontdueFace, GlyphProvider, RasterizedGlyph};
pub use layout::{LayoutCursor, NO_WRAP, TextLayout, TextWrap};
pub use source::{FontData, FontSource, MemoryFontSource, SharedFontKind, SystemFontSource};
pub use system::FontSystem;
