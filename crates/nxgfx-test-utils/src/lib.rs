//! Test utilities for nxgfx.
//!
//! - [`MockTarget`] - a [`RenderTarget`](nxgfx_render::RenderTarget) that
//!   records every draw instead of producing pixels
//! - [`FakeGlyphProvider`] - deterministic glyph metrics with a shared log of
//!   rasterize and resize calls
//!
//! # Example
//!
//! ```rust
//! use nxgfx_render::Color;
//! use nxgfx_test_utils::{FakeGlyphProvider, MockTarget};
//! use nxgfx_text::{FontSystem, TextConfig, NO_WRAP};
//!
//! let provider = FakeGlyphProvider::new();
//! let log = provider.log();
//! let mut fonts = FontSystem::with_provider(provider, TextConfig::default());
//!
//! let mut target = MockTarget::new(320, 240);
//! fonts.render(&mut target, 0, 0, 10, NO_WRAP, Color::WHITE, "Hi").unwrap();
//!
//! assert_eq!(target.draw_count(), 2);
//! assert_eq!(log.rasterize_count(), 2);
//! ```
//!
//! Both doubles keep their logs behind `parking_lot::Mutex` so a handle taken
//! before the double is moved into a `FontSystem` still sees every call.

mod glyphs;
mod target;

pub use glyphs::{FakeGlyphProvider, GlyphCall, GlyphLog};
pub use target::{DrawCall, MockTarget};
