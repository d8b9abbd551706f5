//! nxgfx Render - textures, resource caches and render targets.
//!
//! This crate is the graphics side of the wrapper:
//! - [`Color`] and [`Surface`] for CPU pixel data
//! - [`Texture`] shared through `Arc`, registered in a [`TextureManager`]
//! - [`RenderTarget`], the "copy a textured rectangle with a tint" seam
//! - [`Canvas`], a software render target usable without any GPU

mod blend;
mod canvas;
mod color;
mod error;
pub mod resource;
mod surface;
mod target;
mod texture;

pub use blend::BlendMode;
pub use canvas::Canvas;
pub use color::Color;
pub use error::{RenderError, RenderResult};
pub use resource::ResourceCache;
pub use surface::Surface;
pub use target::RenderTarget;
pub use texture::{Texture, TextureId, TextureManager};

// Re-export geometry types used in the public API
pub use nxgfx_core::geometry::{Rect, Size};
