//! Vector types used for pen positions and rectangles.
//!
//! Re-exports the parts of [`glam`] the workspace relies on. Text layout works
//! in whole pixels, so the integer vectors are the common currency.
//!
//! ```
//! use nxgfx_core::math::IVec2;
//!
//! let pen = IVec2::new(10, 20) + IVec2::new(8, 0);
//! assert_eq!(pen, IVec2::new(18, 20));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{IVec2, UVec2, Vec2};
