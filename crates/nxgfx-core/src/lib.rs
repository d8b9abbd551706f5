//! nxgfx Core
//!
//! Shared utilities for the nxgfx crates: hash collections, logging setup,
//! profiling scopes and small geometry types.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
