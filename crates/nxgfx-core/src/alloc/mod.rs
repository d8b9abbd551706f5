//! Optimized collection types for nxgfx.
//!
//! Every cache in the workspace keys through these aliases so the hasher is
//! chosen in one place.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
