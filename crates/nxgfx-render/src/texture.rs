//! Immutable, shareable textures.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Surface, resource::ResourceCache};

/// Process-unique texture identifier.
///
/// Backends that upload textures lazily key their uploads by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureId(u64);

impl TextureId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A texture: pixel data plus the name it was registered under.
///
/// Textures never change after creation. They are shared through `Arc`,
/// usually handed out by a [`TextureManager`].
#[derive(Debug)]
pub struct Texture {
    id: TextureId,
    name: String,
    surface: Surface,
}

impl Texture {
    pub fn new(name: impl Into<String>, surface: Surface) -> Self {
        Self {
            id: TextureId::next(),
            name: name.into(),
            surface,
        }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }
}

/// Name-keyed texture cache.
pub type TextureManager = ResourceCache<Texture>;
