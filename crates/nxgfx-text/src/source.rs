//! Platform font data.
//!
//! A [`FontSource`] yields the raw face buffers for a locale, in fallback
//! order. [`SystemFontSource`] models a console-style shared font collection
//! stored as one file per face kind; [`MemoryFontSource`] serves embedded
//! buffers.

use std::path::{Path, PathBuf};

use crate::TextResult;

/// Raw bytes of one font face.
#[derive(Debug, Clone)]
pub struct FontData {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FontData {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Provider of face buffers for a locale.
pub trait FontSource {
    /// Face buffers in fallback order, highest priority first.
    fn load_faces(&self, locale: &str) -> TextResult<Vec<FontData>>;
}

/// Faces held in memory, served in insertion order regardless of locale.
#[derive(Debug, Clone, Default)]
pub struct MemoryFontSource {
    faces: Vec<FontData>,
}

impl MemoryFontSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.faces.push(FontData::new(name, bytes));
        self
    }
}

impl FontSource for MemoryFontSource {
    fn load_faces(&self, _locale: &str) -> TextResult<Vec<FontData>> {
        Ok(self.faces.clone())
    }
}

/// The faces that make up the shared system font collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharedFontKind {
    /// Latin, Japanese and common symbols.
    Standard,
    ChineseSimplified,
    /// Extended Simplified Chinese coverage.
    ChineseSimplifiedExt,
    ChineseTraditional,
    Korean,
    /// Platform button glyphs and pictographs.
    Extension,
}

impl SharedFontKind {
    pub const ALL: [SharedFontKind; 6] = [
        SharedFontKind::Standard,
        SharedFontKind::ChineseSimplified,
        SharedFontKind::ChineseSimplifiedExt,
        SharedFontKind::ChineseTraditional,
        SharedFontKind::Korean,
        SharedFontKind::Extension,
    ];

    /// File name of this face inside the collection directory.
    pub fn file_name(self) -> &'static str {
        match self {
            SharedFontKind::Standard => "standard.ttf",
            SharedFontKind::ChineseSimplified => "chinese_simplified.ttf",
            SharedFontKind::ChineseSimplifiedExt => "chinese_simplified_ext.ttf",
            SharedFontKind::ChineseTraditional => "chinese_traditional.ttf",
            SharedFontKind::Korean => "korean.ttf",
            SharedFontKind::Extension => "extension.ttf",
        }
    }

    /// Fallback order for `locale` (a BCP 47 tag such as `zh-Hant-TW`).
    ///
    /// Standard always comes first and Extension last. The CJK faces in
    /// between put the locale's own script first.
    pub fn load_order(locale: &str) -> [SharedFontKind; 6] {
        use SharedFontKind::*;

        let locale = locale.to_ascii_lowercase().replace('_', "-");
        let is_traditional = locale.starts_with("zh")
            && (locale.contains("hant")
                || locale.ends_with("-tw")
                || locale.ends_with("-hk")
                || locale.ends_with("-mo"));

        let cjk = if is_traditional {
            [ChineseTraditional, ChineseSimplified, ChineseSimplifiedExt, Korean]
        } else if locale.starts_with("ko") {
            [Korean, ChineseSimplified, ChineseSimplifiedExt, ChineseTraditional]
        } else {
            [ChineseSimplified, ChineseSimplifiedExt, ChineseTraditional, Korean]
        };

        [Standard, cjk[0], cjk[1], cjk[2], cjk[3], Extension]
    }
}

/// Shared font collection stored as one file per [`SharedFontKind`].
///
/// Kinds whose file is absent are skipped, so a directory holding only
/// `standard.ttf` is a valid (Latin-only) collection.
#[derive(Debug, Clone)]
pub struct SystemFontSource {
    root: PathBuf,
}

impl SystemFontSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FontSource for SystemFontSource {
    fn load_faces(&self, locale: &str) -> TextResult<Vec<FontData>> {
        let mut faces = Vec::new();
        for kind in SharedFontKind::load_order(locale) {
            let path = self.root.join(kind.file_name());
            match std::fs::read(&path) {
                Ok(bytes) => {
                    tracing::debug!("Read shared font {:?} from {}", kind, path.display());
                    faces.push(FontData::new(kind.file_name(), bytes));
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!("Shared font {:?} not found at {}", kind, path.display());
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(faces)
    }
}
