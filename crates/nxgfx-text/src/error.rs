use nxgfx_render::RenderError;

/// Errors that can occur in the text rendering system.
///
/// Only initialization and render-target failures are errors. A glyph that no
/// face provides, or malformed UTF-8, shortens the output instead.
#[derive(Debug, Clone)]
pub enum TextError {
    /// The font source produced no usable faces.
    NoFontData {
        locale: String,
    },

    /// A face buffer could not be parsed by the rasterizer.
    FontLoadError {
        name: String,
        reason: String,
    },

    /// Drawing to the render target failed.
    RenderTargetError(String),

    /// Generic IO error.
    IoError(String),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::NoFontData { locale } => {
                write!(f, "No font faces available for locale '{}'", locale)
            }
            TextError::FontLoadError { name, reason } => {
                write!(f, "Failed to load font face '{}': {}", name, reason)
            }
            TextError::RenderTargetError(msg) => write!(f, "Render target error: {}", msg),
            TextError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for TextError {}

impl From<std::io::Error> for TextError {
    fn from(err: std::io::Error) -> Self {
        TextError::IoError(err.to_string())
    }
}

impl From<RenderError> for TextError {
    fn from(err: RenderError) -> Self {
        TextError::RenderTargetError(err.to_string())
    }
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
