//! Error types for textures and render targets.

use std::fmt;

/// Errors that can occur while creating textures or drawing to a target.
#[derive(Debug)]
pub enum RenderError {
    /// Pixel data does not match the declared dimensions.
    InvalidSurface {
        width: u32,
        height: u32,
        len: usize,
    },

    /// A source region lies outside the texture it refers to.
    InvalidRegion {
        texture: String,
        width: u32,
        height: u32,
    },

    /// The render target can no longer be drawn to.
    TargetUnavailable(String),

    /// Generic IO error.
    Io(std::io::Error),

    /// Encoding a canvas to an image file failed.
    #[cfg(feature = "image")]
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSurface { width, height, len } => write!(
                f,
                "Surface of {}x{} pixels cannot hold {} pixel values",
                width, height, len
            ),
            RenderError::InvalidRegion {
                texture,
                width,
                height,
            } => write!(
                f,
                "Source region is outside texture '{}' ({}x{})",
                texture, width, height
            ),
            RenderError::TargetUnavailable(msg) => write!(f, "Render target unavailable: {}", msg),
            RenderError::Io(err) => write!(f, "IO error: {}", err),
            #[cfg(feature = "image")]
            RenderError::Image(err) => write!(f, "Image encoding failed: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            #[cfg(feature = "image")]
            RenderError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
