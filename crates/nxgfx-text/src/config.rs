use crate::breaker::BreakPointSet;

/// Configuration for a [`FontSystem`](crate::FontSystem).
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Size used by [`find_or_load_glyph`](crate::FontSystem::find_or_load_glyph)
    /// until the first resize.
    /// Default: 20
    pub default_pixel_size: u32,
    /// Line advance as a multiple of the pixel size.
    /// Default: 1.25
    pub line_spacing: f32,
    /// Initial break characters.
    /// Default: [`BreakPointSet::with_defaults`]
    pub break_points: BreakPointSet,
    /// Locale used to order the system font faces. `None` asks the OS.
    pub locale: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_pixel_size: 20,
            line_spacing: 1.25,
            break_points: BreakPointSet::with_defaults(),
            locale: None,
        }
    }
}

impl TextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pixel_size(mut self, pixel_size: u32) -> Self {
        self.default_pixel_size = pixel_size;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_break_points(mut self, break_points: BreakPointSet) -> Self {
        self.break_points = break_points;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Vertical pen advance for one line at `pixel_size`, truncated.
    pub fn line_advance(&self, pixel_size: u32) -> i32 {
        line_advance(pixel_size, self.line_spacing)
    }
}

pub(crate) fn line_advance(pixel_size: u32, line_spacing: f32) -> i32 {
    (pixel_size as f32 * line_spacing) as i32
}
