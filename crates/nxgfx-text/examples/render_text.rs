//! Render Text Example
//!
//! Draws a wrapped, colored paragraph onto a software canvas and saves it as
//! a PNG:
//! - Loading the shared font collection with `SystemFontSource`
//! - Color directives for inline highlighting
//! - Word wrapping at a fixed width
//!
//! ## Usage
//! ```bash
//! cargo run -p nxgfx-text --example render_text --features image -- <font-dir> [out.png]
//! ```
//!
//! `<font-dir>` must hold at least `standard.ttf`. Any regular TrueType font
//! copied under that name works.

use nxgfx_core::logging;
use nxgfx_render::{Canvas, Color, RenderTarget};
use nxgfx_text::{FontSystem, NO_WRAP, SystemFontSource, TextConfig, TextWrap};

const HIGHLIGHT: char = '\u{E000}';
const SUBTLE: char = '\u{E001}';

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let Some(font_dir) = args.next() else {
        eprintln!("usage: render_text <font-dir> [out.png]");
        std::process::exit(2);
    };
    let output = args.next().unwrap_or_else(|| "render_text.png".to_owned());

    let source = SystemFontSource::new(font_dir);
    let mut fonts = FontSystem::initialize(&source, TextConfig::default())?;
    fonts.add_color_directives([(HIGHLIGHT, Color::YELLOW), (SUBTLE, Color::rgb(128, 128, 128))]);

    let mut canvas = Canvas::new(480, 240);
    canvas.clear(Color::rgb(24, 24, 32))?;

    let title = "nxgfx text";
    let title_width = fonts.measure_width(32, title);
    fonts.render(
        &mut canvas,
        (480 - title_width) / 2,
        12,
        32,
        NO_WRAP,
        Color::WHITE,
        title,
    )?;

    let body = format!(
        "Glyphs are cached per size and drawn with a tint, so {HIGHLIGHT}highlighted{HIGHLIGHT} \
         words cost nothing extra. Long lines wrap at break characters like spaces, \
         slashes/underscores_and-hyphens.\n{SUBTLE}Explicit newlines work too.{SUBTLE}"
    );
    let cursor = fonts.render(&mut canvas, 16, 64, 18, TextWrap::Width(448), Color::WHITE, &body)?;
    tracing::info!("Body used {} line breaks", cursor.line_breaks);
    tracing::info!("{}", fonts.cache().stats_string());

    canvas.save_png(&output)?;
    tracing::info!("Saved {}", output);

    fonts.exit();
    Ok(())
}
