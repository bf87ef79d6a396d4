//! # Text Rasterizer
//!
//! Renders a string through a [`GlyphSet`] into an 8-row strip.
//!
//! ## Algorithm
//!
//! 1. Pick the font from the point size ([`FontId::for_point_size`])
//! 2. Look up every glyph; the strip width is the sum of glyph widths
//! 3. Start from an all-background strip of that width
//! 4. Write glyph columns left to right from column 0, set bits in the
//!    foreground color, unset bits in the background color
//!
//! Glyph data owns all spacing: no gap is inserted between characters.
//! Pixels no glyph covers (rows below a short glyph) stay background.

use crate::color::Color;
use crate::error::Result;
use crate::font::{FontId, Glyph, GlyphSet};
use crate::strip::{DISPLAY_ROWS, Strip};

/// Render `text` at `point_size` in `fg` on `bg`.
///
/// Fails if a glyph is taller than the display
/// ([`TickerError::OutOfBounds`](crate::TickerError::OutOfBounds)) or the
/// text is wider than [`MAX_COLUMNS`](crate::strip::MAX_COLUMNS)
/// ([`TickerError::InvalidDimension`](crate::TickerError::InvalidDimension)).
pub fn render_text(
    text: &str,
    point_size: i32,
    fg: Color,
    bg: Color,
    glyphs: &dyn GlyphSet,
) -> Result<Strip> {
    let font = FontId::for_point_size(point_size);
    let run: Vec<&Glyph> = text.chars().map(|ch| glyphs.glyph(font, ch)).collect();
    let columns = run.iter().map(|g| g.width()).sum();

    let mut strip = Strip::filled(DISPLAY_ROWS, columns, bg)?;
    let mut cursor = 0;
    for glyph in run {
        for x in 0..glyph.width() {
            for y in 0..glyph.rows() {
                let color = if glyph.is_set(x, y) { fg } else { bg };
                strip.set_pixel(cursor + x, y, color)?;
            }
        }
        cursor += glyph.width();
    }

    Ok(strip)
}
