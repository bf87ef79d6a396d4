//! Built-in glyph set backed by the Spleen 5x8 bitmap font.
//!
//! - Small: the 5x8 glyph with one blank spacing column on the right (6x8)
//! - Large: the 5x8 glyph emboldened by one column, a blank column on each
//!   side (8x8)
//!
//! Every decoded glyph must be exactly 5 bits wide and 8 rows tall.

use std::collections::HashMap;

use spleen_font::{FONT_5X8, PSF2Font};

use super::{FontId, Glyph, GlyphSet};
use crate::error::{Result, TickerError};
use crate::strip::DISPLAY_ROWS;

const SRC_WIDTH: usize = 5;

pub const SMALL_WIDTH: usize = 6;
pub const LARGE_WIDTH: usize = 8;

/// Source bitmap of one character, indexed `[row][col]`.
type Bitmap = Vec<Vec<bool>>;

/// Glyphs for one font, decoded once.
#[derive(Debug)]
struct Face {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl Face {
    fn get(&self, ch: char) -> &Glyph {
        self.glyphs.get(&ch).unwrap_or(&self.fallback)
    }
}

/// Spleen-backed [`GlyphSet`] covering printable ASCII and Latin-1.
///
/// Characters Spleen has no glyph for render as a box outline.
#[derive(Debug)]
pub struct SpleenGlyphs {
    small: Face,
    large: Face,
}

impl SpleenGlyphs {
    pub fn new() -> Result<Self> {
        let bitmaps = decode_font(FONT_5X8, "5x8")?;
        Ok(Self {
            small: build_face(&bitmaps, SMALL_WIDTH, small_cell),
            large: build_face(&bitmaps, LARGE_WIDTH, large_cell),
        })
    }
}

impl GlyphSet for SpleenGlyphs {
    fn glyph(&self, font: FontId, ch: char) -> &Glyph {
        match font {
            FontId::Small => self.small.get(ch),
            FontId::Large => self.large.get(ch),
        }
    }
}

fn source_bit(bitmap: &Bitmap, x: usize, y: usize) -> bool {
    x < SRC_WIDTH && bitmap[y][x]
}

/// Column 5 is the inter-character gap.
fn small_cell(bitmap: &Bitmap, x: usize, y: usize) -> bool {
    source_bit(bitmap, x, y)
}

/// Target column `x` is set when source column `x - 1` or `x - 2` is, which
/// shifts the glyph right by one and smears each stroke one column wider.
fn large_cell(bitmap: &Bitmap, x: usize, y: usize) -> bool {
    (x >= 1 && source_bit(bitmap, x - 1, y)) || (x >= 2 && source_bit(bitmap, x - 2, y))
}

/// Decode every cached character (printable ASCII and Latin-1) of one font.
fn decode_font(data: &'static [u8], name: &str) -> Result<HashMap<char, Bitmap>> {
    let mut font = PSF2Font::new(data)
        .map_err(|e| TickerError::Font(format!("Failed to parse Spleen {} font: {}", name, e)))?;

    let mut bitmaps = HashMap::new();
    for ch in (' '..='~').chain('\u{a0}'..='\u{ff}') {
        let utf8 = ch.to_string();
        let Some(spleen_glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
            continue;
        };
        let bitmap = read_bitmap(spleen_glyph, ch).map_err(|e| match e {
            TickerError::Font(msg) => TickerError::Font(format!("Spleen {}: {}", name, msg)),
            other => other,
        })?;
        bitmaps.insert(ch, bitmap);
    }
    Ok(bitmaps)
}

/// Collect one glyph's rows, rejecting anything that is not `5 x 8`.
fn read_bitmap<R>(rows: impl IntoIterator<Item = R>, ch: char) -> Result<Bitmap>
where
    R: IntoIterator<Item = bool>,
{
    let bitmap: Bitmap = rows
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();

    if bitmap.len() != DISPLAY_ROWS {
        return Err(TickerError::Font(format!(
            "glyph {:?} has {} rows, expected {}",
            ch,
            bitmap.len(),
            DISPLAY_ROWS
        )));
    }
    if let Some(row) = bitmap.iter().find(|row| row.len() != SRC_WIDTH) {
        return Err(TickerError::Font(format!(
            "glyph {:?} has a {}-bit row, expected {}",
            ch,
            row.len(),
            SRC_WIDTH
        )));
    }
    Ok(bitmap)
}

fn build_face(
    bitmaps: &HashMap<char, Bitmap>,
    width: usize,
    cell: fn(&Bitmap, usize, usize) -> bool,
) -> Face {
    let glyphs = bitmaps
        .iter()
        .map(|(&ch, bitmap)| {
            let glyph = Glyph::from_fn(width, DISPLAY_ROWS, |x, y| cell(bitmap, x, y));
            (ch, glyph)
        })
        .collect();

    Face {
        glyphs,
        fallback: Glyph::outline(width, DISPLAY_ROWS),
    }
}
