//! # Glyph Sets
//!
//! The text rasterizer does not own any glyph artwork. It asks a [`GlyphSet`]
//! for the bit matrix of each character, which keeps rendering testable with
//! synthetic glyphs.
//!
//! ## Fonts
//!
//! | Font | Selected when | Built-in size |
//! |------|---------------|---------------|
//! | [`FontId::Small`] | point size < 8 | 6x8 |
//! | [`FontId::Large`] | point size >= 8 | 8x8 |
//!
//! ## Example
//!
//! ```
//! use ticker::font::{FontId, Glyph, GlyphSet};
//!
//! struct Dots(Glyph);
//!
//! impl GlyphSet for Dots {
//!     fn glyph(&self, _font: FontId, _ch: char) -> &Glyph {
//!         &self.0
//!     }
//! }
//!
//! let dot = Glyph::from_rows(&["#", ".", ".", ".", ".", ".", ".", "."]);
//! let set = Dots(dot);
//! assert_eq!(set.glyph(FontId::for_point_size(6), 'x').width(), 1);
//! ```

mod map;
mod spleen;

pub use map::MapGlyphs;
pub use spleen::SpleenGlyphs;

use serde::{Deserialize, Serialize};

/// Point sizes at or above this select the large font.
pub const LARGE_FONT_THRESHOLD: i32 = 8;

/// Font identifier understood by every glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontId {
    /// Narrow glyphs (6 columns in the built-in set)
    Small,
    /// Wide glyphs (8 columns in the built-in set)
    Large,
}

impl FontId {
    /// The only font-selection rule: below 8 is small, everything else large.
    pub fn for_point_size(point_size: i32) -> Self {
        if point_size < LARGE_FONT_THRESHOLD {
            FontId::Small
        } else {
            FontId::Large
        }
    }
}

/// A character's bit matrix.
///
/// Bits are stored column-major like [`Strip`](crate::Strip) pixels, so a
/// glyph column maps straight onto a strip column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    rows: usize,
    bits: Vec<bool>,
}

impl Glyph {
    /// Build a glyph by evaluating `is_set(x, y)` for every cell.
    pub fn from_fn(width: usize, rows: usize, is_set: impl Fn(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width * rows);
        for x in 0..width {
            for y in 0..rows {
                bits.push(is_set(x, y));
            }
        }
        Self { width, rows, bits }
    }

    /// Build a glyph from text art, one string per row; `#` marks a set bit.
    ///
    /// The width is that of the longest row; short rows are padded unset.
    pub fn from_rows(rows: &[&str]) -> Self {
        let grid: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        Self::from_fn(width, grid.len(), |x, y| grid[y].get(x).copied().unwrap_or(false))
    }

    /// An empty glyph of the given size.
    pub fn blank(width: usize, rows: usize) -> Self {
        Self::from_fn(width, rows, |_, _| false)
    }

    /// A one-pixel outline of the given size.
    pub fn outline(width: usize, rows: usize) -> Self {
        Self::from_fn(width, rows, |x, y| {
            x == 0 || y == 0 || x + 1 == width || y + 1 == rows
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the bit at column `x`, row `y` is set. Out of range reads unset.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.rows && self.bits[x * self.rows + y]
    }
}

/// Lookup from (font, character) to a bit matrix.
///
/// Implementations are read-only after construction and shared between
/// threads. Every character yields a glyph; what an unknown character maps
/// to is up to the implementation.
pub trait GlyphSet: Send + Sync {
    fn glyph(&self, font: FontId, ch: char) -> &Glyph;
}
