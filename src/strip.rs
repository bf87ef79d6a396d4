//! # Strip Model
//!
//! A strip is a rectangular bitmap with a fixed number of rows and a variable
//! number of columns, one packed [`Color`] per pixel.
//!
//! ## Layout
//!
//! Pixels are stored column-major, which makes joining strips a plain
//! sequence append:
//!
//! ```text
//! index = column * rows + row
//!
//!          col 0   col 1   col 2
//! row 0  [   0  ] [   8  ] [  16  ]
//! row 1  [   1  ] [   9  ] [  17  ]
//!  ...
//! row 7  [   7  ] [  15  ] [  23  ]
//! ```
//!
//! ## Wire Format
//!
//! ```json
//! {"rows": 8, "columns": 2, "bitmap": [0, 0, 0, 0, 0, 0, 0, 0, 65536, ...]}
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, TickerError};

/// Height of the physical display. Every producer emits strips of this height.
pub const DISPLAY_ROWS: usize = 8;

/// Widest strip any producer or join may build (about 2.7 minutes of
/// scrolling at 100 columns per second, 32 MiB of pixels at 8 rows).
pub const MAX_COLUMNS: usize = 1 << 20;

/// A column-major pixel strip.
///
/// `bitmap.len() == rows * columns` holds for every value of this type,
/// including ones deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStrip")]
pub struct Strip {
    rows: usize,
    columns: usize,
    bitmap: Vec<Color>,
}

/// Unvalidated wire shape of a strip.
#[derive(Deserialize)]
struct RawStrip {
    rows: usize,
    columns: usize,
    bitmap: Vec<Color>,
}

impl TryFrom<RawStrip> for Strip {
    type Error = TickerError;

    fn try_from(raw: RawStrip) -> Result<Self> {
        Strip::from_parts(raw.rows, raw.columns, raw.bitmap)
    }
}

/// Pixel count of a `rows x columns` strip, or `InvalidDimension` when the
/// width exceeds [`MAX_COLUMNS`] or the product overflows.
fn pixel_count(rows: usize, columns: usize) -> Result<usize> {
    if columns > MAX_COLUMNS {
        return Err(TickerError::InvalidDimension(format!(
            "strip width {} exceeds the {} column limit",
            columns, MAX_COLUMNS
        )));
    }
    rows.checked_mul(columns).ok_or_else(|| {
        TickerError::InvalidDimension(format!("{}x{} strip is too large", columns, rows))
    })
}

impl Strip {
    /// A black strip of `rows x columns`.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, Color::BLACK)
    }

    /// A strip of `rows x columns` with every pixel set to `fill`.
    pub fn filled(rows: usize, columns: usize, fill: Color) -> Result<Self> {
        let len = pixel_count(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            bitmap: vec![fill; len],
        })
    }

    /// Build a strip from an existing column-major pixel sequence.
    pub fn from_parts(rows: usize, columns: usize, bitmap: Vec<Color>) -> Result<Self> {
        let expected = pixel_count(rows, columns)?;
        if bitmap.len() != expected {
            return Err(TickerError::InvalidDimension(format!(
                "{}x{} strip needs {} pixels, got {}",
                columns,
                rows,
                expected,
                bitmap.len()
            )));
        }
        Ok(Self {
            rows,
            columns,
            bitmap,
        })
    }

    /// Parse a strip from its JSON wire form.
    ///
    /// Validation failures (`bitmap.len() != rows*columns`, widths above
    /// [`MAX_COLUMNS`]) keep their message; any failure is
    /// [`TickerError::InvalidJson`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TickerError::InvalidJson(e.to_string()))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The full column-major pixel sequence.
    pub fn bitmap(&self) -> &[Color] {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> Vec<Color> {
        self.bitmap
    }

    /// Number of pixels (`rows * columns`).
    pub fn len(&self) -> usize {
        self.bitmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.columns || y >= self.rows {
            return Err(TickerError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(x * self.rows + y)
    }

    /// Read the pixel at column `x`, row `y`.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color> {
        let idx = self.index(x, y)?;
        Ok(self.bitmap[idx])
    }

    /// Overwrite the pixel at column `x`, row `y`.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let idx = self.index(x, y)?;
        self.bitmap[idx] = color;
        Ok(())
    }

    /// The `rows` pixels of column `x`, top to bottom.
    pub fn column(&self, x: usize) -> Result<&[Color]> {
        if x >= self.columns {
            return Err(TickerError::OutOfBounds {
                x,
                y: 0,
                columns: self.columns,
                rows: self.rows,
            });
        }
        let start = x * self.rows;
        Ok(&self.bitmap[start..start + self.rows])
    }

    /// Extend this strip to the right with the columns of `other`.
    ///
    /// On error the strip is left unchanged.
    pub fn append(&mut self, other: &Strip) -> Result<()> {
        if other.rows != self.rows {
            return Err(TickerError::RowCountMismatch {
                expected: self.rows,
                found: other.rows,
                index: 1,
            });
        }
        let columns = self
            .columns
            .checked_add(other.columns)
            .filter(|&columns| columns <= MAX_COLUMNS)
            .ok_or_else(|| {
                TickerError::InvalidDimension(format!(
                    "appending {} columns to {} exceeds the {} column limit",
                    other.columns, self.columns, MAX_COLUMNS
                ))
            })?;
        self.bitmap.extend_from_slice(&other.bitmap);
        self.columns = columns;
        Ok(())
    }
}
