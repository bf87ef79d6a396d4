//! Spacer generator: a solid background strip of a given width.

use crate::color::Color;
use crate::error::{Result, TickerError};
use crate::strip::{DISPLAY_ROWS, Strip};

/// An 8-row strip `width` columns wide, every pixel `background`.
///
/// A zero width is a valid, empty strip. Negative widths and widths above
/// [`MAX_COLUMNS`](crate::strip::MAX_COLUMNS) fail with
/// [`TickerError::InvalidDimension`].
pub fn spacer(width: i64, background: Color) -> Result<Strip> {
    let columns = usize::try_from(width).map_err(|_| {
        TickerError::InvalidDimension(format!("spacer width must be >= 0, got {}", width))
    })?;
    Strip::filled(DISPLAY_ROWS, columns, background)
}
