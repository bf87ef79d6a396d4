//! # Strip Composer
//!
//! Concatenates strips left to right. Because strips are column-major,
//! joining is a plain append of each bitmap in order.

use rayon::prelude::*;

use super::RenderRequest;
use crate::error::{Result, TickerError};
use crate::font::GlyphSet;
use crate::strip::{MAX_COLUMNS, Strip};

/// Join `strips` side by side, in order, with no gap or resampling.
///
/// The result has the first strip's row count and the summed column count.
/// An empty list fails with [`TickerError::EmptyInput`]; a strip whose row
/// count differs from the first fails with [`TickerError::RowCountMismatch`].
/// A summed width above [`MAX_COLUMNS`](crate::strip::MAX_COLUMNS) fails with
/// [`TickerError::InvalidDimension`] before any pixel is copied.
pub fn join(strips: &[Strip]) -> Result<Strip> {
    let (first, rest) = strips
        .split_first()
        .ok_or_else(|| TickerError::EmptyInput("join needs at least one strip".to_string()))?;

    let rows = first.rows();
    let mut columns = first.columns();
    for (i, strip) in rest.iter().enumerate() {
        if strip.rows() != rows {
            return Err(TickerError::RowCountMismatch {
                expected: rows,
                found: strip.rows(),
                index: i + 1,
            });
        }
        columns = columns.checked_add(strip.columns()).ok_or_else(|| {
            TickerError::InvalidDimension(format!("joined width overflows at strip {}", i + 1))
        })?;
    }

    if columns > MAX_COLUMNS {
        return Err(TickerError::InvalidDimension(format!(
            "joined width {} exceeds the {} column limit",
            columns, MAX_COLUMNS
        )));
    }

    // Each input already holds rows * its columns pixels, so this cannot overflow
    let mut bitmap = Vec::with_capacity(rows * columns);
    for strip in strips {
        bitmap.extend_from_slice(strip.bitmap());
    }
    Strip::from_parts(rows, columns, bitmap)
}

/// Render every request and join the results in request order.
///
/// Segments render in parallel. Any failing segment fails the whole
/// composition; no partial strip is produced.
pub fn compose(requests: &[RenderRequest], glyphs: &dyn GlyphSet) -> Result<Strip> {
    let strips = requests
        .par_iter()
        .map(|request| request.render(glyphs))
        .collect::<Result<Vec<Strip>>>()?;
    join(&strips)
}
