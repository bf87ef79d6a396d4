//! # Rendering Module
//!
//! Producers that turn a request into an 8-row [`Strip`], and the composer
//! that joins strips end to end.
//!
//! ## Modules
//!
//! - [`spacer`]: solid background strips
//! - [`text`]: text through a glyph set
//! - [`image`]: 8-row raster images, 16 to 8 bit per channel
//! - [`composer`]: join strips, or render and join a list of requests
//!
//! ## Usage Example
//!
//! ```
//! use ticker::Color;
//! use ticker::font::{Glyph, MapGlyphs};
//! use ticker::render::{self, RenderRequest};
//!
//! let glyphs = MapGlyphs::new(Glyph::outline(5, 8));
//! let requests = vec![
//!     RenderRequest::Space { width: 8, background: Color::BLACK },
//!     RenderRequest::Text {
//!         text: "Hi".to_string(),
//!         point_size: 6,
//!         foreground: Color::parse("#ff0000")?,
//!         background: Color::BLACK,
//!     },
//! ];
//!
//! let strip = render::compose(&requests, &glyphs)?;
//! assert_eq!(strip.columns(), 8 + 2 * 5);
//! # Ok::<(), ticker::TickerError>(())
//! ```

pub mod composer;
pub mod image;
pub mod spacer;
pub mod text;

pub use composer::{compose, join};
pub use image::import_image;
pub use spacer::spacer;
pub use text::render_text;

use crate::color::Color;
use crate::error::Result;
use crate::font::GlyphSet;
use crate::strip::Strip;

/// One rendering request, created per call and consumed by [`render`](Self::render).
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequest {
    /// Solid strip `width` columns wide
    Space { width: i64, background: Color },
    /// Text in the font selected by `point_size`
    Text {
        text: String,
        point_size: i32,
        foreground: Color,
        background: Color,
    },
    /// Encoded image bytes (must decode to 8 rows)
    Image { bytes: Vec<u8> },
    /// Previously produced strips, joined in order
    Join { strips: Vec<Strip> },
}

impl RenderRequest {
    /// Dispatch to the matching producer.
    pub fn render(&self, glyphs: &dyn GlyphSet) -> Result<Strip> {
        match self {
            RenderRequest::Space { width, background } => spacer(*width, *background),
            RenderRequest::Text {
                text,
                point_size,
                foreground,
                background,
            } => render_text(text, *point_size, *foreground, *background, glyphs),
            RenderRequest::Image { bytes } => import_image(bytes),
            RenderRequest::Join { strips } => join(strips),
        }
    }
}
