//! # Ticker - Pixel Strips for Scrolling LED Displays
//!
//! Ticker turns content requests into a uniform 8-row pixel bitmap (a
//! [`Strip`]) that a scrolling LED display can play back. It provides:
//!
//! - **Color codec**: `#RRGGBB` <-> packed 24-bit RGB
//! - **Producers**: solid spacers, bitmap-font text, 8-row images
//! - **Composer**: join strips end to end into one longer strip
//! - **HTTP service**: the producers and composer behind an axum router
//!
//! ## Quick Start
//!
//! ```no_run
//! use ticker::{Color, render, font::SpleenGlyphs};
//!
//! let glyphs = SpleenGlyphs::new()?;
//! let red = Color::parse("#ff0000")?;
//!
//! let lead_in = render::spacer(16, Color::BLACK)?;
//! let hello = render::render_text("Hello", 8, red, Color::BLACK, &glyphs)?;
//! let logo = render::import_image(&std::fs::read("logo.png")?)?;
//!
//! let strip = render::join(&[lead_in, hello, logo])?;
//! println!("{}", serde_json::to_string(&strip).unwrap());
//!
//! # Ok::<(), ticker::TickerError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | Packed RGB colors |
//! | [`strip`] | Column-major pixel strips |
//! | [`font`] | Glyph sets (injected, plus built-in Spleen fonts) |
//! | [`render`] | Spacer, text, image and join |
//! | [`json_api`] | Request bodies of the HTTP API |
//! | [`server`] | axum HTTP server |
//! | [`preview`] | PNG previews of strips |
//! | [`error`] | Error types |

pub mod color;
pub mod error;
pub mod font;
pub mod json_api;
pub mod preview;
pub mod render;
pub mod server;
pub mod strip;

// Re-exports for convenience
pub use color::Color;
pub use error::TickerError;
pub use strip::{DISPLAY_ROWS, Strip};
