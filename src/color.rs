//! # Color Codec
//!
//! Packed 24-bit RGB colors and their `#RRGGBB` text form.
//!
//! ## Layout
//!
//! ```text
//! bit  23 ........ 16 15 ......... 8 7 .......... 0
//!      [    red     ] [    green    ] [    blue    ]
//! ```
//!
//! ## Example
//!
//! ```
//! use ticker::Color;
//!
//! let color = Color::parse("#FF8000")?;
//! assert_eq!(color.packed(), 0xff8000);
//! assert_eq!(color.to_string(), "#ff8000");
//! # Ok::<(), ticker::TickerError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TickerError;

/// Largest value a packed color can hold.
pub const MAX_PACKED: u32 = 0x00ff_ffff;

/// A 24-bit packed RGB color.
///
/// Serializes as a bare unsigned integer, which is how strips carry pixels
/// on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const WHITE: Color = Color(MAX_PACKED);

    /// Pack three 8-bit channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The packed `0xRRGGBB` value.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Parse a color of the exact form `#RRGGBB`.
    ///
    /// Hex digits are case-insensitive. Shorthand (`#fff`), alpha
    /// (`#rrggbbaa`) and anything without the leading `#` are rejected.
    pub fn parse(text: &str) -> Result<Self, TickerError> {
        let digits = text
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| TickerError::InvalidColorFormat(format!("{:?} is not #RRGGBB", text)))?;

        // All six bytes are ASCII hex digits, so this cannot fail.
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|e| TickerError::InvalidColorFormat(format!("{:?}: {}", text, e)))?;
        Ok(Color(packed))
    }

    /// Lowercase `#rrggbb` form.
    pub fn format(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<u32> for Color {
    type Error = TickerError;

    fn try_from(packed: u32) -> Result<Self, Self::Error> {
        if packed > MAX_PACKED {
            return Err(TickerError::InvalidColorFormat(format!(
                "packed value {:#x} exceeds 24 bits",
                packed
            )));
        }
        Ok(Color(packed))
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> u32 {
        color.0
    }
}
