//! Shared fixtures for integration tests.

#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use ticker::DISPLAY_ROWS;
use ticker::font::{FontId, Glyph, MapGlyphs};

/// Synthetic glyphs: a 6-wide small '+', an 8-wide large '+', outline fallback.
pub fn plus_glyphs() -> MapGlyphs {
    let small = Glyph::from_rows(&[
        "......", "..#...", "..#...", "#####.", "..#...", "..#...", "......", "......",
    ]);
    let large = Glyph::from_rows(&[
        "........", "...#....", "...#....", "#######.", "...#....", "...#....", "...#....",
        "........",
    ]);
    MapGlyphs::new(Glyph::outline(4, DISPLAY_ROWS))
        .with(FontId::Small, '+', small)
        .with(FontId::Large, '+', large)
}

/// Encode `img` in `format` in memory.
pub fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, format).unwrap();
    bytes.into_inner()
}

/// A PNG of `width x height` with a black top-left pixel and a known pixel
/// at column 1, row 3 (`#279ed0`), everything else gray.
pub fn logo_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| match (x, y) {
        (0, 0) => Rgb([0, 0, 0]),
        (1, 3) => Rgb([0x27, 0x9e, 0xd0]),
        _ => Rgb([128, 128, 128]),
    });
    encode(DynamicImage::ImageRgb8(img), ImageFormat::Png)
}
