//! # Image Importer
//!
//! Decodes an encoded raster image that is exactly 8 pixels tall into a strip.
//!
//! Every channel is read at 16-bit precision, premultiplied by alpha
//! (`c * a / 0xffff`) and reduced to 8 bits by keeping the high byte
//! (`value >> 8`, no rounding). Alpha itself is dropped, so a fully
//! transparent pixel maps to packed color 0.
//!
//! Formats are whatever the `image` crate decodes (PNG, JPEG, GIF, BMP, ...).

use image::DynamicImage;

use crate::color::Color;
use crate::error::{Result, TickerError};
use crate::strip::{DISPLAY_ROWS, Strip};

/// Decode `bytes` and convert the image to a `width x 8` strip.
pub fn import_image(bytes: &[u8]) -> Result<Strip> {
    let img = decode(bytes)?;

    if img.height() as usize != DISPLAY_ROWS {
        return Err(TickerError::InvalidDimension(format!(
            "image must be {} pixels high, got {}x{}",
            DISPLAY_ROWS,
            img.width(),
            img.height()
        )));
    }

    let rgba = img.to_rgba16();
    let mut strip = Strip::new(DISPLAY_ROWS, rgba.width() as usize)?;
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let color = Color::rgb(downsample(r, a), downsample(g, a), downsample(b, a));
        strip.set_pixel(x as usize, y as usize, color)?;
    }

    Ok(strip)
}

/// Premultiply a 16-bit channel by alpha and keep the high byte.
fn downsample(channel: u16, alpha: u16) -> u8 {
    let premultiplied = u32::from(channel) * u32::from(alpha) / 0xffff;
    (premultiplied >> 8) as u8
}

fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| TickerError::DecodeError(format!("Failed to decode image: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_import_png_dimensions() {
        let img = RgbaImage::from_fn(8, 8, |x, _| Rgba([x as u8 * 30, 0, 0, 255]));
        let strip = import_image(&encode(DynamicImage::ImageRgba8(img), ImageFormat::Png)).unwrap();

        assert_eq!(strip.rows(), 8);
        assert_eq!(strip.columns(), 8);
        assert_eq!(strip.len(), 64);
        assert_eq!(strip.get_pixel(3, 5).unwrap(), Color::rgb(90, 0, 0));
    }

    #[test]
    fn test_import_column_major_placement() {
        let img = ImageBuffer::from_fn(3, 8, |x, y| Rgb([x as u8, y as u8, 7]));
        let strip = import_image(&encode(DynamicImage::ImageRgb8(img), ImageFormat::Png)).unwrap();

        assert_eq!(strip.columns(), 3);
        // index = column * 8 + row
        assert_eq!(strip.bitmap()[2 * 8 + 5], Color::rgb(2, 5, 7));
    }

    #[test]
    fn test_16_bit_channels_keep_high_byte() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_fn(2, 8, |_, _| Rgb([0x12ff, 0x0080, 0xffff]));
        let strip = import_image(&encode(DynamicImage::ImageRgb16(img), ImageFormat::Png)).unwrap();

        // 0x12ff >> 8 = 0x12, not rounded up to 0x13
        assert_eq!(strip.get_pixel(0, 0).unwrap(), Color::rgb(0x12, 0x00, 0xff));
    }

    #[test]
    fn test_alpha_premultiplies_channels() {
        let img = RgbaImage::from_fn(1, 8, |_, y| match y {
            0 => Rgba([0, 0, 0, 0]),
            1 => Rgba([200, 100, 50, 0]),
            2 => Rgba([200, 100, 50, 128]),
            3 => Rgba([200, 100, 50, 64]),
            _ => Rgba([200, 100, 50, 255]),
        });
        let strip = import_image(&encode(DynamicImage::ImageRgba8(img), ImageFormat::Png)).unwrap();

        // Fully transparent is black whatever the stored RGB
        assert_eq!(strip.get_pixel(0, 0).unwrap().packed(), 0);
        assert_eq!(strip.get_pixel(0, 1).unwrap().packed(), 0);
        // 200*257 * 128*257 / 0xffff = 25800, >> 8 = 100
        assert_eq!(strip.get_pixel(0, 2).unwrap(), Color::rgb(100, 50, 25));
        assert_eq!(strip.get_pixel(0, 3).unwrap(), Color::rgb(50, 25, 12));
        assert_eq!(strip.get_pixel(0, 4).unwrap(), Color::rgb(200, 100, 50));
    }

    #[test]
    fn test_downsample_bounds() {
        assert_eq!(downsample(0xffff, 0xffff), 0xff);
        assert_eq!(downsample(0x12ff, 0xffff), 0x12);
        assert_eq!(downsample(0xffff, 0), 0);
    }

    #[test]
    fn test_import_bmp() {
        let img = ImageBuffer::from_fn(5, 8, |_, _| Rgb([1u8, 2, 3]));
        let strip = import_image(&encode(DynamicImage::ImageRgb8(img), ImageFormat::Bmp)).unwrap();
        assert_eq!(strip.columns(), 5);
        assert!(strip.bitmap().iter().all(|&c| c == Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_wrong_height() {
        for (w, h) in [(8, 7), (8, 9), (1, 16), (100, 1)] {
            let img = ImageBuffer::from_fn(w, h, |_, _| Rgb([0u8, 0, 0]));
            let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);
            assert!(
                matches!(import_image(&bytes), Err(TickerError::InvalidDimension(_))),
                "{}x{} should be rejected",
                w,
                h
            );
        }
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(
            import_image(b"GARBAGE, not an image at all"),
            Err(TickerError::DecodeError(_))
        ));
        assert!(matches!(import_image(&[]), Err(TickerError::DecodeError(_))));
    }
}
