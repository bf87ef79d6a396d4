//! # Strip Preview
//!
//! Renders a strip as an upscaled RGB image so a rendering can be inspected
//! without the LED hardware. Each pixel becomes a `scale x scale` square.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

use crate::error::{Result, TickerError};
use crate::strip::Strip;

/// Convert a strip to a row-major RGB image, `scale` pixels per LED.
pub fn to_image(strip: &Strip, scale: u32) -> Result<RgbImage> {
    if strip.is_empty() {
        return Err(TickerError::InvalidDimension(
            "cannot preview a strip without pixels".to_string(),
        ));
    }
    if scale == 0 {
        return Err(TickerError::InvalidDimension("scale must be >= 1".to_string()));
    }

    let width = scaled(strip.columns(), scale)?;
    let height = scaled(strip.rows(), scale)?;
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = strip.get_pixel((x / scale) as usize, (y / scale) as usize)?;
        *pixel = Rgb([color.red(), color.green(), color.blue()]);
    }
    Ok(img)
}

/// `extent * scale` as an image dimension.
fn scaled(extent: usize, scale: u32) -> Result<u32> {
    u32::try_from(extent)
        .ok()
        .and_then(|extent| extent.checked_mul(scale))
        .ok_or_else(|| {
            TickerError::InvalidDimension(format!(
                "preview of {} pixels at scale {} is too large",
                extent, scale
            ))
        })
}

/// Encode the preview as PNG bytes.
pub fn to_png(strip: &Strip, scale: u32) -> Result<Vec<u8>> {
    let img = to_image(strip, scale)?;
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| TickerError::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(bytes.into_inner())
}

/// Write the preview to a PNG file.
pub fn save_png(strip: &Strip, path: &Path, scale: u32) -> Result<()> {
    std::fs::write(path, to_png(strip, scale)?)?;
    Ok(())
}
