//! # Render Tests
//!
//! End-to-end checks of the producers and the composer through the public API.

mod common;

use common::{encode, logo_png, plus_glyphs};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use ticker::render::{self, RenderRequest};
use ticker::{Color, DISPLAY_ROWS, Strip, TickerError};

fn color(s: &str) -> Color {
    Color::parse(s).unwrap()
}

#[test]
fn test_render_text_small_plus() {
    let strip = render::render_text("+", 6, color("#000100"), color("#010000"), &plus_glyphs())
        .unwrap();

    assert_eq!(strip.rows(), 8);
    assert_eq!(strip.columns(), 6);
    assert_eq!(strip.len(), 8 * 6);
    assert_eq!(strip.bitmap()[0].packed(), 1 << 16);
    assert_eq!(strip.bitmap()[11].packed(), 1 << 8);
}

#[test]
fn test_render_text_builtin_plus() {
    let glyphs = ticker::font::SpleenGlyphs::new().unwrap();
    let strip = render::render_text("+", 6, color("#000100"), color("#010000"), &glyphs).unwrap();

    assert_eq!(strip.columns(), 6);
    assert_eq!(strip.bitmap()[0].packed(), 1 << 16);
    // Spleen draws the bar on row 4, one below the 6x8 fixture
    assert_eq!(strip.bitmap()[11].packed(), 1 << 16);
    assert_eq!(strip.bitmap()[12].packed(), 1 << 8);

    let large = render::render_text("+", 8, color("#000100"), color("#010000"), &glyphs).unwrap();
    assert_eq!(large.columns(), 8);
    // Column 1, row 4: left end of the emboldened bar
    assert_eq!(large.bitmap()[12].packed(), 1 << 8);
    assert_eq!(large.get_pixel(0, 4).unwrap().packed(), 1 << 16);
}

#[test]
fn test_render_space() {
    let strip = render::spacer(13, color("#010000")).unwrap();

    assert_eq!(strip.rows(), 8);
    assert_eq!(strip.columns(), 13);
    assert_eq!(strip.len(), 8 * 13);
    assert_eq!(strip.bitmap()[0].packed(), 1 << 16);
    assert_eq!(strip.bitmap()[11].packed(), 1 << 16);
}

#[test]
fn test_render_image() {
    let strip = render::import_image(&logo_png(8, 8)).unwrap();

    assert_eq!(strip.rows(), 8);
    assert_eq!(strip.columns(), 8);
    assert_eq!(strip.len(), 8 * 8);
    assert_eq!(strip.bitmap()[0].packed(), 0);
    assert_eq!(strip.bitmap()[11].packed(), 2596560);
}

#[test]
fn test_render_image_any_width() {
    for width in [1, 3, 57] {
        let strip = render::import_image(&logo_png(width, 8)).unwrap();
        assert_eq!(strip.columns(), width as usize);
    }
}

#[test]
fn test_render_image_jpeg() {
    let img = RgbImage::from_fn(16, 8, |_, _| Rgb([0, 0, 0]));
    let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);
    let strip = render::import_image(&bytes).unwrap();
    assert_eq!(strip.rows(), 8);
    assert_eq!(strip.columns(), 16);
}

#[test]
fn test_render_image_errors() {
    assert!(matches!(
        render::import_image(b"Apache License\nVersion 2.0, January 2004"),
        Err(TickerError::DecodeError(_))
    ));
    assert!(matches!(
        render::import_image(&logo_png(8, 9)),
        Err(TickerError::InvalidDimension(_))
    ));
}

#[test]
fn test_join_text_strips() {
    let glyphs = plus_glyphs();
    let first = render::render_text("+", 8, color("#000001"), color("#010000"), &glyphs).unwrap();
    assert_eq!(first.columns(), 8);
    assert_eq!(first.bitmap()[0].packed(), 1 << 16);
    assert_eq!(first.bitmap()[11].packed(), 1);

    let second = render::render_text("+", 6, color("#000010"), color("#100000"), &glyphs).unwrap();
    assert_eq!(second.columns(), 6);
    assert_eq!(second.bitmap()[0].packed(), 1 << 20);
    assert_eq!(second.bitmap()[11].packed(), 1 << 4);

    let joined = render::join(&[first, second]).unwrap();
    assert_eq!(joined.rows(), 8);
    assert_eq!(joined.columns(), 8 + 6);
    assert_eq!(joined.len(), 8 * (8 + 6));
    assert_eq!(joined.bitmap()[0].packed(), 1 << 16);
    assert_eq!(joined.bitmap()[11].packed(), 1);
    assert_eq!(joined.bitmap()[8 * 8].packed(), 1 << 20);
    assert_eq!(joined.bitmap()[8 * 8 + 11].packed(), 1 << 4);
}

#[test]
fn test_join_pixel_lookup_by_offset() {
    let widths = [3usize, 0, 5, 1, 4];
    let strips: Vec<Strip> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let mut strip = Strip::new(DISPLAY_ROWS, w).unwrap();
            for x in 0..w {
                for y in 0..DISPLAY_ROWS {
                    let packed = ((i as u32) << 16) | ((x as u32) << 8) | y as u32;
                    strip.set_pixel(x, y, Color::try_from(packed).unwrap()).unwrap();
                }
            }
            strip
        })
        .collect();

    let joined = render::join(&strips).unwrap();
    assert_eq!(joined.columns(), widths.iter().sum::<usize>());

    let mut k = 0;
    for (strip, &w) in strips.iter().zip(&widths) {
        for local in 0..w {
            for y in 0..DISPLAY_ROWS {
                assert_eq!(
                    joined.get_pixel(k, y).unwrap(),
                    strip.get_pixel(local, y).unwrap()
                );
            }
            k += 1;
        }
    }
}

#[test]
fn test_join_empty() {
    assert!(matches!(render::join(&[]), Err(TickerError::EmptyInput(_))));
}

#[test]
fn test_compose_mixed_requests() {
    let requests = vec![
        RenderRequest::Space {
            width: 2,
            background: color("#0000ff"),
        },
        RenderRequest::Text {
            text: "+".to_string(),
            point_size: 6,
            foreground: color("#00ff00"),
            background: color("#000000"),
        },
        RenderRequest::Image {
            bytes: logo_png(3, 8),
        },
        RenderRequest::Join {
            strips: vec![Strip::filled(8, 1, Color::WHITE).unwrap()],
        },
    ];

    let strip = render::compose(&requests, &plus_glyphs()).unwrap();
    assert_eq!(strip.columns(), 2 + 6 + 3 + 1);
    assert_eq!(strip.get_pixel(1, 0).unwrap(), color("#0000ff"));
    assert_eq!(strip.get_pixel(2 + 1, 3).unwrap(), color("#00ff00"));
    assert_eq!(strip.get_pixel(8 + 1, 3).unwrap(), color("#279ed0"));
    assert_eq!(strip.get_pixel(11, 7).unwrap(), Color::WHITE);
}

#[test]
fn test_strip_json_wire_format() {
    let strip = render::spacer(1, color("#010000")).unwrap();
    let value: serde_json::Value = serde_json::to_value(&strip).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"rows": 8, "columns": 1, "bitmap": [65536, 65536, 65536, 65536, 65536, 65536, 65536, 65536]})
    );
}
