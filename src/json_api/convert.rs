//! Conversion from JSON schema types to render requests.

use super::schema::*;
use crate::color::Color;
use crate::error::{Result, TickerError};
use crate::render::RenderRequest;

/// Parse a color field, naming the field in the error.
fn color_field(field: &str, value: &str) -> Result<Color> {
    Color::parse(value).map_err(|e| match e {
        TickerError::InvalidColorFormat(msg) => {
            TickerError::InvalidColorFormat(format!("{}: {}", field, msg))
        }
        other => other,
    })
}

impl JsonSpace {
    pub fn to_request(&self) -> Result<RenderRequest> {
        Ok(RenderRequest::Space {
            width: self.len,
            background: color_field("bgColor", &self.bg_color)?,
        })
    }
}

impl JsonText {
    pub fn to_request(&self) -> Result<RenderRequest> {
        Ok(RenderRequest::Text {
            text: self.text.clone(),
            point_size: self.font_size,
            foreground: color_field("fgColor", &self.fg_color)?,
            background: color_field("bgColor", &self.bg_color)?,
        })
    }
}

impl JsonSegment {
    pub fn to_request(&self) -> Result<RenderRequest> {
        match self {
            JsonSegment::Space(space) => space.to_request(),
            JsonSegment::Text(text) => text.to_request(),
            JsonSegment::Strip(strip) => Ok(RenderRequest::Join {
                strips: vec![strip.clone()],
            }),
        }
    }
}
