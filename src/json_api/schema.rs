//! JSON schema types for the render API.

use serde::{Deserialize, Serialize};

use crate::strip::Strip;

/// Body of `/renderSpace`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSpace {
    /// Width in columns
    #[serde(default)]
    pub len: i64,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
}

/// Body of `/renderText`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonText {
    #[serde(default)]
    pub text: String,
    /// Below 8 selects the small font.
    #[serde(default, rename = "fontSize")]
    pub font_size: i32,
    #[serde(rename = "fgColor")]
    pub fg_color: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
}

/// One element of a `/compose` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonSegment {
    Space(JsonSpace),
    Text(JsonText),
    /// An already rendered strip, passed through unchanged
    Strip(Strip),
}
