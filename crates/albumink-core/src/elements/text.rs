//! Text element payload.

use super::{ElementPatch, SerializableColor};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Text block content and typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub content: String,
    pub color: SerializableColor,
    pub font_size: f64,
    /// CSS-style weight, 100 to 900.
    pub font_weight: u16,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub font_family: String,
    pub text_align: TextAlign,
    pub italic: bool,
    pub uppercase: bool,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            content: "Double-click to edit".to_string(),
            color: SerializableColor::black(),
            font_size: 16.0,
            font_weight: 400,
            line_height: 1.4,
            letter_spacing: 0.0,
            font_family: "Inter".to_string(),
            text_align: TextAlign::Left,
            italic: false,
            uppercase: false,
        }
    }
}

impl TextContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Preset text element dropped from the template catalog.
///
/// The catalog itself lives in the host; the engine only consumes the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTemplate {
    pub id: String,
    pub name: String,
    /// Overrides applied to a default text element. Width and height also
    /// decide how the drop point is centered.
    pub element_data: ElementPatch,
}
