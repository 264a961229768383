//! Vector shape payload.

use super::SerializableColor;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Geometric primitive drawn inside the element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Ellipse,
    Triangle,
}

impl ShapeKind {
    /// Size used when a shape is added without an explicit size.
    pub fn default_size(self) -> Size {
        match self {
            ShapeKind::Rectangle => Size::new(200.0, 100.0),
            ShapeKind::Circle => Size::new(120.0, 120.0),
            ShapeKind::Ellipse => Size::new(140.0, 90.0),
            ShapeKind::Triangle => Size::new(100.0, 87.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeContent {
    #[serde(default)]
    pub shape_kind: ShapeKind,
    #[serde(default = "default_fill")]
    pub fill: SerializableColor,
}

fn default_fill() -> SerializableColor {
    ShapeContent::DEFAULT_FILL
}

impl Default for ShapeContent {
    fn default() -> Self {
        Self::new(ShapeKind::default())
    }
}

impl ShapeContent {
    /// Near-black fill (#121212).
    pub const DEFAULT_FILL: SerializableColor = SerializableColor::new(18, 18, 18, 255);

    pub fn new(shape_kind: ShapeKind) -> Self {
        Self {
            shape_kind,
            fill: Self::DEFAULT_FILL,
        }
    }
}
