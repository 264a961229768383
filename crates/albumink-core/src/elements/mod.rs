//! Element definitions for album spreads.

mod image;
mod patch;
mod shape;
mod text;

pub use image::ImageContent;
pub use patch::{ElementPatch, GroupChange};
pub use shape::{ShapeContent, ShapeKind};
pub use text::{TextAlign, TextContent, TextTemplate};

use crate::pages::PageId;
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Identifier shared by the members of a group.
pub type GroupId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => Some(Self::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
                255,
            )),
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                255,
            )),
            8 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Visual style shared by every element kind. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyle {
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
    pub background_color: Option<SerializableColor>,
    pub border_radius: f64,
    pub border_width: f64,
    pub border_color: SerializableColor,
    pub shadow_blur: f64,
    pub shadow_color: SerializableColor,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            background_color: None,
            border_radius: 0.0,
            border_width: 0.0,
            border_color: SerializableColor::black(),
            shadow_blur: 0.0,
            // rgba(0, 0, 0, 0.2)
            shadow_color: SerializableColor::new(0, 0, 0, 51),
            shadow_offset_x: 0.0,
            shadow_offset_y: 4.0,
        }
    }
}

/// Element type tag, used by the creation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Image,
    Text,
    Shape,
}

/// Variant payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Image(ImageContent),
    Text(TextContent),
    Shape(ShapeContent),
}

impl ElementKind {
    /// Default payload for a type.
    pub fn default_for(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Image => ElementKind::Image(ImageContent::default()),
            ElementType::Text => ElementKind::Text(TextContent::default()),
            ElementType::Shape => ElementKind::Shape(ShapeContent::default()),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Image(_) => ElementType::Image,
            ElementKind::Text(_) => ElementType::Text,
            ElementKind::Shape(_) => ElementType::Shape,
        }
    }

    /// Size a freshly created element of this kind gets.
    pub fn default_size(&self) -> Size {
        match self {
            ElementKind::Shape(shape) => shape.shape_kind.default_size(),
            _ => Size::new(200.0, 100.0),
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            ElementKind::Image(_) => "Image",
            ElementKind::Text(_) => "Text",
            ElementKind::Shape(_) => "Shape",
        }
    }
}

/// The atomic placeable unit of a spread.
///
/// Z-order is the element's position in the document sequence; there is no
/// separate z-index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub(crate) id: ElementId,
    /// Spread this element belongs to.
    pub page_id: PageId,
    /// Flat, single-level group membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    pub name: String,
    /// Document-space top-left.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, in [0, 360).
    #[serde(default)]
    pub rotation: f64,
    /// Blocks pointer-driven mutation.
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub style: ElementStyle,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Create an element with a fresh id and the kind's default size.
    pub fn new(kind: ElementKind, page_id: impl Into<PageId>) -> Self {
        let size = kind.default_size();
        Self {
            id: Uuid::new_v4(),
            page_id: page_id.into(),
            group_id: None,
            name: kind.default_name().to_string(),
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
            rotation: 0.0,
            locked: false,
            style: ElementStyle::default(),
            kind,
        }
    }

    /// Builder: set the position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Builder: set the size.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self
    }

    /// Builder: set the group.
    pub fn in_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Copy of this element under a new id.
    pub(crate) fn clone_with_new_id(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text(_))
    }

    /// Axis-aligned box before rotation.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Internal crop offset for images.
    pub fn image_offset(&self) -> Option<Vec2> {
        match &self.kind {
            ElementKind::Image(image) => Some(Vec2::new(image.image_x, image.image_y)),
            _ => None,
        }
    }

    /// Check whether a document point lies inside the (rotated) element box.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let bounds = self.bounds();
        let center = bounds.center();
        // Rotate the point into the element's unrotated frame.
        let (sin, cos) = (-self.rotation.to_radians()).sin_cos();
        let d = point - center;
        let local = Point::new(center.x + d.x * cos - d.y * sin, center.y + d.x * sin + d.y * cos);
        bounds.inflate(tolerance, tolerance).contains(local)
    }
}

/// Wrap a rotation into [0, 360).
pub fn normalize_rotation(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
