//! Partial element updates.

use super::{Element, ElementKind, ElementStyle, GroupId, SerializableColor, ShapeKind, normalize_rotation};
use crate::pages::PageId;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Change to an element's group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupChange {
    Join(GroupId),
    Leave,
}

/// A partial update to an element. `None` fields are left untouched.
///
/// The same patch type is used by pointer gestures and by property panels.
/// Variant-specific fields are ignored when the element is of another kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub name: Option<String>,
    pub page_id: Option<PageId>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub locked: Option<bool>,
    pub group: Option<GroupChange>,
    pub opacity: Option<f64>,
    pub style: Option<ElementStyle>,
    /// Replaces the whole payload; ignored if the element type differs.
    pub kind: Option<ElementKind>,
    // Image
    pub src: Option<String>,
    pub image_x: Option<f64>,
    pub image_y: Option<f64>,
    pub image_scale: Option<f64>,
    // Text
    pub content: Option<String>,
    // Shape
    pub shape_kind: Option<ShapeKind>,
    pub fill: Option<SerializableColor>,
}

impl ElementPatch {
    /// Patch that moves an element.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that sets position and size.
    pub fn frame(rect: Rect) -> Self {
        Self {
            x: Some(rect.x0),
            y: Some(rect.y0),
            width: Some(rect.width()),
            height: Some(rect.height()),
            ..Self::default()
        }
    }

    /// Patch that moves an image inside its crop frame.
    pub fn image_offset(image_x: f64, image_y: f64) -> Self {
        Self {
            image_x: Some(image_x),
            image_y: Some(image_y),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch, clamping out-of-range numbers.
    pub fn apply(&self, element: &mut Element) {
        if let Some(kind) = &self.kind {
            if kind.element_type() == element.element_type() {
                element.kind = kind.clone();
            } else {
                log::debug!(
                    "ignoring {:?} payload for {:?} element {}",
                    kind.element_type(),
                    element.element_type(),
                    element.id
                );
            }
        }

        if let Some(name) = &self.name {
            element.name = name.clone();
        }
        if let Some(page_id) = &self.page_id {
            element.page_id = page_id.clone();
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width.max(0.0);
        }
        if let Some(height) = self.height {
            element.height = height.max(0.0);
        }
        if let Some(rotation) = self.rotation {
            element.rotation = normalize_rotation(rotation);
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
        match self.group {
            Some(GroupChange::Join(group_id)) => element.group_id = Some(group_id),
            Some(GroupChange::Leave) => element.group_id = None,
            None => {}
        }
        if let Some(style) = &self.style {
            element.style = style.clone();
        }
        if let Some(opacity) = self.opacity {
            element.style.opacity = opacity.clamp(0.0, 1.0);
        }

        match &mut element.kind {
            ElementKind::Image(image) => {
                if let Some(src) = &self.src {
                    image.src = src.clone();
                }
                if let Some(image_x) = self.image_x {
                    image.image_x = image_x;
                }
                if let Some(image_y) = self.image_y {
                    image.image_y = image_y;
                }
                if let Some(image_scale) = self.image_scale {
                    image.image_scale = image_scale.max(0.0);
                }
            }
            ElementKind::Text(text) => {
                if let Some(content) = &self.content {
                    text.content = content.clone();
                }
            }
            ElementKind::Shape(shape) => {
                if let Some(shape_kind) = self.shape_kind {
                    shape.shape_kind = shape_kind;
                }
                if let Some(fill) = self.fill {
                    shape.fill = fill;
                }
            }
        }
    }
}
