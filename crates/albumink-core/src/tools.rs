//! Tool selection.

use crate::elements::ShapeKind;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Select, drag, resize and crop elements.
    #[default]
    Move,
    /// Pan the viewport.
    Hand,
    /// Click on the canvas to create a text block.
    Text,
    /// Drag on the canvas to draw a shape.
    Shape,
}

impl ToolKind {
    /// Whether a pointer-down on the canvas creates an element.
    pub fn creates_elements(self) -> bool {
        matches!(self, ToolKind::Text | ToolKind::Shape)
    }
}

/// Current tool, the shape kind it draws and the temporary hand override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolState {
    pub current: ToolKind,
    pub shape_kind: ShapeKind,
    /// Space is held down.
    pub space_held: bool,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tool that pointer input is routed to.
    pub fn effective(&self) -> ToolKind {
        if self.space_held {
            ToolKind::Hand
        } else {
            self.current
        }
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.current != tool {
            log::debug!("tool: {:?} -> {:?}", self.current, tool);
        }
        self.current = tool;
    }

    /// Select the shape tool with a given shape kind.
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.shape_kind = kind;
        self.set_tool(ToolKind::Shape);
    }
}
