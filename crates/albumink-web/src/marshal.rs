//! Conversions between host values and engine types.

use albumink_core::{Editor, ElementId, GestureEnd, InteractionMode, Modifiers, PointerTarget, ResizeHandle, ToolKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

/// Bad input from the host.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("invalid element id {0:?}")]
    InvalidId(String),

    #[error("unknown {kind} {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

pub fn parse_id(id: &str) -> Result<ElementId, BindingError> {
    Uuid::parse_str(id).map_err(|_| BindingError::InvalidId(id.to_string()))
}

/// Parse a lowercase string tag (`"hand"`, `"spread"`, `"tl"`) into an engine enum.
pub fn parse_tag<T: DeserializeOwned>(kind: &'static str, value: &str) -> Result<T, BindingError> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).map_err(|_| BindingError::UnknownValue {
        kind,
        value: value.to_string(),
    })
}

/// Log level by name, falling back to `Info`.
pub fn parse_level(level: &str) -> log::Level {
    level.parse().unwrap_or(log::Level::Info)
}

pub fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Editor state a host needs to draw chrome (toolbar, zoom label, panels).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub tool: ToolKind,
    pub effective_tool: ToolKind,
    pub interaction: InteractionMode,
    pub selection: Vec<String>,
    pub primary: Option<String>,
    pub editing: Option<String>,
    pub cropping: bool,
    pub snap: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub active_page: String,
}

impl EditorState {
    pub fn capture(editor: &Editor) -> Self {
        let viewport = editor.viewport();
        Self {
            scale: viewport.scale(),
            pan_x: viewport.pan.x,
            pan_y: viewport.pan.y,
            tool: editor.tools().current,
            effective_tool: editor.tools().effective(),
            interaction: editor.interaction_mode(),
            selection: editor.selection().ids().iter().map(ToString::to_string).collect(),
            primary: editor.selection().primary().map(|id| id.to_string()),
            editing: editor.editing().map(|id| id.to_string()),
            cropping: editor.is_cropping(),
            snap: editor.grid().snap,
            can_undo: editor.can_undo(),
            can_redo: editor.can_redo(),
            active_page: editor.document().active_page().clone(),
        }
    }
}

/// What a pointer-down hit, as sent back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TargetView {
    Element {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        handle: Option<ResizeHandle>,
    },
    Background,
    Canvas,
}

impl From<PointerTarget> for TargetView {
    fn from(target: PointerTarget) -> Self {
        match target {
            PointerTarget::Element(id, handle) => TargetView::Element {
                id: id.to_string(),
                handle,
            },
            PointerTarget::Background => TargetView::Background,
            PointerTarget::Canvas => TargetView::Canvas,
        }
    }
}

/// End of a gesture, as sent back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GestureEndView {
    pub gesture: InteractionMode,
    /// Tool the editor switched to, if any.
    pub tool: Option<ToolKind>,
}

impl From<GestureEnd> for GestureEndView {
    fn from(end: GestureEnd) -> Self {
        Self {
            gesture: end.mode,
            tool: end.tool,
        }
    }
}
