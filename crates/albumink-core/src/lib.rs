//! AlbumInk Core Library
//!
//! Platform-agnostic editing engine for the AlbumInk spread editor: the
//! element document, undo history, selection, pointer gestures and the
//! viewport. Rendering and persistence belong to the host.

pub mod clipboard;
pub mod config;
pub mod document;
pub mod editor;
pub mod elements;
pub mod geometry;
pub mod history;
pub mod input;
pub mod interaction;
pub mod pages;
pub mod selection;
pub mod shortcuts;
pub mod snap;
pub mod tools;
pub mod viewport;

pub use clipboard::Clipboard;
pub use config::{ConfigError, EditorConfig};
pub use document::{Document, DocumentError, ElementsSnapshot};
pub use editor::{Editor, LayerDirection};
pub use elements::{
    Element, ElementId, ElementKind, ElementPatch, ElementStyle, ElementType, GroupChange, GroupId, ImageContent,
    SerializableColor, ShapeContent, ShapeKind, TextContent, TextTemplate,
};
pub use geometry::{place_point, to_document_space, to_screen_space};
pub use history::{History, MAX_HISTORY};
pub use input::{Key, KeyInput, Modifiers, PointerTarget};
pub use interaction::{GestureEnd, InteractionMode, ResizeHandle};
pub use pages::{AlbumFormat, Page, PageId, PageLayout, PageSide, ViewMode};
pub use selection::{SelectOutcome, Selection};
pub use shortcuts::{EditorCommand, Shortcut, ShortcutRegistry};
pub use snap::{GRID_SIZE, Grid, snap_value};
pub use tools::{ToolKind, ToolState};
pub use viewport::{Viewport, WheelOutcome};
