//! AlbumInk web bindings
//!
//! Exposes the editing engine to a browser host. DOM event fields go in,
//! plain JS values come out.

pub mod marshal;

pub use marshal::{BindingError, EditorState, GestureEndView, TargetView};

#[cfg(target_arch = "wasm32")]
mod bindings;

#[cfg(target_arch = "wasm32")]
pub use bindings::{WebEditor, set_log_level, start};
