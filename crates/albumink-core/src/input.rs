//! Input events as the editor receives them from the host.

use crate::elements::ElementId;
use crate::interaction::ResizeHandle;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Shift extends a selection instead of replacing it.
    pub fn multi_select(&self) -> bool {
        self.shift
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A printable character, lowercased.
    Char(char),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Key> {
        let parsed = match key {
            "Delete" => Key::Delete,
            "Backspace" => Key::Backspace,
            "Escape" | "Esc" => Key::Escape,
            " " | "Spacebar" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        };
        Some(parsed)
    }

    /// Unit direction of an arrow key.
    pub fn arrow_direction(self) -> Option<Vec2> {
        match self {
            Key::ArrowUp => Some(Vec2::new(0.0, -1.0)),
            Key::ArrowDown => Some(Vec2::new(0.0, 1.0)),
            Key::ArrowLeft => Some(Vec2::new(-1.0, 0.0)),
            Key::ArrowRight => Some(Vec2::new(1.0, 0.0)),
            _ => None,
        }
    }

    pub fn is_arrow(self) -> bool {
        self.arrow_direction().is_some()
    }
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Auto-repeat while held.
    pub repeat: bool,
    /// The event target is a text field; global shortcuts stay out of its way.
    pub target_is_text_input: bool,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            repeat: false,
            target_is_text_input: false,
        }
    }

    /// Parse from DOM event fields. None for keys the editor ignores.
    pub fn from_dom(key: &str, modifiers: Modifiers, repeat: bool, target_is_text_input: bool) -> Option<Self> {
        Some(Self {
            key: Key::from_dom(key)?,
            modifiers,
            repeat,
            target_is_text_input,
        })
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// An element, or one of its resize handles.
    Element(ElementId, Option<ResizeHandle>),
    /// Empty page area of the spread.
    Background,
    /// Outside the spread.
    Canvas,
}
