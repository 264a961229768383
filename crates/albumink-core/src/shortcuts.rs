//! Keyboard shortcut resolution and registry.

use crate::elements::ShapeKind;
use crate::input::{Key, KeyInput};
use crate::tools::ToolKind;

/// An editor action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    SetTool(ToolKind),
    SetShape(ShapeKind),
    /// Space pressed: temporary hand tool until released.
    HoldHand,
    Delete,
    Duplicate,
    Copy,
    Paste,
    Undo,
    Redo,
    Group,
    Ungroup,
    Escape,
    /// Arrow-key nudge; `large` with Shift.
    Nudge { dx: i8, dy: i8, large: bool },
}

/// Map a key press to a command. Editor state (selection, text editing)
/// is checked by the caller.
pub fn resolve(input: &KeyInput) -> Option<EditorCommand> {
    if input.target_is_text_input {
        return None;
    }
    let mods = input.modifiers;

    if let Key::Char(c) = input.key {
        if !mods.command() && !mods.shift {
            let command = match c {
                'v' => EditorCommand::SetTool(ToolKind::Move),
                'h' => EditorCommand::SetTool(ToolKind::Hand),
                't' => EditorCommand::SetTool(ToolKind::Text),
                'r' => EditorCommand::SetShape(ShapeKind::Rectangle),
                'o' => EditorCommand::SetShape(ShapeKind::Circle),
                _ => return None,
            };
            return Some(command);
        }
        if mods.command() {
            return match (c, mods.shift) {
                ('d', _) => Some(EditorCommand::Duplicate),
                ('c', _) => Some(EditorCommand::Copy),
                ('v', _) => Some(EditorCommand::Paste),
                ('z', false) => Some(EditorCommand::Undo),
                ('z', true) | ('y', _) => Some(EditorCommand::Redo),
                ('g', false) => Some(EditorCommand::Group),
                ('g', true) => Some(EditorCommand::Ungroup),
                _ => None,
            };
        }
        return None;
    }

    match input.key {
        Key::Space if !input.repeat => Some(EditorCommand::HoldHand),
        Key::Delete | Key::Backspace => Some(EditorCommand::Delete),
        Key::Escape => Some(EditorCommand::Escape),
        key => key.arrow_direction().map(|dir| EditorCommand::Nudge {
            dx: dir.x as i8,
            dy: dir.y as i8,
            large: mods.shift,
        }),
    }
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, shift: bool, description: &'static str) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts, for help overlays.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("V", false, false, "Move tool"),
            Shortcut::new("H", false, false, "Hand tool"),
            Shortcut::new("Space", false, false, "Hand tool while held"),
            Shortcut::new("T", false, false, "Text tool"),
            Shortcut::new("R", false, false, "Rectangle tool"),
            Shortcut::new("O", false, false, "Circle tool"),
            Shortcut::new("Z", true, false, "Undo"),
            Shortcut::new("Z", true, true, "Redo"),
            Shortcut::new("Y", true, false, "Redo"),
            Shortcut::new("D", true, false, "Duplicate selection"),
            Shortcut::new("C", true, false, "Copy selection"),
            Shortcut::new("V", true, false, "Paste"),
            Shortcut::new("G", true, false, "Group selection"),
            Shortcut::new("G", true, true, "Ungroup selection"),
            Shortcut::new("Delete", false, false, "Delete selection"),
            Shortcut::new("Backspace", false, false, "Delete selection"),
            Shortcut::new("Arrows", false, false, "Nudge by 1"),
            Shortcut::new("Arrows", false, true, "Nudge by 10"),
            Shortcut::new("Escape", false, false, "Stop editing, deselect, then move tool"),
        ]
    }
}
