//! Editor state: document, history, selection, viewport and the active gesture.
//!
//! Every durable document change ends in exactly one history commit. Gestures
//! write to the document live on each pointer move and commit once on
//! pointer-up; the commit always reads the live document.

use crate::clipboard::{Clipboard, clone_elements};
use crate::config::{ConfigError, EditorConfig};
use crate::document::{Document, ElementsSnapshot};
use crate::elements::{
    Element, ElementId, ElementKind, ElementPatch, ElementType, GroupChange, GroupId, ShapeContent, ShapeKind,
    TextTemplate,
};
use crate::geometry::{hit_point, place_point};
use crate::history::History;
use crate::input::{Key, KeyInput, Modifiers, PointerTarget};
use crate::interaction::{
    ElementSnapshot, GestureEnd, HANDLE_HIT_TOLERANCE, Interaction, InteractionMode, ResizeHandle,
    hit_test_handles,
};
use crate::pages::{AlbumFormat, PageLayout, PageSide, ViewMode};
use crate::selection::{SelectOutcome, Selection};
use crate::shortcuts::{EditorCommand, resolve};
use crate::snap::Grid;
use crate::tools::{ToolKind, ToolState};
use crate::viewport::{Viewport, WheelOutcome};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where `add_element` places elements without an explicit position.
const DEFAULT_X: f64 = 50.0;
const DEFAULT_Y: f64 = 250.0;
/// Size of a text block created by clicking with the text tool.
const CLICK_TEXT_SIZE: Size = Size::new(200.0, 50.0);
/// Size of a dropped image, centered on the drop point.
const DROP_IMAGE_SIZE: Size = Size::new(200.0, 200.0);

/// Direction for z-order moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerDirection {
    Front,
    Back,
}

/// The editing engine.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    document: Document,
    history: History<ElementsSnapshot>,
    selection: Selection,
    viewport: Viewport,
    grid: Grid,
    layout: PageLayout,
    interaction: Interaction,
    tools: ToolState,
    clipboard: Clipboard,
    /// Text element being edited in place.
    editing: Option<ElementId>,
    /// Image crop mode is on.
    cropping: bool,
    /// Arrow-key nudges written live, waiting for key-up to commit.
    nudge_pending: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty single-spread document.
    /// An invalid config is replaced by the defaults.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(config, Document::default())
    }

    /// Create an editor around a seeded document. The seed is the first history entry.
    /// An invalid config is replaced by the defaults.
    pub fn with_document(config: EditorConfig, document: Document) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{err}; using default editor config");
                EditorConfig::default()
            }
        };
        Self::build(config, document)
    }

    /// Like [`with_document`](Self::with_document), but rejects an invalid config.
    pub fn try_with_document(config: EditorConfig, document: Document) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, document))
    }

    fn build(config: EditorConfig, document: Document) -> Self {
        let history = History::new(document.snapshot(), config.history_limit);
        Self {
            viewport: Viewport::from_config(&config),
            grid: Grid::new(config.grid_size),
            layout: PageLayout::new(config.format.clone()),
            config,
            document,
            history,
            selection: Selection::new(),
            interaction: Interaction::default(),
            tools: ToolState::new(),
            clipboard: Clipboard::new(),
            editing: None,
            cropping: false,
            nudge_pending: false,
        }
    }

    /// Replace the document and start a fresh history.
    pub fn load_document(&mut self, document: Document) {
        self.interaction.finish();
        self.history.reset(document.snapshot());
        self.document = document;
        self.deselect();
        self.nudge_pending = false;
        log::debug!("loaded document with {} element(s)", self.document.len());
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History<ElementsSnapshot> {
        &self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn editing(&self) -> Option<ElementId> {
        self.editing
    }

    pub fn is_cropping(&self) -> bool {
        self.cropping
    }

    pub fn clipboard_len(&self) -> usize {
        self.clipboard.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Element shown in property panels.
    pub fn primary_element(&self) -> Option<&Element> {
        self.selection.primary().and_then(|id| self.document.get(id))
    }

    fn selected_elements(&self) -> impl Iterator<Item = &Element> {
        self.document
            .elements()
            .iter()
            .filter(move |el| self.selection.contains(el.id()))
    }

    /// Record the live document. Absorbs any pending nudge.
    fn commit(&mut self) {
        self.history.commit(self.document.snapshot());
        self.nudge_pending = false;
    }

    // --- Mutation and creation API ---

    /// Apply a partial update. Unknown ids are ignored.
    ///
    /// With `record_history` false the change is live only; a later commit
    /// picks it up.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch, record_history: bool) -> bool {
        if !self.document.update(id, patch) {
            log::debug!("update for unknown element {id} ignored");
            return false;
        }
        if record_history {
            self.commit();
        }
        true
    }

    /// Create an element on the active page, select it and commit.
    pub fn add_element(&mut self, element_type: ElementType, defaults: ElementPatch) -> ElementId {
        let kind = match element_type {
            ElementType::Shape => ElementKind::Shape(ShapeContent::new(defaults.shape_kind.unwrap_or_default())),
            other => ElementKind::default_for(other),
        };
        let page = self.document.active_page().clone();
        let mut element = Element::new(kind, page.clone()).at(DEFAULT_X + self.layout.x_offset(), DEFAULT_Y);
        defaults.apply(&mut element);
        element.page_id = page;

        let id = element.id();
        self.document.push(element);
        self.replace_selection([id]);
        self.commit();
        log::debug!("added {element_type:?} element {id}");
        id
    }

    /// Select `id` and its group, as a click in the layers panel would.
    pub fn select(&mut self, id: ElementId, multi: bool) -> SelectOutcome {
        let outcome = self.selection.select(id, multi, &self.document);
        if outcome == SelectOutcome::Replaced {
            self.editing = None;
            self.cropping = false;
        }
        outcome
    }

    fn replace_selection(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.selection.set(ids);
        self.editing = None;
        self.cropping = false;
    }

    /// Clear the selection and everything tied to it.
    pub fn deselect(&mut self) {
        self.selection.clear();
        self.editing = None;
        self.cropping = false;
    }

    fn prune_selection(&mut self) {
        let document = &self.document;
        self.selection.retain(|id| document.contains(*id));
        if self.editing.is_some_and(|id| !document.contains(id)) {
            self.editing = None;
        }
        if self.selection.is_empty() {
            self.cropping = false;
        }
    }

    // --- Pointer input ---

    /// Resolve what is under a screen point and dispatch the pointer-down.
    pub fn pointer_down(&mut self, position: Point, modifiers: Modifiers) -> PointerTarget {
        let target = self.target_at(position);
        match target {
            PointerTarget::Element(id, handle) => {
                self.pointer_down_element(id, handle, position, modifiers);
            }
            PointerTarget::Background => {
                self.pointer_down_canvas(position, true);
            }
            PointerTarget::Canvas => {
                self.pointer_down_canvas(position, false);
            }
        }
        target
    }

    /// Find the target under a screen point: a handle of the single
    /// selected element, then the top-most element, then the page area.
    pub fn target_at(&self, position: Point) -> PointerTarget {
        let scale = self.viewport.scale();
        let point = hit_point(position, self.viewport.pan, scale, &self.layout);

        if let Some(element) = self.selection.single().and_then(|id| self.document.get(id)) {
            if let Some(handle) = hit_test_handles(element, point, HANDLE_HIT_TOLERANCE / scale) {
                return PointerTarget::Element(element.id(), Some(handle));
            }
        }
        if let Some(&id) = self.document.elements_at_point(point, 0.0).first() {
            return PointerTarget::Element(id, None);
        }
        let page = Rect::from_origin_size((self.layout.x_offset(), 0.0), self.layout.canvas_size());
        if page.contains(point) {
            PointerTarget::Background
        } else {
            PointerTarget::Canvas
        }
    }

    /// Pointer-down on an element or one of its handles.
    /// Returns true if a gesture started.
    pub fn pointer_down_element(
        &mut self,
        id: ElementId,
        handle: Option<ResizeHandle>,
        position: Point,
        modifiers: Modifiers,
    ) -> bool {
        if self.tools.effective() == ToolKind::Hand {
            self.viewport.begin_pan(position);
            return true;
        }
        // Creation tools draw on top of existing elements.
        if self.tools.current.creates_elements() {
            return self.pointer_down_canvas(position, false);
        }
        if self.interaction.is_active() || self.editing == Some(id) {
            return false;
        }

        let Some(element) = self.document.get(id) else {
            return false;
        };
        if element.locked || element.page_id != *self.document.active_page() {
            log::debug!("element {id} is locked or off-page; no gesture");
            return false;
        }
        if self.cropping && element.is_image() && self.selection.contains(id) {
            let snapshot = ElementSnapshot::capture(element);
            return self.interaction.begin(InteractionMode::Cropping, position, vec![snapshot]);
        }

        self.select(id, modifiers.multi_select());
        if !self.selection.contains(id) {
            return false;
        }

        let (mode, targets) = match handle {
            Some(handle) => (InteractionMode::Resizing(handle), vec![id]),
            None => (InteractionMode::Dragging, self.selection.ids().to_vec()),
        };
        self.raise_to_front(id);

        let snapshots = targets
            .iter()
            .filter_map(|target| self.document.get(*target))
            .filter(|el| !el.locked)
            .map(ElementSnapshot::capture)
            .collect();
        self.interaction.begin(mode, position, snapshots)
    }

    /// Move the element's group to the top of the z-order as its own commit.
    fn raise_to_front(&mut self, id: ElementId) {
        let members = self.document.group_members(id);
        if members.is_empty() || self.document.is_top_block(&members) {
            return;
        }
        self.document.bring_to_front(&members);
        self.commit();
        log::debug!("raised {} element(s) to front", members.len());
    }

    /// Pointer-down on empty canvas. `on_background` is true when it landed
    /// on the page area rather than outside it.
    /// Returns true if a gesture started or an element was created.
    pub fn pointer_down_canvas(&mut self, position: Point, on_background: bool) -> bool {
        if self.tools.effective() == ToolKind::Hand {
            self.viewport.begin_pan(position);
            return true;
        }
        if self.interaction.is_active() {
            return false;
        }

        let point = place_point(position, self.viewport.pan, self.viewport.scale(), &self.grid, &self.layout);
        match self.tools.current {
            ToolKind::Text => {
                let id = self.add_element(
                    ElementType::Text,
                    ElementPatch::frame(Rect::from_origin_size(point, CLICK_TEXT_SIZE)),
                );
                self.editing = Some(id);
                self.tools.set_tool(ToolKind::Move);
                true
            }
            ToolKind::Shape => {
                let kind = ElementKind::Shape(ShapeContent::new(self.tools.shape_kind));
                let element = Element::new(kind, self.document.active_page().clone())
                    .at(point.x, point.y)
                    .sized(0.0, 0.0);
                let snapshot = ElementSnapshot::capture(&element);
                let id = element.id();
                // Committed once, when the drawing gesture ends.
                self.document.push(element);
                self.replace_selection([id]);
                self.interaction.begin(InteractionMode::Drawing, position, vec![snapshot])
            }
            ToolKind::Move | ToolKind::Hand => {
                if on_background {
                    self.deselect();
                }
                false
            }
        }
    }

    /// Pointer moved (screen space). Returns true if anything changed.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        if self.viewport.is_panning() {
            return self.viewport.pan_move(position);
        }
        if !self.interaction.is_active() {
            return false;
        }
        let updates = self.interaction.frame_updates(
            position,
            self.viewport.scale(),
            &self.grid,
            self.config.min_element_size,
        );
        for (id, patch) in &updates {
            // Elements deleted mid-gesture are skipped.
            self.document.update(*id, patch);
        }
        !updates.is_empty()
    }

    /// Global pointer-up. Ends a pan, or ends the gesture and commits it.
    pub fn pointer_up(&mut self) -> Option<GestureEnd> {
        if self.viewport.end_pan() || !self.interaction.is_active() {
            return None;
        }
        let mode = self.interaction.finish();
        self.commit();
        let tool = (mode == InteractionMode::Drawing).then(|| {
            self.tools.set_tool(ToolKind::Move);
            ToolKind::Move
        });
        log::debug!("gesture {mode:?} committed");
        Some(GestureEnd { mode, tool })
    }

    /// Wheel input. Ctrl/Cmd zooms around `anchor`, otherwise the view pans.
    pub fn wheel(&mut self, delta: Vec2, anchor: Point, modifiers: Modifiers) -> WheelOutcome {
        self.viewport.wheel(delta, anchor, modifiers.command())
    }

    /// Animation-frame callback; applies coalesced wheel zoom.
    pub fn flush_frame(&mut self) -> bool {
        self.viewport.flush_frame()
    }

    /// Double-click on an element: text elements enter in-place editing.
    pub fn double_click(&mut self, id: ElementId) -> bool {
        if self.tools.effective() == ToolKind::Hand {
            return false;
        }
        match self.document.get(id) {
            Some(element) if element.is_text() => {
                self.editing = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Stop in-place text editing (e.g. the text field lost focus).
    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    /// Drop an image asset, centered on the drop point.
    pub fn drop_image(&mut self, position: Point, src: impl Into<String>) -> ElementId {
        let point = place_point(position, self.viewport.pan, self.viewport.scale(), &self.grid, &self.layout);
        let origin = point - DROP_IMAGE_SIZE.to_vec2() / 2.0;
        let patch = ElementPatch {
            name: Some("Photo".to_string()),
            src: Some(src.into()),
            ..ElementPatch::frame(Rect::from_origin_size(origin, DROP_IMAGE_SIZE))
        };
        let id = self.add_element(ElementType::Image, patch);
        self.tools.set_tool(ToolKind::Move);
        id
    }

    /// Drop a text template, centered on the drop point.
    pub fn drop_template(&mut self, position: Point, template: &TextTemplate) -> ElementId {
        let point = place_point(position, self.viewport.pan, self.viewport.scale(), &self.grid, &self.layout);
        let mut patch = template.element_data.clone();
        let width = patch.width.unwrap_or(200.0);
        let height = patch.height.unwrap_or(100.0);
        patch.x = Some(point.x - width / 2.0);
        patch.y = Some(point.y - height / 2.0);
        patch.name = Some(template.name.clone());
        let id = self.add_element(ElementType::Text, patch);
        self.tools.set_tool(ToolKind::Move);
        id
    }

    // --- Keyboard ---

    /// Handle a key press. Returns true if the key was consumed.
    pub fn key_down(&mut self, input: &KeyInput) -> bool {
        let Some(command) = resolve(input) else {
            return false;
        };
        self.execute(command);
        true
    }

    /// Run a command with the same state guards as its key binding.
    pub fn execute(&mut self, command: EditorCommand) {
        let has_selection = !self.selection.is_empty();
        let editing = self.editing.is_some();
        match command {
            EditorCommand::SetTool(tool) => self.tools.set_tool(tool),
            EditorCommand::SetShape(kind) => self.tools.set_shape(kind),
            EditorCommand::HoldHand => self.tools.space_held = true,
            EditorCommand::Delete if has_selection && !editing => {
                self.delete_selected();
            }
            EditorCommand::Duplicate if has_selection && !editing => {
                self.duplicate_selected();
            }
            EditorCommand::Copy if has_selection && !editing => {
                self.copy_selected();
            }
            EditorCommand::Paste if !editing => {
                self.paste();
            }
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
            EditorCommand::Group if !editing => {
                self.group_selected();
            }
            EditorCommand::Ungroup if !editing => {
                self.ungroup_selected();
            }
            EditorCommand::Escape => {
                self.escape();
            }
            EditorCommand::Nudge { dx, dy, large } if has_selection && !editing && !self.interaction.is_active() => {
                let step = if large {
                    self.config.nudge_step_large
                } else {
                    self.config.nudge_step
                };
                self.nudge(Vec2::new(f64::from(dx) * step, f64::from(dy) * step));
            }
            other => log::debug!("{other:?} ignored in current state"),
        }
    }

    /// Handle a key release. Returns true if it committed a pending nudge.
    ///
    /// During a gesture the nudge stays pending and the gesture's own commit
    /// on pointer-up records it.
    pub fn key_up(&mut self, input: &KeyInput) -> bool {
        if input.key == Key::Space {
            self.tools.space_held = false;
        }
        if input.key.is_arrow() && self.nudge_pending && !self.interaction.is_active() {
            self.commit();
            return true;
        }
        false
    }

    /// Move unlocked selected elements live. Committed on key-up.
    /// Ignored while a gesture is active.
    pub fn nudge(&mut self, delta: Vec2) -> bool {
        if self.interaction.is_active() {
            return false;
        }
        let moves: Vec<(ElementId, ElementPatch)> = self
            .selected_elements()
            .filter(|el| !el.locked)
            .map(|el| {
                let patch = ElementPatch::position(self.grid.apply(el.x + delta.x), self.grid.apply(el.y + delta.y));
                (el.id(), patch)
            })
            .collect();
        for (id, patch) in &moves {
            self.document.update(*id, patch);
        }
        if !moves.is_empty() {
            self.nudge_pending = true;
        }
        !moves.is_empty()
    }

    /// Leave text editing, else clear the selection, else return to the move tool.
    pub fn escape(&mut self) -> bool {
        if self.editing.take().is_some() {
            return true;
        }
        if !self.selection.is_empty() {
            self.deselect();
            return true;
        }
        if self.tools.current != ToolKind::Move {
            self.tools.set_tool(ToolKind::Move);
            return true;
        }
        false
    }

    // --- Selection operations ---

    /// Delete the selected elements that are not locked.
    pub fn delete_selected(&mut self) -> bool {
        let ids: Vec<ElementId> = self.selected_elements().filter(|el| !el.locked).map(|el| el.id()).collect();
        if ids.is_empty() {
            return false;
        }
        self.document.remove(&ids);
        self.prune_selection();
        self.commit();
        log::debug!("deleted {} element(s)", ids.len());
        true
    }

    /// Delete an element together with its whole group.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let members = self.document.group_members(id);
        if members.is_empty() {
            return false;
        }
        self.document.remove(&members);
        self.prune_selection();
        self.commit();
        true
    }

    /// Clone the selection with an offset and select the clones.
    pub fn duplicate_selected(&mut self) -> usize {
        let clones = clone_elements(self.selected_elements(), self.config.paste_offset);
        self.insert_and_select(clones)
    }

    /// Copy the selection to the clipboard. Returns how many were copied.
    pub fn copy_selected(&mut self) -> usize {
        let selection = &self.selection;
        let selected: Vec<&Element> = self
            .document
            .elements()
            .iter()
            .filter(|el| selection.contains(el.id()))
            .collect();
        let count = selected.len();
        self.clipboard.copy(selected);
        count
    }

    /// Paste the clipboard onto the active page.
    pub fn paste(&mut self) -> usize {
        let pasted = self.clipboard.paste(self.document.active_page(), self.config.paste_offset);
        self.insert_and_select(pasted)
    }

    fn insert_and_select(&mut self, elements: Vec<Element>) -> usize {
        if elements.is_empty() {
            return 0;
        }
        let ids: Vec<ElementId> = elements.iter().map(Element::id).collect();
        for element in elements {
            self.document.push(element);
        }
        self.replace_selection(ids.iter().copied());
        self.commit();
        ids.len()
    }

    /// Put the selection (at least two elements) into one new group.
    pub fn group_selected(&mut self) -> Option<GroupId> {
        if self.selection.len() < 2 {
            return None;
        }
        let group_id = Uuid::new_v4();
        self.set_group(GroupChange::Join(group_id));
        Some(group_id)
    }

    /// Remove the selected elements from their groups.
    pub fn ungroup_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.set_group(GroupChange::Leave);
        true
    }

    fn set_group(&mut self, change: GroupChange) {
        let patch = ElementPatch {
            group: Some(change),
            ..ElementPatch::default()
        };
        for id in self.selection.ids() {
            self.document.update(*id, &patch);
        }
        self.commit();
    }

    /// Move the selection to the front or back, keeping its relative order.
    pub fn move_layer(&mut self, direction: LayerDirection) -> bool {
        let ids = self.selection.ids();
        let moved = match direction {
            LayerDirection::Front => self.document.bring_to_front(ids),
            LayerDirection::Back => self.document.send_to_back(ids),
        };
        if moved {
            self.commit();
        }
        moved
    }

    // --- History ---

    /// Step back one commit. Ignored while a gesture is active.
    pub fn undo(&mut self) -> bool {
        if self.interaction.is_active() {
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.document.restore(snapshot);
        self.nudge_pending = false;
        self.prune_selection();
        true
    }

    /// Step forward one commit. Ignored while a gesture is active.
    pub fn redo(&mut self) -> bool {
        if self.interaction.is_active() {
            return false;
        }
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.document.restore(snapshot);
        self.nudge_pending = false;
        self.prune_selection();
        true
    }

    // --- View state ---

    /// Switch spreads. The selection is cleared.
    pub fn set_active_page(&mut self, page_id: &str) -> bool {
        if !self.document.set_active_page(page_id) {
            return false;
        }
        self.deselect();
        true
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.layout.set_view_mode(mode);
    }

    pub fn set_side(&mut self, side: PageSide) {
        self.layout.side = side;
    }

    pub fn set_format(&mut self, format: AlbumFormat) {
        self.layout.format = format;
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
    }

    /// Pick the shape tool with a given shape kind.
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.tools.set_shape(kind);
    }

    pub fn set_crop_mode(&mut self, enabled: bool) {
        self.cropping = enabled;
    }

    /// Fit the visible spread into the container.
    pub fn fit_view(&mut self, container: Size) {
        let content = self.layout.canvas_size();
        self.viewport
            .fit(container, content, self.config.fit_padding, self.config.fit_max_scale);
    }

    /// Back to 100%, centered.
    pub fn reset_view(&mut self, container: Size) {
        let content = self.layout.canvas_size();
        self.viewport.reset(container, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::MIN_ELEMENT_SIZE;
    use crate::pages::Page;
    use std::collections::HashSet;

    fn shape_at(x: f64, y: f64, width: f64, height: f64) -> Element {
        Element::new(ElementKind::default_for(ElementType::Shape), "p1")
            .at(x, y)
            .sized(width, height)
    }

    fn editor_with(elements: Vec<Element>) -> Editor {
        let document = Document::with_elements(Vec::new(), elements).unwrap();
        Editor::with_document(EditorConfig::default(), document)
    }

    fn key(name: &str, modifiers: Modifiers) -> KeyInput {
        KeyInput::from_dom(name, modifiers, false, false).unwrap()
    }

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        }
    }

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn test_drag_at_scale_commits_once() {
        let a = shape_at(10.0, 10.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        editor.viewport_mut().set_scale(2.0);

        assert!(editor.pointer_down_element(id, None, Point::new(100.0, 100.0), Modifiers::NONE));
        assert_eq!(editor.interaction_mode(), InteractionMode::Dragging);
        editor.pointer_move(Point::new(110.0, 110.0));
        editor.pointer_move(Point::new(123.0, 96.0));

        let el = editor.document().get(id).unwrap();
        assert_eq!((el.x, el.y), (21.5, 8.0));
        assert_eq!(editor.history().len(), 1);

        let end = editor.pointer_up().unwrap();
        assert_eq!(end.mode, InteractionMode::Dragging);
        assert_eq!(end.tool, None);
        assert_eq!(editor.history().len(), 2);
        let committed = &editor.history().current()[0];
        assert_eq!((committed.x, committed.y), (21.5, 8.0));
        assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_drag_moves_whole_group() {
        let group = Uuid::new_v4();
        let a = shape_at(0.0, 0.0, 10.0, 10.0).in_group(group);
        let b = shape_at(100.0, 0.0, 10.0, 10.0).in_group(group);
        let (a_id, b_id) = (a.id(), b.id());
        let mut editor = editor_with(vec![a, b]);

        editor.pointer_down_element(b_id, None, Point::ZERO, Modifiers::NONE);
        editor.pointer_move(Point::new(5.0, 7.0));
        editor.pointer_up();

        assert_eq!(editor.document().get(a_id).unwrap().x, 5.0);
        assert_eq!(editor.document().get(b_id).unwrap().x, 105.0);
    }

    #[test]
    fn test_clicking_group_member_then_delete_removes_group() {
        let group = Uuid::new_v4();
        let a = shape_at(0.0, 0.0, 10.0, 10.0).in_group(group);
        let b = shape_at(20.0, 0.0, 10.0, 10.0).in_group(group);
        let c = shape_at(40.0, 0.0, 10.0, 10.0);
        let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());
        let mut editor = editor_with(vec![a, b, c]);

        editor.pointer_down_element(a_id, None, Point::ZERO, Modifiers::NONE);
        editor.pointer_up();
        let selected: HashSet<_> = editor.selection().ids().iter().copied().collect();
        assert_eq!(selected, HashSet::from([a_id, b_id]));

        assert!(editor.key_down(&key("Delete", Modifiers::NONE)));
        assert!(!editor.document().contains(a_id));
        assert!(!editor.document().contains(b_id));
        assert!(editor.document().contains(c_id));
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_paste_remaps_groups() {
        let group = Uuid::new_v4();
        let loose = shape_at(0.0, 0.0, 10.0, 10.0);
        let a = shape_at(20.0, 0.0, 10.0, 10.0).in_group(group);
        let b = shape_at(40.0, 0.0, 10.0, 10.0).in_group(group);
        let (loose_id, a_id) = (loose.id(), a.id());
        let mut editor = editor_with(vec![loose, a, b]);

        editor.select(loose_id, false);
        editor.select(a_id, true);
        assert_eq!(editor.selection().len(), 3);
        assert!(editor.key_down(&key("c", ctrl())));
        let before = editor.history().len();
        assert!(editor.key_down(&key("v", ctrl())));

        assert_eq!(editor.document().len(), 6);
        assert_eq!(editor.history().len(), before + 1);
        let pasted: Vec<&Element> = editor.selected_elements().collect();
        assert_eq!(pasted.len(), 3);
        let ids: HashSet<_> = pasted.iter().map(|e| e.id()).collect();
        assert_eq!(ids.len(), 3);

        let groups: HashSet<_> = pasted.iter().filter_map(|e| e.group_id).collect();
        assert_eq!(groups.len(), 1);
        assert!(!groups.contains(&group));
        assert_eq!(pasted.iter().filter(|e| e.group_id.is_some()).count(), 2);
        assert!(pasted.iter().any(|e| e.group_id.is_none() && e.x == 10.0));
    }

    #[test]
    fn test_resize_keeps_opposite_edge() {
        let a = shape_at(40.0, 30.0, 100.0, 80.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);

        assert!(editor.pointer_down_element(id, Some(ResizeHandle::TopLeft), Point::ZERO, Modifiers::NONE));
        editor.pointer_move(Point::new(500.0, 500.0));
        let el = editor.document().get(id).unwrap();
        assert_eq!((el.width, el.height), (MIN_ELEMENT_SIZE, MIN_ELEMENT_SIZE));
        assert_eq!((el.x + el.width, el.y + el.height), (140.0, 110.0));

        editor.pointer_move(Point::new(-20.0, -10.0));
        let el = editor.document().get(id).unwrap();
        assert_eq!((el.x, el.y, el.width, el.height), (20.0, 20.0, 120.0, 90.0));
        editor.pointer_up();
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_click_to_front_is_separate_commit() {
        let a = shape_at(0.0, 0.0, 50.0, 50.0);
        let b = shape_at(10.0, 10.0, 50.0, 50.0);
        let (a_id, b_id) = (a.id(), b.id());
        let mut editor = editor_with(vec![a, b]);
        let original = editor.document().elements().to_vec();

        editor.pointer_down_element(a_id, None, Point::ZERO, Modifiers::NONE);
        editor.pointer_move(Point::new(5.0, 0.0));
        editor.pointer_up();

        assert_eq!(editor.history().len(), 3);
        let order: Vec<_> = editor.document().elements().iter().map(|e| e.id()).collect();
        assert_eq!(order, vec![b_id, a_id]);

        // First undo reverts the move, second the reorder.
        editor.undo();
        assert_eq!(editor.document().get(a_id).unwrap().x, 0.0);
        assert_eq!(editor.document().index_of(a_id), Some(1));
        editor.undo();
        assert_eq!(editor.document().elements(), original.as_slice());
    }

    #[test]
    fn test_top_element_is_not_reordered() {
        let a = shape_at(0.0, 0.0, 50.0, 50.0);
        let b = shape_at(10.0, 10.0, 50.0, 50.0);
        let b_id = b.id();
        let mut editor = editor_with(vec![a, b]);
        editor.pointer_down_element(b_id, None, Point::ZERO, Modifiers::NONE);
        editor.pointer_up();
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_locked_element_starts_no_gesture() {
        let mut a = shape_at(0.0, 0.0, 50.0, 50.0);
        a.locked = true;
        let id = a.id();
        let mut editor = editor_with(vec![a]);

        assert!(!editor.pointer_down_element(id, None, Point::ZERO, Modifiers::NONE));
        assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
        assert!(editor.selection().is_empty());
        assert!(editor.pointer_up().is_none());
        assert_eq!(editor.history().len(), 1);

        // Panels may still edit locked elements.
        assert!(editor.update_element(id, &ElementPatch::position(5.0, 5.0), true));
        assert_eq!(editor.document().get(id).unwrap().x, 5.0);
    }

    #[test]
    fn test_draw_shape_backwards_and_revert_tool() {
        let mut editor = Editor::default();
        editor.execute(EditorCommand::SetShape(ShapeKind::Ellipse));

        assert!(editor.pointer_down_canvas(Point::new(200.0, 200.0), true));
        assert_eq!(editor.interaction_mode(), InteractionMode::Drawing);
        let id = editor.selection().single().unwrap();
        assert_eq!(editor.document().get(id).unwrap().width, 0.0);

        editor.pointer_move(Point::new(150.0, 170.0));
        let el = editor.document().get(id).unwrap();
        assert_eq!((el.x, el.y, el.width, el.height), (150.0, 170.0, 50.0, 30.0));
        assert_eq!(
            el.kind,
            ElementKind::Shape(ShapeContent::new(ShapeKind::Ellipse))
        );

        let end = editor.pointer_up().unwrap();
        assert_eq!(end.tool, Some(ToolKind::Move));
        assert_eq!(editor.tools().current, ToolKind::Move);
        assert_eq!(editor.history().len(), 2);

        // One undo removes the drawn shape.
        assert!(editor.undo());
        assert!(editor.document().is_empty());
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_nudge_commits_once_on_key_up() {
        let a = shape_at(10.0, 10.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        editor.select(id, false);

        editor.key_down(&key("ArrowRight", shift()));
        editor.key_down(&key("ArrowRight", shift()));
        editor.key_down(&key("ArrowUp", Modifiers::NONE));
        assert_eq!(editor.document().get(id).unwrap().x, 30.0);
        assert_eq!(editor.document().get(id).unwrap().y, 9.0);
        assert_eq!(editor.history().len(), 1);

        assert!(editor.key_up(&key("ArrowRight", Modifiers::NONE)));
        assert!(!editor.key_up(&key("ArrowUp", Modifiers::NONE)));
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_undo_redo_restore_exact_states() {
        let a = shape_at(0.0, 0.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        let mut states = vec![editor.document().elements().to_vec()];

        editor.update_element(id, &ElementPatch::position(3.0, 4.0), true);
        states.push(editor.document().elements().to_vec());
        editor.add_element(ElementType::Text, ElementPatch::default());
        states.push(editor.document().elements().to_vec());
        editor.select(id, true);
        editor.group_selected();
        states.push(editor.document().elements().to_vec());
        editor.move_layer(LayerDirection::Back);
        states.push(editor.document().elements().to_vec());

        for expected in states.iter().rev().skip(1) {
            assert!(editor.undo());
            assert_eq!(editor.document().elements(), expected.as_slice());
        }
        assert!(!editor.undo());
        for expected in states.iter().skip(1) {
            assert!(editor.redo());
            assert_eq!(editor.document().elements(), expected.as_slice());
        }
        assert!(!editor.redo());
    }

    #[test]
    fn test_text_tool_click_creates_and_edits() {
        let mut editor = Editor::default();
        editor.set_view_mode(ViewMode::Single);
        editor.set_side(PageSide::Right);
        editor.grid_mut().snap = true;
        editor.set_tool(ToolKind::Text);

        assert!(editor.pointer_down_canvas(Point::new(101.0, 62.0), true));
        let id = editor.editing().unwrap();
        let el = editor.document().get(id).unwrap();
        assert!(el.is_text());
        assert_eq!((el.x, el.y, el.width, el.height), (310.0, 60.0, 200.0, 50.0));
        assert_eq!(editor.tools().current, ToolKind::Move);
        assert_eq!(editor.selection().single(), Some(id));
        assert_eq!(editor.history().len(), 2);
        assert!(editor.pointer_up().is_none());
    }

    #[test]
    fn test_add_element_defaults() {
        let mut editor = Editor::default();
        let id = editor.add_element(
            ElementType::Shape,
            ElementPatch {
                shape_kind: Some(ShapeKind::Triangle),
                ..ElementPatch::default()
            },
        );
        let el = editor.document().get(id).unwrap();
        assert_eq!((el.x, el.y, el.width, el.height), (50.0, 250.0, 100.0, 87.0));
        assert_eq!(el.page_id, "p1");
        assert_eq!(editor.selection().ids(), &[id]);
    }

    #[test]
    fn test_drops_center_on_point() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Text);
        let id = editor.drop_image(Point::new(300.0, 300.0), "a.jpg");
        let el = editor.document().get(id).unwrap();
        assert_eq!((el.x, el.y, el.width, el.height), (200.0, 200.0, 200.0, 200.0));
        assert!(matches!(&el.kind, ElementKind::Image(image) if image.src == "a.jpg"));
        assert_eq!(editor.tools().current, ToolKind::Move);

        let template = TextTemplate {
            id: "title".to_string(),
            name: "Title".to_string(),
            element_data: ElementPatch {
                width: Some(300.0),
                height: Some(60.0),
                content: Some("Summer".to_string()),
                ..ElementPatch::default()
            },
        };
        let id = editor.drop_template(Point::new(300.0, 300.0), &template);
        let el = editor.document().get(id).unwrap();
        assert_eq!((el.x, el.y), (150.0, 270.0));
        assert_eq!(el.name, "Title");
        assert!(matches!(&el.kind, ElementKind::Text(text) if text.content == "Summer"));
    }

    #[test]
    fn test_escape_cascade() {
        let mut editor = Editor::default();
        let id = editor.add_element(ElementType::Text, ElementPatch::default());
        editor.set_tool(ToolKind::Hand);
        editor.set_tool(ToolKind::Text);
        assert!(editor.double_click(id));

        assert!(editor.escape());
        assert_eq!(editor.editing(), None);
        assert!(!editor.selection().is_empty());
        assert!(editor.escape());
        assert!(editor.selection().is_empty());
        assert!(editor.escape());
        assert_eq!(editor.tools().current, ToolKind::Move);
        assert!(!editor.escape());
    }

    #[test]
    fn test_editing_blocks_drag_and_delete() {
        let mut editor = Editor::default();
        let id = editor.add_element(ElementType::Text, ElementPatch::default());
        assert!(editor.double_click(id));

        assert!(!editor.pointer_down_element(id, None, Point::ZERO, Modifiers::NONE));
        editor.key_down(&key("Backspace", Modifiers::NONE));
        assert!(editor.document().contains(id));

        let typing = KeyInput::from_dom("Delete", Modifiers::NONE, false, true).unwrap();
        assert!(!editor.key_down(&typing));
    }

    #[test]
    fn test_crop_moves_image_inside_frame() {
        let image = Element::new(ElementKind::default_for(ElementType::Image), "p1")
            .at(0.0, 0.0)
            .sized(100.0, 100.0);
        let id = image.id();
        let mut editor = editor_with(vec![image]);
        editor.select(id, false);
        editor.set_crop_mode(true);

        assert!(editor.pointer_down_element(id, None, Point::ZERO, Modifiers::NONE));
        assert_eq!(editor.interaction_mode(), InteractionMode::Cropping);
        editor.pointer_move(Point::new(7.0, -3.0));
        let el = editor.document().get(id).unwrap();
        assert_eq!(el.image_offset(), Some(Vec2::new(7.0, -3.0)));
        assert_eq!((el.x, el.y), (0.0, 0.0));
        editor.pointer_up();
        assert_eq!(editor.history().len(), 2);

        editor.deselect();
        assert!(!editor.is_cropping());
    }

    #[test]
    fn test_hand_tool_pans_without_history() {
        let a = shape_at(0.0, 0.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        editor.key_down(&key(" ", Modifiers::NONE));

        assert!(editor.pointer_down_element(id, None, Point::new(10.0, 10.0), Modifiers::NONE));
        assert!(editor.pointer_move(Point::new(20.0, 15.0)));
        assert!(editor.pointer_up().is_none());
        assert_eq!(editor.viewport().pan, Vec2::new(10.0, 5.0));
        assert_eq!(editor.document().get(id).unwrap().x, 0.0);
        assert_eq!(editor.history().len(), 1);

        editor.key_up(&key(" ", Modifiers::NONE));
        assert_eq!(editor.tools().effective(), ToolKind::Move);
    }

    #[test]
    fn test_pointer_down_resolves_target() {
        let a = shape_at(0.0, 0.0, 100.0, 100.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);

        assert_eq!(
            editor.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE),
            PointerTarget::Element(id, None)
        );
        assert_eq!(editor.interaction_mode(), InteractionMode::Dragging);
        editor.pointer_up();

        assert_eq!(
            editor.pointer_down(Point::new(101.0, 101.0), Modifiers::NONE),
            PointerTarget::Element(id, Some(ResizeHandle::BottomRight))
        );
        assert_eq!(
            editor.interaction_mode(),
            InteractionMode::Resizing(ResizeHandle::BottomRight)
        );
        editor.pointer_up();

        assert_eq!(
            editor.pointer_down(Point::new(300.0, 200.0), Modifiers::NONE),
            PointerTarget::Background
        );
        assert!(editor.selection().is_empty());
        assert_eq!(
            editor.pointer_down(Point::new(-50.0, 200.0), Modifiers::NONE),
            PointerTarget::Canvas
        );
    }

    #[test]
    fn test_wheel_zoom_is_coalesced() {
        let mut editor = Editor::default();
        assert_eq!(
            editor.wheel(Vec2::new(0.0, -50.0), Point::ZERO, ctrl()),
            WheelOutcome::FrameRequested
        );
        assert_eq!(
            editor.wheel(Vec2::new(0.0, -50.0), Point::ZERO, ctrl()),
            WheelOutcome::Coalesced
        );
        assert!(editor.flush_frame());
        assert!((editor.viewport().scale() - 1.5).abs() < 1e-9);
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_duplicate_and_delete_element() {
        let group = Uuid::new_v4();
        let a = shape_at(0.0, 0.0, 10.0, 10.0).in_group(group);
        let b = shape_at(20.0, 0.0, 10.0, 10.0).in_group(group);
        let a_id = a.id();
        let mut editor = editor_with(vec![a, b]);
        editor.select(a_id, false);

        assert!(editor.key_down(&key("d", ctrl())));
        assert_eq!(editor.document().len(), 4);
        let clones = editor.selection().ids().to_vec();
        assert_eq!(clones.len(), 2);
        let clone = editor.document().get(clones[0]).unwrap();
        assert_eq!(clone.x, 10.0);
        assert_ne!(clone.group_id, Some(group));

        assert!(editor.delete_element(clones[0]));
        assert_eq!(editor.document().len(), 2);
        assert!(editor.selection().is_empty());
        assert!(!editor.delete_element(Uuid::new_v4()));
    }

    #[test]
    fn test_ungroup_and_group_need_selection() {
        let a = shape_at(0.0, 0.0, 10.0, 10.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        assert!(editor.group_selected().is_none());
        assert!(!editor.ungroup_selected());
        editor.select(id, false);
        assert!(editor.group_selected().is_none());
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_switching_page_clears_selection() {
        let document = Document::new(vec![Page::new("p1", "One"), Page::new("p2", "Two")]);
        let mut editor = Editor::with_document(EditorConfig::default(), document);
        let id = editor.add_element(ElementType::Image, ElementPatch::default());
        assert!(editor.set_active_page("p2"));
        assert!(editor.selection().is_empty());
        assert!(!editor.set_active_page("p9"));

        // Elements of other pages are not interactable.
        assert!(!editor.pointer_down_element(id, None, Point::ZERO, Modifiers::NONE));
    }

    #[test]
    fn test_fit_view() {
        let mut editor = Editor::default();
        editor.fit_view(Size::new(1000.0, 800.0));
        // Spread is 420 wide, 297 high: the cap wins.
        assert!((editor.viewport().scale() - 1.2).abs() < 1e-9);
        editor.reset_view(Size::new(1000.0, 800.0));
        assert_eq!(editor.viewport().scale(), 1.0);
        assert_eq!(editor.viewport().pan, Vec2::new(290.0, 251.5));
    }

    #[test]
    fn test_arrow_release_during_drag_does_not_commit() {
        let a = shape_at(10.0, 10.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        editor.select(id, false);

        editor.key_down(&key("ArrowRight", Modifiers::NONE));
        assert_eq!(editor.document().get(id).unwrap().x, 11.0);
        assert!(editor.pointer_down_element(id, None, Point::ZERO, Modifiers::NONE));
        editor.pointer_move(Point::new(40.0, 0.0));

        assert!(!editor.key_up(&key("ArrowRight", Modifiers::NONE)));
        assert_eq!(editor.history().len(), 1);

        editor.pointer_move(Point::new(80.0, 0.0));
        editor.pointer_up();
        assert_eq!(editor.history().len(), 2);
        assert_eq!(editor.history().current()[0].x, 91.0);

        // The gesture's commit absorbed the nudge.
        assert!(!editor.key_up(&key("ArrowRight", Modifiers::NONE)));
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_nudge_is_ignored_during_gesture() {
        let a = shape_at(10.0, 10.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        editor.select(id, false);

        editor.pointer_down_element(id, None, Point::ZERO, Modifiers::NONE);
        editor.pointer_move(Point::new(5.0, 0.0));
        editor.key_down(&key("ArrowDown", shift()));
        assert_eq!(editor.document().get(id).unwrap().y, 10.0);
        assert!(!editor.nudge(Vec2::new(1.0, 0.0)));

        editor.pointer_up();
        assert!(!editor.key_up(&key("ArrowDown", Modifiers::NONE)));
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_any_commit_absorbs_pending_nudge() {
        let a = shape_at(10.0, 10.0, 50.0, 50.0);
        let id = a.id();
        let mut editor = editor_with(vec![a]);
        editor.select(id, false);

        editor.key_down(&key("ArrowLeft", Modifiers::NONE));
        assert!(editor.key_down(&key("d", ctrl())));
        assert_eq!(editor.history().len(), 2);
        assert_eq!(editor.history().current().len(), 2);
        assert_eq!(editor.history().current()[0].x, 9.0);

        assert!(!editor.key_up(&key("ArrowLeft", Modifiers::NONE)));
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_element_deleted_mid_drag_is_skipped() {
        let a = shape_at(0.0, 0.0, 10.0, 10.0);
        let b = shape_at(100.0, 0.0, 10.0, 10.0);
        let (a_id, b_id) = (a.id(), b.id());
        let mut editor = editor_with(vec![a, b]);
        editor.select(a_id, false);
        editor.select(b_id, true);

        assert!(editor.pointer_down_element(b_id, None, Point::ZERO, Modifiers::NONE));
        editor.pointer_move(Point::new(5.0, 0.0));
        let before = editor.history().len();

        // Removed behind the gesture's back.
        editor.document.remove(&[a_id]);
        assert!(editor.pointer_move(Point::new(10.0, 0.0)));
        assert!(!editor.document().contains(a_id));
        assert_eq!(editor.document().get(b_id).unwrap().x, 110.0);

        let end = editor.pointer_up().unwrap();
        assert_eq!(end.mode, InteractionMode::Dragging);
        assert_eq!(editor.history().len(), before + 1);
        let committed = editor.history().current();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].x, 110.0);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = EditorConfig {
            grid_size: 0.0,
            min_scale: 0.0,
            ..EditorConfig::default()
        };
        let editor = Editor::new(config.clone());
        assert_eq!(editor.config(), &EditorConfig::default());
        assert_eq!(editor.grid().size, 5.0);

        let err = Editor::try_with_document(config, Document::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "grid_size", .. }));
        assert!(Editor::try_with_document(EditorConfig::default(), Document::default()).is_ok());
    }
}
