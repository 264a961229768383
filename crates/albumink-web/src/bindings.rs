//! `wasm-bindgen` surface driven by the browser host.

use crate::marshal::{self, EditorState, GestureEndView, TargetView};
use albumink_core::{
    Document, Editor, EditorConfig, ElementPatch, ElementType, KeyInput, LayerDirection, PageSide, ResizeHandle,
    ShapeKind, TextTemplate, ToolKind, ViewMode, WheelOutcome,
};
use kurbo::{Point, Size, Vec2};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects instead of ES maps, so flattened structs read naturally.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Module start: panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already initialized");
    }
    log::info!("albumink engine loaded");
}

#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(marshal::parse_level(level).to_level_filter());
}

/// One editor instance, owned by the host canvas component.
#[wasm_bindgen]
pub struct WebEditor {
    editor: Editor,
}

#[wasm_bindgen]
impl WebEditor {
    /// Create an editor from an optional JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebEditor, JsValue> {
        let config = match config_json {
            Some(json) => EditorConfig::from_json(&json).map_err(js_error)?,
            None => EditorConfig::default(),
        };
        Ok(Self {
            editor: Editor::new(config),
        })
    }

    /// Replace the document with one seeded from JSON. History starts over.
    #[wasm_bindgen(js_name = loadDocument)]
    pub fn load_document(&mut self, json: &str) -> Result<(), JsValue> {
        let document = Document::from_json(json).map_err(js_error)?;
        self.editor.load_document(document);
        Ok(())
    }

    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        self.editor.document().to_json().map_err(js_error)
    }

    /// Element sequence in z-order, bottom first.
    pub fn elements(&self) -> Result<JsValue, JsValue> {
        to_js(&self.editor.document().elements())
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&EditorState::capture(&self.editor))
    }

    // --- Pointer ---

    /// Pointer-down on the canvas container; the engine resolves the target.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, shift: bool, ctrl: bool, alt: bool, meta: bool) -> Result<JsValue, JsValue> {
        let target = self
            .editor
            .pointer_down(Point::new(x, y), marshal::modifiers(shift, ctrl, alt, meta));
        to_js(&TargetView::from(target))
    }

    /// Pointer-down on an element rendered by the host, optionally on a handle.
    #[wasm_bindgen(js_name = pointerDownElement)]
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down_element(
        &mut self,
        id: &str,
        handle: Option<String>,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> Result<bool, JsValue> {
        let id = marshal::parse_id(id).map_err(js_error)?;
        let handle = handle
            .map(|tag| marshal::parse_tag::<ResizeHandle>("handle", &tag))
            .transpose()
            .map_err(js_error)?;
        Ok(self.editor.pointer_down_element(
            id,
            handle,
            Point::new(x, y),
            marshal::modifiers(shift, ctrl, alt, meta),
        ))
    }

    #[wasm_bindgen(js_name = pointerDownCanvas)]
    pub fn pointer_down_canvas(&mut self, x: f64, y: f64, on_background: bool) -> bool {
        self.editor.pointer_down_canvas(Point::new(x, y), on_background)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_move(Point::new(x, y))
    }

    /// Returns the finished gesture, or null.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<JsValue, JsValue> {
        match self.editor.pointer_up() {
            Some(end) => to_js(&GestureEndView::from(end)),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = doubleClick)]
    pub fn double_click(&mut self, id: &str) -> Result<bool, JsValue> {
        let id = marshal::parse_id(id).map_err(js_error)?;
        Ok(self.editor.double_click(id))
    }

    /// Wheel event. Returns true when the host should schedule an animation
    /// frame and call `flushFrame`.
    pub fn wheel(&mut self, dx: f64, dy: f64, x: f64, y: f64, ctrl: bool, meta: bool) -> bool {
        let modifiers = marshal::modifiers(false, ctrl, false, meta);
        let outcome = self.editor.wheel(Vec2::new(dx, dy), Point::new(x, y), modifiers);
        outcome == WheelOutcome::FrameRequested
    }

    #[wasm_bindgen(js_name = flushFrame)]
    pub fn flush_frame(&mut self) -> bool {
        self.editor.flush_frame()
    }

    // --- Keyboard ---

    #[wasm_bindgen(js_name = keyDown)]
    #[allow(clippy::too_many_arguments)]
    pub fn key_down(
        &mut self,
        key: &str,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
        repeat: bool,
        target_is_text_input: bool,
    ) -> bool {
        let modifiers = marshal::modifiers(shift, ctrl, alt, meta);
        match KeyInput::from_dom(key, modifiers, repeat, target_is_text_input) {
            Some(input) => self.editor.key_down(&input),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) -> bool {
        match KeyInput::from_dom(key, Default::default(), false, false) {
            Some(input) => self.editor.key_up(&input),
            None => false,
        }
    }

    // --- Mutation ---

    /// Apply a partial update from a property panel.
    #[wasm_bindgen(js_name = updateElement)]
    pub fn update_element(&mut self, id: &str, patch: JsValue, record_history: bool) -> Result<bool, JsValue> {
        let id = marshal::parse_id(id).map_err(js_error)?;
        let patch: ElementPatch = from_js(patch)?;
        Ok(self.editor.update_element(id, &patch, record_history))
    }

    /// Create an element; returns its id.
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, element_type: &str, defaults: JsValue) -> Result<String, JsValue> {
        let element_type: ElementType = marshal::parse_tag("element type", element_type).map_err(js_error)?;
        let defaults: ElementPatch = if defaults.is_undefined() || defaults.is_null() {
            ElementPatch::default()
        } else {
            from_js(defaults)?
        };
        Ok(self.editor.add_element(element_type, defaults).to_string())
    }

    #[wasm_bindgen(js_name = dropImage)]
    pub fn drop_image(&mut self, x: f64, y: f64, src: String) -> String {
        self.editor.drop_image(Point::new(x, y), src).to_string()
    }

    #[wasm_bindgen(js_name = dropTemplate)]
    pub fn drop_template(&mut self, x: f64, y: f64, template: JsValue) -> Result<String, JsValue> {
        let template: TextTemplate = from_js(template)?;
        Ok(self.editor.drop_template(Point::new(x, y), &template).to_string())
    }

    pub fn select(&mut self, id: &str, multi: bool) -> Result<(), JsValue> {
        let id = marshal::parse_id(id).map_err(js_error)?;
        self.editor.select(id, multi);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.editor.deselect();
    }

    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self) -> bool {
        self.editor.delete_selected()
    }

    #[wasm_bindgen(js_name = deleteElement)]
    pub fn delete_element(&mut self, id: &str) -> Result<bool, JsValue> {
        let id = marshal::parse_id(id).map_err(js_error)?;
        Ok(self.editor.delete_element(id))
    }

    pub fn duplicate(&mut self) -> usize {
        self.editor.duplicate_selected()
    }

    pub fn copy(&mut self) -> usize {
        self.editor.copy_selected()
    }

    pub fn paste(&mut self) -> usize {
        self.editor.paste()
    }

    /// Group the selection; returns the new group id.
    pub fn group(&mut self) -> Option<String> {
        self.editor.group_selected().map(|id| id.to_string())
    }

    pub fn ungroup(&mut self) -> bool {
        self.editor.ungroup_selected()
    }

    #[wasm_bindgen(js_name = moveLayer)]
    pub fn move_layer(&mut self, direction: &str) -> Result<bool, JsValue> {
        let direction: LayerDirection = marshal::parse_tag("layer direction", direction).map_err(js_error)?;
        Ok(self.editor.move_layer(direction))
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    pub fn escape(&mut self) -> bool {
        self.editor.escape()
    }

    #[wasm_bindgen(js_name = stopEditing)]
    pub fn stop_editing(&mut self) {
        self.editor.stop_editing();
    }

    // --- View state ---

    #[wasm_bindgen(js_name = setActivePage)]
    pub fn set_active_page(&mut self, page_id: &str) -> bool {
        self.editor.set_active_page(page_id)
    }

    #[wasm_bindgen(js_name = setViewMode)]
    pub fn set_view_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: ViewMode = marshal::parse_tag("view mode", mode).map_err(js_error)?;
        self.editor.set_view_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = setSide)]
    pub fn set_side(&mut self, side: &str) -> Result<(), JsValue> {
        let side: PageSide = marshal::parse_tag("page side", side).map_err(js_error)?;
        self.editor.set_side(side);
        Ok(())
    }

    #[wasm_bindgen(js_name = setTool)]
    pub fn set_tool(&mut self, tool: &str) -> Result<(), JsValue> {
        let tool: ToolKind = marshal::parse_tag("tool", tool).map_err(js_error)?;
        self.editor.set_tool(tool);
        Ok(())
    }

    #[wasm_bindgen(js_name = setShape)]
    pub fn set_shape(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind: ShapeKind = marshal::parse_tag("shape kind", kind).map_err(js_error)?;
        self.editor.set_shape(kind);
        Ok(())
    }

    #[wasm_bindgen(js_name = setCropMode)]
    pub fn set_crop_mode(&mut self, enabled: bool) {
        self.editor.set_crop_mode(enabled);
    }

    #[wasm_bindgen(js_name = toggleSnap)]
    pub fn toggle_snap(&mut self) -> bool {
        self.editor.grid_mut().toggle_snap()
    }

    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&mut self, scale: f64) {
        self.editor.viewport_mut().set_scale(scale);
    }

    #[wasm_bindgen(js_name = fitView)]
    pub fn fit_view(&mut self, width: f64, height: f64) {
        self.editor.fit_view(Size::new(width, height));
    }

    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&mut self, width: f64, height: f64) {
        self.editor.reset_view(Size::new(width, height));
    }

    /// Shortcut list for the help overlay, as `[keys, description]` pairs.
    pub fn shortcuts(&self) -> js_sys::Array {
        albumink_core::ShortcutRegistry::all()
            .iter()
            .map(|shortcut| {
                let pair = js_sys::Array::new();
                pair.push(&JsValue::from_str(&shortcut.format()));
                pair.push(&JsValue::from_str(shortcut.description));
                JsValue::from(pair)
            })
            .collect()
    }
}
