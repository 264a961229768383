//! Pointer gesture state machine: dragging, resizing, drawing and cropping.
//!
//! A gesture captures the pre-gesture geometry of the elements it affects.
//! Every pointer move recomputes their geometry from that snapshot and the
//! total pointer delta, so intermediate frames never compound.

use crate::elements::{Element, ElementId, ElementPatch};
use crate::geometry::document_delta;
use crate::snap::Grid;
use crate::tools::ToolKind;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum width and height a resize can produce.
pub const MIN_ELEMENT_SIZE: f64 = 10.0;
/// Handle hit radius in screen pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 8.0;

/// Corner resize handle of a selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
    ];

    /// Short tag used by hosts (`tl`, `tr`, `bl`, `br`).
    pub fn tag(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft => "tl",
            ResizeHandle::TopRight => "tr",
            ResizeHandle::BottomLeft => "bl",
            ResizeHandle::BottomRight => "br",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.tag() == tag)
    }

    /// Whether this handle drags the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::BottomLeft)
    }

    /// Whether this handle drags the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::TopRight)
    }

    /// Offset of this corner from the center of the unrotated box.
    fn corner_offset(self, bounds: Rect) -> Vec2 {
        let (hw, hh) = (bounds.width() / 2.0, bounds.height() / 2.0);
        let x = if self.moves_left() { -hw } else { hw };
        let y = if self.moves_top() { -hh } else { hh };
        Vec2::new(x, y)
    }
}

/// Document-space handle positions of an element, following its rotation.
pub fn handle_positions(element: &Element) -> [(ResizeHandle, Point); 4] {
    let bounds = element.bounds();
    let center = bounds.center();
    let (sin, cos) = element.rotation.to_radians().sin_cos();
    ResizeHandle::ALL.map(|handle| {
        let d = handle.corner_offset(bounds);
        (
            handle,
            Point::new(center.x + d.x * cos - d.y * sin, center.y + d.x * sin + d.y * cos),
        )
    })
}

/// Find the handle of `element` under a document point.
/// `tolerance` is in document units; divide screen pixels by the zoom.
pub fn hit_test_handles(element: &Element, point: Point, tolerance: f64) -> Option<ResizeHandle> {
    handle_positions(element)
        .into_iter()
        .find(|(_, pos)| (*pos - point).hypot2() <= tolerance * tolerance)
        .map(|(handle, _)| handle)
}

/// Active gesture kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "handle")]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeHandle),
    Drawing,
    Cropping,
}

impl InteractionMode {
    pub fn is_idle(self) -> bool {
        self == InteractionMode::Idle
    }
}

/// Pre-gesture geometry of one affected element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub image_x: Option<f64>,
    pub image_y: Option<f64>,
}

impl ElementSnapshot {
    pub fn capture(element: &Element) -> Self {
        let offset = element.image_offset();
        Self {
            id: element.id(),
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            image_x: offset.map(|o| o.x),
            image_y: offset.map(|o| o.y),
        }
    }
}

/// Result of the terminal transition back to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEnd {
    /// Mode the gesture was in.
    pub mode: InteractionMode,
    /// Tool the editor switched to as a result, if any.
    pub tool: Option<ToolKind>,
}

/// Transient state of the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    mode: InteractionMode,
    /// Screen-space pointer-down origin.
    start: Point,
    initial: Vec<ElementSnapshot>,
}

impl Interaction {
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        !self.mode.is_idle()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn snapshots(&self) -> &[ElementSnapshot] {
        &self.initial
    }

    /// Enter a gesture. An empty snapshot set leaves the machine idle.
    pub fn begin(&mut self, mode: InteractionMode, start: Point, initial: Vec<ElementSnapshot>) -> bool {
        if mode.is_idle() || initial.is_empty() {
            return false;
        }
        log::debug!("begin {:?} on {} element(s)", mode, initial.len());
        self.mode = mode;
        self.start = start;
        self.initial = initial;
        true
    }

    /// Leave the gesture, returning the mode it was in.
    pub fn finish(&mut self) -> InteractionMode {
        let mode = std::mem::take(&mut self.mode);
        self.initial.clear();
        mode
    }

    /// Per-frame updates for the pointer at `pointer` (screen space).
    pub fn frame_updates(&self, pointer: Point, scale: f64, grid: &Grid, min_size: f64) -> Vec<(ElementId, ElementPatch)> {
        let delta = document_delta(self.start, pointer, scale);
        log::trace!("{:?} delta ({:.2}, {:.2})", self.mode, delta.x, delta.y);
        self.initial
            .iter()
            .filter_map(|snapshot| {
                let patch = match self.mode {
                    InteractionMode::Idle => return None,
                    InteractionMode::Dragging => drag_update(snapshot, delta, grid),
                    InteractionMode::Resizing(handle) => resize_update(snapshot, handle, delta, grid, min_size),
                    InteractionMode::Drawing => draw_update(snapshot, delta, grid),
                    InteractionMode::Cropping => crop_update(snapshot, delta)?,
                };
                Some((snapshot.id, patch))
            })
            .collect()
    }
}

/// Move by the delta, then snap.
pub fn drag_update(initial: &ElementSnapshot, delta: Vec2, grid: &Grid) -> ElementPatch {
    ElementPatch::position(grid.apply(initial.x + delta.x), grid.apply(initial.y + delta.y))
}

/// Resize from a corner, keeping the opposite edges fixed.
///
/// Left and top edges clamp the movement itself so position and size stay
/// consistent; right and bottom edges clamp the resulting size.
pub fn resize_update(
    initial: &ElementSnapshot,
    handle: ResizeHandle,
    delta: Vec2,
    grid: &Grid,
    min_size: f64,
) -> ElementPatch {
    let (mut x, mut width) = (initial.x, initial.width);
    if handle.moves_left() {
        let diff = (initial.width - min_size).min(delta.x);
        x += diff;
        width -= diff;
    } else {
        width = (initial.width + delta.x).max(min_size);
    }

    let (mut y, mut height) = (initial.y, initial.height);
    if handle.moves_top() {
        let diff = (initial.height - min_size).min(delta.y);
        y += diff;
        height -= diff;
    } else {
        height = (initial.height + delta.y).max(min_size);
    }

    ElementPatch {
        x: Some(grid.apply(x)),
        y: Some(grid.apply(y)),
        width: Some(grid.apply(width)),
        height: Some(grid.apply(height)),
        ..ElementPatch::default()
    }
}

/// Stretch a freshly created element from its anchor in any diagonal direction.
pub fn draw_update(initial: &ElementSnapshot, delta: Vec2, grid: &Grid) -> ElementPatch {
    let x = if delta.x < 0.0 { initial.x + delta.x } else { initial.x };
    let y = if delta.y < 0.0 { initial.y + delta.y } else { initial.y };
    ElementPatch {
        x: Some(grid.apply(x)),
        y: Some(grid.apply(y)),
        width: Some(grid.apply(delta.x.abs())),
        height: Some(grid.apply(delta.y.abs())),
        ..ElementPatch::default()
    }
}

/// Pan the image inside its crop frame. Not snapped.
/// None for elements without an image offset.
pub fn crop_update(initial: &ElementSnapshot, delta: Vec2) -> Option<ElementPatch> {
    Some(ElementPatch::image_offset(
        initial.image_x? + delta.x,
        initial.image_y? + delta.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementKind, ElementType, ImageContent};

    fn snapshot(x: f64, y: f64, width: f64, height: f64) -> ElementSnapshot {
        let el = Element::new(ElementKind::default_for(ElementType::Shape), "p1")
            .at(x, y)
            .sized(width, height);
        ElementSnapshot::capture(&el)
    }

    #[test]
    fn test_drag_is_not_rounded_without_snap() {
        let grid = Grid::default();
        let patch = drag_update(&snapshot(10.0, 10.0, 50.0, 50.0), Vec2::new(11.5, -2.0), &grid);
        assert_eq!((patch.x, patch.y), (Some(21.5), Some(8.0)));
        assert_eq!(patch.width, None);
    }

    #[test]
    fn test_drag_snaps_result_not_delta() {
        let grid = Grid { snap: true, ..Grid::default() };
        let patch = drag_update(&snapshot(12.0, 0.0, 50.0, 50.0), Vec2::new(1.0, 2.4), &grid);
        assert_eq!((patch.x, patch.y), (Some(15.0), Some(0.0)));
    }

    #[test]
    fn test_resize_right_bottom_clamps_size() {
        let grid = Grid::default();
        let patch = resize_update(
            &snapshot(0.0, 0.0, 100.0, 80.0),
            ResizeHandle::BottomRight,
            Vec2::new(-500.0, 20.0),
            &grid,
            MIN_ELEMENT_SIZE,
        );
        assert_eq!(patch.width, Some(MIN_ELEMENT_SIZE));
        assert_eq!(patch.height, Some(100.0));
        assert_eq!((patch.x, patch.y), (Some(0.0), Some(0.0)));
    }

    #[test]
    fn test_resize_left_top_keeps_opposite_edge() {
        let grid = Grid::default();
        let initial = snapshot(40.0, 30.0, 100.0, 80.0);
        for dx in [-60.0, -1.0, 0.0, 35.0, 89.0, 90.0, 91.0, 400.0] {
            for dy in [-20.0, 0.0, 69.0, 71.0, 300.0] {
                let patch = resize_update(&initial, ResizeHandle::TopLeft, Vec2::new(dx, dy), &grid, MIN_ELEMENT_SIZE);
                let (x, w) = (patch.x.unwrap(), patch.width.unwrap());
                let (y, h) = (patch.y.unwrap(), patch.height.unwrap());
                assert!(w >= MIN_ELEMENT_SIZE && h >= MIN_ELEMENT_SIZE);
                assert!((x + w - 140.0).abs() < 1e-9);
                assert!((y + h - 110.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_resize_mixed_corners() {
        let grid = Grid::default();
        let initial = snapshot(0.0, 0.0, 100.0, 100.0);
        let tr = resize_update(&initial, ResizeHandle::TopRight, Vec2::new(20.0, 30.0), &grid, MIN_ELEMENT_SIZE);
        assert_eq!((tr.x, tr.y, tr.width, tr.height), (Some(0.0), Some(30.0), Some(120.0), Some(70.0)));

        let bl = resize_update(&initial, ResizeHandle::BottomLeft, Vec2::new(20.0, 30.0), &grid, MIN_ELEMENT_SIZE);
        assert_eq!((bl.x, bl.y, bl.width, bl.height), (Some(20.0), Some(0.0), Some(80.0), Some(130.0)));
    }

    #[test]
    fn test_draw_in_every_direction() {
        let grid = Grid::default();
        let anchor = snapshot(100.0, 100.0, 0.0, 0.0);

        let patch = draw_update(&anchor, Vec2::new(30.0, 20.0), &grid);
        assert_eq!((patch.x, patch.y, patch.width, patch.height), (Some(100.0), Some(100.0), Some(30.0), Some(20.0)));

        let patch = draw_update(&anchor, Vec2::new(-30.0, -20.0), &grid);
        assert_eq!((patch.x, patch.y, patch.width, patch.height), (Some(70.0), Some(80.0), Some(30.0), Some(20.0)));

        let patch = draw_update(&anchor, Vec2::new(-30.0, 20.0), &grid);
        assert_eq!((patch.x, patch.y), (Some(70.0), Some(100.0)));
    }

    #[test]
    fn test_crop_moves_only_image_offset() {
        let grid = Grid { snap: true, ..Grid::default() };
        let image = Element::new(ElementKind::Image(ImageContent::new("a.jpg")), "p1").at(10.0, 10.0);
        let mut interaction = Interaction::default();
        assert!(interaction.begin(InteractionMode::Cropping, Point::ZERO, vec![ElementSnapshot::capture(&image)]));

        let updates = interaction.frame_updates(Point::new(3.0, 7.0), 2.0, &grid, MIN_ELEMENT_SIZE);
        assert_eq!(updates.len(), 1);
        let patch = &updates[0].1;
        assert_eq!((patch.image_x, patch.image_y), (Some(1.5), Some(3.5)));
        assert_eq!((patch.x, patch.width), (None, None));

        // Non-image snapshots are skipped.
        assert!(crop_update(&snapshot(0.0, 0.0, 10.0, 10.0), Vec2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_begin_requires_targets() {
        let mut interaction = Interaction::default();
        assert!(!interaction.begin(InteractionMode::Dragging, Point::ZERO, Vec::new()));
        assert!(!interaction.is_active());

        assert!(interaction.begin(InteractionMode::Dragging, Point::ZERO, vec![snapshot(0.0, 0.0, 1.0, 1.0)]));
        assert_eq!(interaction.finish(), InteractionMode::Dragging);
        assert!(!interaction.is_active());
        assert!(interaction.snapshots().is_empty());
    }

    #[test]
    fn test_handles() {
        let el = Element::new(ElementKind::default_for(ElementType::Shape), "p1")
            .at(0.0, 0.0)
            .sized(100.0, 50.0);
        assert_eq!(hit_test_handles(&el, Point::new(101.0, 49.0), 4.0), Some(ResizeHandle::BottomRight));
        assert_eq!(hit_test_handles(&el, Point::new(0.0, 0.0), 4.0), Some(ResizeHandle::TopLeft));
        assert_eq!(hit_test_handles(&el, Point::new(50.0, 25.0), 4.0), None);
        assert_eq!(ResizeHandle::from_tag("tr"), Some(ResizeHandle::TopRight));
        assert_eq!(ResizeHandle::from_tag("xx"), None);
    }
}
