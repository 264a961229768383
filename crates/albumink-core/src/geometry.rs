//! Coordinate transforms between screen space and document space.
//!
//! Screen space is pointer position relative to the canvas container.
//! Document space is the fixed coordinate system of the spread.

use crate::pages::PageLayout;
use crate::snap::Grid;
use kurbo::{Point, Vec2};

/// Convert a screen point to document coordinates.
pub fn to_document_space(screen: Point, pan: Vec2, scale: f64) -> Point {
    Point::new((screen.x - pan.x) / scale, (screen.y - pan.y) / scale)
}

/// Convert a document point to screen coordinates.
pub fn to_screen_space(doc: Point, pan: Vec2, scale: f64) -> Point {
    Point::new(doc.x * scale + pan.x, doc.y * scale + pan.y)
}

/// Convert a screen-space pointer delta into a document-space delta.
pub fn document_delta(from: Point, to: Point, scale: f64) -> Vec2 {
    Vec2::new((to.x - from.x) / scale, (to.y - from.y) / scale)
}

/// Full placement pipeline for pointer-originated positions (click-to-create, drops).
///
/// Converts to document space, snaps, then shifts by the page-side offset so
/// stored coordinates stay continuous across the spread.
pub fn place_point(screen: Point, pan: Vec2, scale: f64, grid: &Grid, layout: &PageLayout) -> Point {
    let doc = grid.apply_point(to_document_space(screen, pan, scale));
    Point::new(doc.x + layout.x_offset(), doc.y)
}

/// Document point under the pointer without snapping, used for hit testing.
pub fn hit_point(screen: Point, pan: Vec2, scale: f64, layout: &PageLayout) -> Point {
    let doc = to_document_space(screen, pan, scale);
    Point::new(doc.x + layout.x_offset(), doc.y)
}
