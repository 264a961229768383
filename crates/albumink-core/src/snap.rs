//! Grid snapping.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default grid size in document units (matches the visual grid).
pub const GRID_SIZE: f64 = 5.0;

/// Quantize a value to the grid when snapping is enabled.
///
/// Callers snap final coordinates and sizes, never raw pointer deltas, so
/// rounding error does not accumulate over a gesture.
pub fn snap_value(value: f64, grid_size: f64, enabled: bool) -> f64 {
    if !enabled {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Grid display and snapping settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Grid spacing in document units.
    pub size: f64,
    /// Whether coordinates snap to the grid.
    pub snap: bool,
    /// Whether the grid is drawn.
    pub visible: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            snap: false,
            visible: true,
        }
    }
}

impl Grid {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Snap a single value with these settings.
    pub fn apply(&self, value: f64) -> f64 {
        snap_value(value, self.size, self.snap)
    }

    /// Snap both coordinates of a point.
    pub fn apply_point(&self, point: Point) -> Point {
        Point::new(self.apply(point.x), self.apply(point.y))
    }

    /// Toggle snapping, returning the new state.
    pub fn toggle_snap(&mut self) -> bool {
        self.snap = !self.snap;
        self.snap
    }
}
