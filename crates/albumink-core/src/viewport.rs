//! Viewport controller for pan/zoom.

use crate::config::EditorConfig;
use crate::geometry::{to_document_space, to_screen_space};
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Result of feeding a wheel event to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The viewport panned immediately.
    Panned,
    /// A zoom was queued and the host should schedule one animation frame
    /// that calls [`Viewport::flush_frame`].
    FrameRequested,
    /// A zoom was merged into the already-scheduled frame.
    Coalesced,
}

/// Zoom accumulated between animation frames.
#[derive(Debug, Clone, Copy)]
struct PendingZoom {
    delta: f64,
    anchor: Point,
}

/// Viewport manages the view transform for the canvas.
///
/// `pan` is a screen-space offset and `scale` maps document units to screen
/// pixels: `screen = doc * scale + pan`. Nothing here is part of the
/// undoable document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Current translation offset in screen pixels.
    pub pan: Vec2,
    scale: f64,
    /// Minimum allowed scale.
    pub min_scale: f64,
    /// Maximum allowed scale.
    pub max_scale: f64,
    wheel_zoom_step: f64,
    zoom_sensitivity: f64,
    zoom_epsilon: f64,
    #[serde(skip)]
    pending_zoom: Option<PendingZoom>,
    /// Last pointer position of an active hand-tool pan.
    #[serde(skip)]
    pan_anchor: Option<Point>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl Viewport {
    /// Create a viewport with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a viewport using the zoom limits and sensitivity of a config.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            wheel_zoom_step: config.wheel_zoom_step,
            zoom_sensitivity: config.zoom_sensitivity,
            zoom_epsilon: config.zoom_epsilon,
            pending_zoom: None,
            pan_anchor: None,
        }
    }

    /// Current scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale directly (zoom slider, reset). Not pointer-anchored.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = self.clamp_scale(scale);
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Get the affine transform for rendering (document to screen).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.scale)
    }

    /// Convert a screen point to document coordinates.
    pub fn to_document(&self, screen: Point) -> Point {
        to_document_space(screen, self.pan, self.scale)
    }

    /// Convert a document point to screen coordinates.
    pub fn to_screen(&self, doc: Point) -> Point {
        to_screen_space(doc, self.pan, self.scale)
    }

    /// Pan by a delta in screen coordinates.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Zoom to `new_scale`, keeping the document point under `anchor` fixed.
    pub fn zoom_at(&mut self, anchor: Point, new_scale: f64) {
        let new_scale = self.clamp_scale(new_scale);
        let ratio = new_scale / self.scale;
        self.pan = Vec2::new(
            anchor.x * (1.0 - ratio) + self.pan.x * ratio,
            anchor.y * (1.0 - ratio) + self.pan.y * ratio,
        );
        self.scale = new_scale;
    }

    /// Feed a wheel event.
    ///
    /// Without the zoom modifier the wheel pans 1:1 in screen space. With it,
    /// the zoom delta is accumulated until the next [`flush_frame`](Self::flush_frame).
    pub fn wheel(&mut self, delta: Vec2, anchor: Point, zoom_modifier: bool) -> WheelOutcome {
        if !zoom_modifier {
            self.pan -= delta;
            return WheelOutcome::Panned;
        }

        let step = -delta.y * self.wheel_zoom_step;
        match self.pending_zoom.as_mut() {
            Some(pending) => {
                pending.delta += step;
                pending.anchor = anchor;
                WheelOutcome::Coalesced
            }
            None => {
                self.pending_zoom = Some(PendingZoom { delta: step, anchor });
                WheelOutcome::FrameRequested
            }
        }
    }

    /// Whether a zoom is waiting for the next animation frame.
    pub fn has_pending_zoom(&self) -> bool {
        self.pending_zoom.is_some()
    }

    /// Apply the zoom accumulated since the last frame.
    /// Returns true if the view changed.
    pub fn flush_frame(&mut self) -> bool {
        let Some(pending) = self.pending_zoom.take() else {
            return false;
        };
        if pending.delta.abs() < self.zoom_epsilon {
            return false;
        }
        let new_scale = self.scale + pending.delta * self.zoom_sensitivity;
        log::trace!("wheel zoom {:.3} -> {:.3}", self.scale, self.clamp_scale(new_scale));
        self.zoom_at(pending.anchor, new_scale);
        true
    }

    /// Drop any queued zoom (e.g. when the host cancels its frame).
    pub fn cancel_frame(&mut self) {
        self.pending_zoom = None;
    }

    /// Fit `content` inside `container` with padding, capping the scale.
    pub fn fit(&mut self, container: Size, content: Size, padding: f64, max_scale: f64) {
        if content.width <= 0.0 || content.height <= 0.0 {
            return;
        }
        let scale_x = (container.width - padding * 2.0) / content.width;
        let scale_y = (container.height - padding * 2.0) / content.height;
        self.set_scale(scale_x.min(scale_y).min(max_scale));
        self.center(container, content);
    }

    /// Reset to 100% and center the content.
    pub fn reset(&mut self, container: Size, content: Size) {
        self.set_scale(1.0);
        self.center(container, content);
    }

    fn center(&mut self, container: Size, content: Size) {
        self.pan = Vec2::new(
            (container.width - content.width * self.scale) / 2.0,
            (container.height - content.height * self.scale) / 2.0,
        );
    }

    /// Start a hand-tool pan gesture.
    pub fn begin_pan(&mut self, pointer: Point) {
        self.pan_anchor = Some(pointer);
    }

    /// Continue a pan gesture. Returns false when no pan is active.
    pub fn pan_move(&mut self, pointer: Point) -> bool {
        let Some(last) = self.pan_anchor else {
            return false;
        };
        self.pan += pointer - last;
        self.pan_anchor = Some(pointer);
        true
    }

    /// End a pan gesture. Returns true if one was active.
    pub fn end_pan(&mut self) -> bool {
        self.pan_anchor.take().is_some()
    }

    /// Check if a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }
}
