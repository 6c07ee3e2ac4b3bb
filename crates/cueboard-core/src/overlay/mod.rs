//! Caption Overlay Positioning
//!
//! A pointer-driven state machine that places and sizes the caption overlay
//! over the video frame. The anchor is stored as frame-relative percentages
//! (horizontal center, distance from the bottom edge) so a placement stays
//! valid across rendered video sizes; the box size is stored in pixels.
//!
//! The host toolkit forwards raw pointer coordinates and the container
//! dimensions; this module owns no widget state and performs no drawing.
//! A rendering layer reads [`OverlayPositioner::anchor`] and
//! [`OverlayPositioner::size`] after each event and redraws.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Point2D, Size2D};

// =============================================================================
// Constants
// =============================================================================

/// Inclusive lower bound for each anchor axis, in percent. Keeps the
/// overlay clear of the frame edges.
pub const ANCHOR_MIN_PERCENT: f64 = 10.0;

/// Inclusive upper bound for each anchor axis, in percent.
pub const ANCHOR_MAX_PERCENT: f64 = 90.0;

/// Smallest overlay width the resize handle will produce, in pixels.
pub const MIN_OVERLAY_WIDTH: f64 = 48.0;

/// Smallest overlay height the resize handle will produce, in pixels.
pub const MIN_OVERLAY_HEIGHT: f64 = 24.0;

// =============================================================================
// Placement Models
// =============================================================================

/// Percentage-space reference point for the overlay: `x` is the horizontal
/// center, `y` the distance from the bottom edge of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayAnchor {
    /// X position as percentage (0-100) from the left
    pub x_percent: f64,
    /// Y position as percentage (0-100) from the bottom
    pub y_percent: f64,
}

impl OverlayAnchor {
    /// Converts to pixel space for the given container.
    ///
    /// The y axis flips: the anchor measures from the bottom edge while
    /// pixel space measures from the top.
    pub fn to_pixel(self, container: Size2D) -> Point2D {
        Point2D::new(
            self.x_percent / 100.0 * container.width,
            (100.0 - self.y_percent) / 100.0 * container.height,
        )
    }
}

impl Default for OverlayAnchor {
    fn default() -> Self {
        // Centered, just above the frame bottom
        Self {
            x_percent: 50.0,
            y_percent: 15.0,
        }
    }
}

/// Overlay box size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySize {
    pub width: f64,
    pub height: f64,
}

impl Default for OverlaySize {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 72.0,
        }
    }
}

/// Serializable placement snapshot, submitted by the host alongside edited
/// subtitle text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPlacement {
    pub anchor: OverlayAnchor,
    pub size: OverlaySize,
}

// =============================================================================
// Pointer Sessions
// =============================================================================

/// Where a pointer-down landed on the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The overlay body: starts a drag
    Body,
    /// The bottom-right resize grip: starts a resize
    ResizeHandle,
}

/// Ephemeral pointer session, created on pointer-down and destroyed on
/// pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
enum DragSession {
    /// Pointer-to-anchor offset captured at session start, so moves
    /// preserve the grab point instead of snapping the anchor to the
    /// pointer.
    Dragging { grab_offset: Point2D },
    /// Pointer position and overlay size captured at session start.
    Resizing {
        start_pointer: Point2D,
        start_size: OverlaySize,
    },
}

// =============================================================================
// Positioner
// =============================================================================

/// Pointer-interaction state machine for the caption overlay.
///
/// Three states: idle, dragging, resizing. Sessions are exclusive; only
/// pointer-up ends one, regardless of where the pointer is by then.
#[derive(Debug, Default)]
pub struct OverlayPositioner {
    anchor: OverlayAnchor,
    size: OverlaySize,
    session: Option<DragSession>,
}

impl OverlayPositioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a previously captured placement.
    pub fn with_placement(placement: OverlayPlacement) -> Self {
        Self {
            anchor: placement.anchor,
            size: placement.size,
            session: None,
        }
    }

    pub fn anchor(&self) -> OverlayAnchor {
        self.anchor
    }

    pub fn size(&self) -> OverlaySize {
        self.size
    }

    /// Current placement snapshot for the rendering layer or save payload.
    pub fn placement(&self) -> OverlayPlacement {
        OverlayPlacement {
            anchor: self.anchor,
            size: self.size,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Some(DragSession::Dragging { .. }))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.session, Some(DragSession::Resizing { .. }))
    }

    /// Starts a drag or resize session.
    ///
    /// Ignored while a session is already active: sessions are exclusive
    /// until the next pointer-up.
    pub fn pointer_down(&mut self, pointer: Point2D, target: PointerTarget, container: Size2D) {
        if self.session.is_some() {
            return;
        }

        self.session = Some(match target {
            PointerTarget::Body => {
                let anchor_px = self.anchor.to_pixel(container);
                debug!(?pointer, "drag session started");
                DragSession::Dragging {
                    grab_offset: Point2D::new(pointer.x - anchor_px.x, pointer.y - anchor_px.y),
                }
            }
            PointerTarget::ResizeHandle => {
                debug!(?pointer, "resize session started");
                DragSession::Resizing {
                    start_pointer: pointer,
                    start_size: self.size,
                }
            }
        });
    }

    /// Applies a pointer move to the active session.
    ///
    /// Moves outside a session are ignored, as are drag moves while the
    /// container has no measurable extent (the anchor is left unchanged
    /// rather than going non-finite).
    pub fn pointer_move(&mut self, pointer: Point2D, container: Size2D) {
        match self.session {
            None => {}
            Some(DragSession::Dragging { grab_offset }) => {
                if container.width <= 0.0 || container.height <= 0.0 {
                    return;
                }
                let anchor_px =
                    Point2D::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y);
                self.anchor = OverlayAnchor {
                    x_percent: (anchor_px.x / container.width * 100.0)
                        .clamp(ANCHOR_MIN_PERCENT, ANCHOR_MAX_PERCENT),
                    // Measured from the bottom edge, so pixel y inverts
                    y_percent: (100.0 - anchor_px.y / container.height * 100.0)
                        .clamp(ANCHOR_MIN_PERCENT, ANCHOR_MAX_PERCENT),
                };
            }
            Some(DragSession::Resizing {
                start_pointer,
                start_size,
            }) => {
                // Bottom-right grip: the box grows by the pointer delta
                // from session start, floored to keep dimensions sane.
                self.size = OverlaySize {
                    width: (start_size.width + (pointer.x - start_pointer.x))
                        .max(MIN_OVERLAY_WIDTH),
                    height: (start_size.height + (pointer.y - start_pointer.y))
                        .max(MIN_OVERLAY_HEIGHT),
                };
            }
        }
    }

    /// Ends any active session.
    ///
    /// Safe to call in any state; the pointer may be anywhere, including
    /// outside the container.
    pub fn pointer_up(&mut self) {
        if self.session.take().is_some() {
            debug!(anchor = ?self.anchor, size = ?self.size, "pointer session ended");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
