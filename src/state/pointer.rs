//! Pointer input → hex selection events.
//!
//! [`PointerTracker`] turns raw pointer moves, presses, drags and releases
//! (in viewport pixels) into [`PointerEvent`]s carrying resolved byte
//! positions. Points that resolve to no byte produce no event.

use crate::model::BytePosition;
use crate::view_state::address::WindowGeometry;

/// Hex selection event delivered to the selection controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer rests over a (new) byte.
    Hover(BytePosition),
    /// Press and release without movement.
    Click(BytePosition),
    /// A drag passed over a byte. The final event of a drag has
    /// `still_dragging == false`.
    Drag {
        /// Byte under the pointer.
        position: BytePosition,
        /// False for the event that ends the drag.
        still_dragging: bool,
    },
}

/// Pointer state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerTracker {
    last_point: Option<(i32, i32)>,
    last_hover: Option<BytePosition>,
    button_down: bool,
    dragging: bool,
    last_drag: Option<BytePosition>,
}

impl PointerTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// True between the first drag motion and the release.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer moved with no button held.
    ///
    /// Fires `Hover` once per distinct position; leaving the hex column
    /// forgets the last one so re-entering the same byte fires again.
    pub fn moved(&mut self, geometry: &WindowGeometry, x: i32, y: i32) -> Option<PointerEvent> {
        self.last_point = Some((x, y));
        self.hover_at(geometry, x, y)
    }

    /// Button went down.
    pub fn pressed(&mut self, x: i32, y: i32) {
        self.last_point = Some((x, y));
        self.button_down = true;
        self.dragging = false;
        self.last_drag = None;
    }

    /// Pointer moved with the button held.
    pub fn dragged(&mut self, geometry: &WindowGeometry, x: i32, y: i32) -> Option<PointerEvent> {
        self.last_point = Some((x, y));
        if !self.dragging {
            self.dragging = true;
            self.last_hover = None;
        }
        let position = geometry.position_from_point(x, y)?;
        self.last_drag = Some(position);
        Some(PointerEvent::Drag {
            position,
            still_dragging: true,
        })
    }

    /// Button released.
    ///
    /// Ends a drag with a final `Drag` at the release point, falling back to
    /// the last dragged byte when the release point is off the grid. Without
    /// a drag the release is a `Click`.
    pub fn released(&mut self, geometry: &WindowGeometry, x: i32, y: i32) -> Option<PointerEvent> {
        self.last_point = Some((x, y));
        let was_down = std::mem::replace(&mut self.button_down, false);
        let at_release = geometry.position_from_point(x, y);

        if std::mem::replace(&mut self.dragging, false) {
            let position = at_release.or(self.last_drag.take())?;
            return Some(PointerEvent::Drag {
                position,
                still_dragging: false,
            });
        }
        if !was_down {
            return None;
        }
        at_release.map(PointerEvent::Click)
    }

    /// Re-resolve the last pointer point after the window moved under it.
    pub fn refresh_hover(&mut self, geometry: &WindowGeometry) -> Option<PointerEvent> {
        if self.button_down {
            return None;
        }
        let (x, y) = self.last_point?;
        self.hover_at(geometry, x, y)
    }

    /// Forget the pointer (it left the viewport).
    pub fn left(&mut self) {
        self.last_point = None;
        self.last_hover = None;
    }

    fn hover_at(&mut self, geometry: &WindowGeometry, x: i32, y: i32) -> Option<PointerEvent> {
        let Some(position) = geometry.position_from_point(x, y) else {
            self.last_hover = None;
            return None;
        };
        if self.last_hover == Some(position) {
            return None;
        }
        self.last_hover = Some(position);
        Some(PointerEvent::Hover(position))
    }
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod tests;
