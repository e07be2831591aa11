//! Hover and selection markers driven by pointer events.

use super::marker::{marker_index, Marker, MarkerTone, RangeMarker};
use super::pointer::PointerEvent;
use tracing::debug;

/// Applies [`PointerEvent`]s to an optional hover marker and an optional
/// selection marker.
///
/// - hover moves the hover marker
/// - the first drag event starts a one-byte selection and hides the hover
/// - later drag events move the selection end
/// - a click clears the selection
#[derive(Debug, Default)]
pub struct SelectionController {
    hover: Option<RangeMarker>,
    selection: Option<RangeMarker>,
    dragging: bool,
}

impl SelectionController {
    /// Controller without markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with fresh hover and selection markers installed.
    pub fn with_default_markers() -> Self {
        let mut controller = Self::new();
        controller.set_hover_marker(Some(RangeMarker::new(MarkerTone::Hover)));
        controller.set_selection_marker(Some(RangeMarker::new(MarkerTone::Selection)));
        controller
    }

    /// Install a hover marker, switching it to single-byte mode.
    ///
    /// Both the old and the new marker are invalidated. Returns the old one.
    pub fn set_hover_marker(&mut self, marker: Option<RangeMarker>) -> Option<RangeMarker> {
        let marker = marker.map(|mut marker| {
            marker.set_single_byte(true);
            marker
        });
        replace_marker(&mut self.hover, marker)
    }

    /// Install a selection marker.
    ///
    /// Both the old and the new marker are invalidated. Returns the old one.
    pub fn set_selection_marker(&mut self, marker: Option<RangeMarker>) -> Option<RangeMarker> {
        replace_marker(&mut self.selection, marker)
    }

    /// The hover marker.
    pub fn hover(&self) -> Option<&RangeMarker> {
        self.hover.as_ref()
    }

    /// The hover marker, for registering listeners.
    pub fn hover_mut(&mut self) -> Option<&mut RangeMarker> {
        self.hover.as_mut()
    }

    /// The selection marker.
    pub fn selection(&self) -> Option<&RangeMarker> {
        self.selection.as_ref()
    }

    /// The selection marker, for registering listeners.
    pub fn selection_mut(&mut self) -> Option<&mut RangeMarker> {
        self.selection.as_mut()
    }

    /// Installed markers in paint order (selection below hover).
    pub fn markers(&self) -> impl Iterator<Item = &dyn Marker> {
        self.selection
            .iter()
            .chain(self.hover.iter())
            .map(|marker| marker as &dyn Marker)
    }

    /// True between the first and the final drag event.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply one pointer event.
    pub fn apply(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Hover(position) => {
                if let Some(hover) = &mut self.hover {
                    hover.set_start(marker_index(position.index));
                }
            }
            PointerEvent::Drag {
                position,
                still_dragging,
            } => {
                let index = marker_index(position.index);
                if self.dragging {
                    if let Some(selection) = &mut self.selection {
                        selection.set_end(index);
                    }
                } else {
                    debug!(index, "Selection started");
                    if let Some(selection) = &mut self.selection {
                        selection.set_start_end(index, index);
                    }
                    if let Some(hover) = &mut self.hover {
                        hover.invalidate();
                    }
                }
                self.dragging = still_dragging;
            }
            PointerEvent::Click(_) => {
                if let Some(selection) = &mut self.selection {
                    selection.invalidate();
                }
            }
        }
    }
}

fn replace_marker(
    slot: &mut Option<RangeMarker>,
    marker: Option<RangeMarker>,
) -> Option<RangeMarker> {
    let mut old = std::mem::replace(slot, marker);
    if let Some(old) = &mut old {
        old.invalidate();
    }
    if let Some(new) = slot {
        new.invalidate();
    }
    old
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
