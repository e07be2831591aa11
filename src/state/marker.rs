//! Observable byte-range markers.
//!
//! A marker owns one [`ByteRange`] and tells its listeners whenever that
//! range visibly changes. The shell asks each marker for its border in the
//! current window and styles the cells by [`MarkerTone`].

use crate::model::{ByteRange, ListenerId, Listeners};
use crate::view_state::address::WindowGeometry;
use crate::view_state::highlighter::{compute_border, BorderGeometry};
use tracing::trace;

/// Which style the shell paints a marker with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerTone {
    /// Byte under the pointer.
    Hover,
    /// Range selected by dragging.
    Selection,
}

/// A renderable owner of a byte range.
pub trait Marker {
    /// The current range (possibly unset).
    fn range(&self) -> ByteRange;

    /// Paint style.
    fn tone(&self) -> MarkerTone;

    /// Register an update listener; it receives the new range.
    fn add_listener(&mut self, listener: Box<dyn FnMut(&ByteRange)>) -> ListenerId;

    /// Remove an update listener.
    fn remove_listener(&mut self, id: ListenerId) -> bool;

    /// Border of the range in the given window.
    fn border(&self, geometry: &WindowGeometry) -> Option<BorderGeometry> {
        compute_border(self.range(), geometry)
    }
}

/// Marker over a start/end pair, optionally locked to a single byte.
///
/// # Invariants
/// - The range is either unset or both ends are `>= 0`
/// - In single-byte mode `start == end` after every mutation
/// - Listeners run once per change of the range, never for no-ops
#[derive(Debug)]
pub struct RangeMarker {
    tone: MarkerTone,
    range: ByteRange,
    single_byte: bool,
    listeners: Listeners<ByteRange>,
}

impl RangeMarker {
    /// Create an unset marker.
    pub fn new(tone: MarkerTone) -> Self {
        Self {
            tone,
            range: ByteRange::INVALID,
            single_byte: false,
            listeners: Listeners::new(),
        }
    }

    /// True when the range is unset.
    pub fn is_invalid(&self) -> bool {
        self.range.is_invalid()
    }

    /// True in single-byte mode.
    pub fn is_single_byte(&self) -> bool {
        self.single_byte
    }

    /// Lock (or unlock) the marker to a single byte.
    ///
    /// Enabling collapses an existing multi-byte range onto its start.
    pub fn set_single_byte(&mut self, single_byte: bool) {
        self.single_byte = single_byte;
        if single_byte && !self.range.is_invalid() && self.range.start() != self.range.end() {
            self.replace(ByteRange::single(self.range.start()));
        }
    }

    /// Move the start.
    ///
    /// In single-byte mode, or when the range is unset, the end moves too.
    ///
    /// # Panics
    /// Panics if `index` is negative.
    pub fn set_start(&mut self, index: i64) {
        check_index(index);
        if index == self.range.start() {
            return;
        }
        let end = if self.single_byte || self.range.is_invalid() {
            index
        } else {
            self.range.end()
        };
        self.replace(ByteRange::new(index, end));
    }

    /// Move the end.
    ///
    /// In single-byte mode, or when the range is unset, the start moves too.
    ///
    /// # Panics
    /// Panics if `index` is negative.
    pub fn set_end(&mut self, index: i64) {
        check_index(index);
        if index == self.range.end() {
            return;
        }
        let start = if self.single_byte || self.range.is_invalid() {
            index
        } else {
            self.range.start()
        };
        self.replace(ByteRange::new(start, index));
    }

    /// Set both ends at once; listeners run at most once.
    ///
    /// # Panics
    /// Panics if either index is negative, or if `start != end` in
    /// single-byte mode.
    pub fn set_start_end(&mut self, start: i64, end: i64) {
        assert!(
            !self.single_byte || start == end,
            "single byte mode is active but start and end differ (start: {start}, end: {end})"
        );
        check_index(start);
        check_index(end);
        self.replace(ByteRange::new(start, end));
    }

    /// Unset the range.
    pub fn invalidate(&mut self) {
        self.replace(ByteRange::INVALID);
    }

    /// Register an update listener.
    pub fn on_update(&mut self, listener: impl FnMut(&ByteRange) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    fn replace(&mut self, range: ByteRange) {
        if range == self.range {
            return;
        }
        trace!(tone = ?self.tone, start = range.start(), end = range.end(), "Marker updated");
        self.range = range;
        self.listeners.notify(&range);
    }
}

impl Marker for RangeMarker {
    fn range(&self) -> ByteRange {
        self.range
    }

    fn tone(&self) -> MarkerTone {
        self.tone
    }

    fn add_listener(&mut self, listener: Box<dyn FnMut(&ByteRange)>) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

fn check_index(index: i64) {
    assert!(index >= 0, "negative byte index {index}; use invalidate() to unset");
}

/// Convert a byte index for the marker API.
pub(crate) fn marker_index(index: u64) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
