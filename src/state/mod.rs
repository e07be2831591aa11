//! Interaction state (pure).
//!
//! Markers, pointer tracking and selection are plain state machines over
//! byte positions, testable without a terminal.

pub mod marker;
pub mod pointer;
pub mod selection;

// Re-export for convenience
pub use marker::{Marker, MarkerTone, RangeMarker};
pub use pointer::{PointerEvent, PointerTracker};
pub use selection::SelectionController;
