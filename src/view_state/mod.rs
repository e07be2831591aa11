//! View-state layer - layout, addressing, highlighting and scrolling
//!
//! Everything in this module is terminal-agnostic integer geometry. The
//! shell in [`crate::view`] paints what these types compute.
//!
//! # Module Structure
//!
//! - `types`: Cell metrics and viewport size
//! - `layout`: Layout - grid geometry, and LayoutEngine - memoised recompute
//! - `address`: WindowGeometry - byte index ↔ pixel mapping
//! - `highlighter`: BorderGeometry - range borders with open ends
//! - `scroll`: ScrollMapper - row ↔ scrollbar tick mapping
//! - `hex_view`: HexView - the widget core the shell drives

pub mod address;
pub mod hex_view;
pub mod highlighter;
pub mod layout;
pub mod scroll;
pub mod types;

pub use address::WindowGeometry;
pub use hex_view::{HexRow, HexView};
pub use highlighter::{compute_border, BorderGeometry, Point, RowSpan, Segment};
pub use layout::{Layout, LayoutEngine};
pub use scroll::{ScrollMapper, Scrollbar};
pub use types::{CellMetrics, ViewportSize};
