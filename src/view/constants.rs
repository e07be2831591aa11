//! Layout dimension constants for TUI rendering.

/// Height of the status bar in lines.
///
/// Single line at the bottom of the screen for the hovered position and value.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the scrollbar column at the right edge.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Width in bytes of the value shown for the hovered byte.
pub const INSPECT_WIDTH: usize = 4;

/// Glyphs shown for a byte the source failed to deliver.
pub const UNKNOWN_HEX: &str = "??";

/// ASCII glyph for non-printable and unknown bytes.
pub const NON_PRINTABLE: char = '.';
