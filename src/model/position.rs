//! Byte position within the displayed window.

/// Where a byte sits, both in grid coordinates and in pixel space.
///
/// Produced by the address mapper; the range highlighter also builds synthetic
/// window-boundary positions for ranges that continue off-screen.
///
/// `(x, y)` is the top-left corner of the byte's first hex glyph cell.
///
/// # Field widths
/// - `index` / `total_row`: 64-bit, data may exceed the 32-bit range
/// - `x`, `y`, `column`, `row`: 32-bit, bounded by the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BytePosition {
    /// Absolute byte index in the data source.
    pub index: u64,
    /// Pixel x of the first hex glyph.
    pub x: i32,
    /// Pixel y of the top of the row.
    pub y: i32,
    /// Byte column within the row (0-indexed).
    pub column: i32,
    /// Row relative to the first visible row.
    pub row: i32,
    /// Row relative to the start of the data.
    pub total_row: u64,
}

impl std::fmt::Display for BytePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} @ {}:{} [col/row: {}/{}]",
            self.index, self.x, self.y, self.column, self.row
        )
    }
}
