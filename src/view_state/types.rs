//! Core geometry newtypes

/// Fixed glyph-cell geometry of the monospace font.
///
/// Assumed constant for the lifetime of a widget; only the viewport size
/// changes. All values are in pixels (or terminal cells for the TUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    /// Width of one glyph.
    pub char_width: i32,
    /// Height of one glyph.
    pub char_height: i32,
    /// Vertical space between two rows.
    pub line_gap: i32,
    /// Horizontal space after every two bytes in the hex column.
    pub pair_gap: i32,
    /// Space between the address gutter and the hex column.
    pub address_gap: i32,
    /// Space between the hex column and the ASCII column.
    pub hex_ascii_gap: i32,
}

impl CellMetrics {
    /// Derive the gaps from a pixel font's glyph size.
    ///
    /// Line gap is half a glyph height, the pair gap half a glyph width, and
    /// both column gaps two glyphs wide.
    pub fn from_glyph(char_width: i32, char_height: i32) -> Self {
        Self {
            char_width,
            char_height,
            line_gap: char_height / 2,
            pair_gap: char_width / 2,
            address_gap: 2 * char_width,
            hex_ascii_gap: 2 * char_width,
        }
    }

    /// One terminal cell per glyph, one blank cell between byte pairs.
    pub const fn terminal() -> Self {
        Self {
            char_width: 1,
            char_height: 1,
            line_gap: 0,
            pair_gap: 1,
            address_gap: 2,
            hex_ascii_gap: 2,
        }
    }

    /// Height of one row including the line gap.
    pub fn row_height(&self) -> i32 {
        self.char_height + self.line_gap
    }

    /// Width of one two-byte block in the hex column, including its trailing gap.
    pub fn pair_stride(&self) -> i32 {
        4 * self.char_width + self.pair_gap
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::terminal()
    }
}

/// Viewport dimensions in pixels.
///
/// Negative values can come out of a shell's arithmetic (borders subtracted
/// from a tiny window); layout treats them as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl ViewportSize {
    /// Create new viewport dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
