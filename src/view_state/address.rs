//! Byte index ↔ grid/pixel position mapping.
//!
//! Both directions are pure functions of a [`WindowGeometry`] snapshot.
//! Byte indices stay `u64` end to end; only values bounded by the viewport
//! (row, column, pixels) are narrowed to `i32`.

use super::layout::Layout;
use crate::model::BytePosition;
use tracing::trace;

/// Everything needed to map between bytes and pixels for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    /// Current grid layout.
    pub layout: Layout,
    /// Index of the first displayed byte.
    pub window_offset: u64,
    /// Total length of the data source.
    pub total_len: u64,
}

impl WindowGeometry {
    /// Create a snapshot.
    pub fn new(layout: Layout, window_offset: u64, total_len: u64) -> Self {
        Self {
            layout,
            window_offset,
            total_len,
        }
    }

    /// Exclusive end of the visible window (`window_offset + capacity`).
    pub fn window_end(&self) -> u64 {
        self.window_offset
            .saturating_add(self.layout.window_capacity())
    }

    /// True when `index` is inside the half-open visible window.
    pub fn is_visible(&self, index: u64) -> bool {
        self.layout.bytes_per_row > 0 && index >= self.window_offset && index < self.window_end()
    }

    /// Position of byte `index`, or `None` if it is not currently visible.
    ///
    /// # Panics
    /// Panics if `index > total_len`. Asking for a byte that does not exist
    /// is a caller bug, distinct from asking for one that is scrolled away.
    pub fn position_from_index(&self, index: u64) -> Option<BytePosition> {
        assert!(
            index <= self.total_len,
            "byte index {index} is beyond data length {}",
            self.total_len
        );
        if !self.is_visible(index) {
            return None;
        }

        let bytes_per_row = self.layout.bytes_per_row as u64;
        let relative = index - self.window_offset;
        // Both values are bounded by the window capacity, which fits in i32 rows/columns.
        let row = (relative / bytes_per_row) as i32;
        let column = (relative % bytes_per_row) as i32;

        Some(BytePosition {
            index,
            x: self.layout.hex_column_x(column),
            y: self.layout.row_y(row),
            column,
            row,
            total_row: index / bytes_per_row,
        })
    }

    /// Byte index under pixel `(x, y)`, or `None` if no byte is there.
    ///
    /// A point in the gap after a two-byte block resolves to the first byte
    /// of the next block.
    pub fn index_from_position(&self, x: i32, y: i32) -> Option<u64> {
        let layout = &self.layout;
        if layout.bytes_per_row == 0 || x < layout.hex_x || x >= layout.hex_right() || y < 0 {
            return None;
        }
        let row_height = layout.row_height();
        if row_height <= 0 {
            return None;
        }
        let row = y / row_height;
        if row >= layout.visible_rows {
            return None;
        }

        let char_width = layout.cell.char_width;
        let x_in_column = x - layout.hex_x;
        let block = x_in_column / layout.cell.pair_stride();
        let x_in_block = x_in_column - block * layout.cell.pair_stride();

        let column = if x_in_block < 4 * char_width {
            2 * block + x_in_block / (2 * char_width)
        } else {
            2 * (block + 1)
        };
        if column >= layout.bytes_per_row {
            return None;
        }

        let index = self.window_offset
            + row as u64 * layout.bytes_per_row as u64
            + column as u64;
        trace!(x, y, row, column, index, "Hit-test");

        (index < self.total_len).then_some(index)
    }

    /// Position of the byte under pixel `(x, y)`.
    pub fn position_from_point(&self, x: i32, y: i32) -> Option<BytePosition> {
        self.index_from_position(x, y)
            .and_then(|index| self.position_from_index(index))
    }

    /// Byte position pinned to the top-left cell of the window.
    ///
    /// Used for ranges that begin above the visible window.
    pub fn top_left_sentinel(&self) -> BytePosition {
        let bytes_per_row = self.layout.bytes_per_row.max(1) as u64;
        BytePosition {
            index: self.window_offset,
            x: self.layout.hex_x,
            y: 0,
            column: 0,
            row: 0,
            total_row: self.window_offset / bytes_per_row,
        }
    }

    /// Byte position pinned to the bottom-right cell of the window.
    ///
    /// Used for ranges that end below the visible window.
    pub fn bottom_right_sentinel(&self) -> BytePosition {
        let bytes_per_row = self.layout.bytes_per_row.max(1) as u64;
        let column = (self.layout.bytes_per_row - 1).max(0);
        let row = (self.layout.visible_rows - 1).max(0);
        let index = self.window_end().saturating_sub(1);
        BytePosition {
            index,
            x: self.layout.hex_column_x(column),
            y: self.layout.row_y(row),
            column,
            row,
            total_row: index / bytes_per_row,
        }
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
