//! Grid geometry derived from viewport size and cell metrics.
//!
//! Columns, left to right:
//!
//! ```text
//! | address | gap | hex pairs (4 glyphs + pair gap each) | gap | ASCII |
//! ```
//!
//! Everything here is integer arithmetic. `bytes_per_row` may be 0 when the
//! viewport cannot fit the gutter and one byte pair; downstream code treats
//! that as "nothing displayable".

use super::types::{CellMetrics, ViewportSize};
use crate::model::{ListenerId, Listeners};
use tracing::debug;

/// Derived layout of the hex grid.
///
/// # Invariants
/// - `bytes_per_row >= 0` and even
/// - `visible_rows >= 0`
/// - `hex_width == 0` when `bytes_per_row == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Cell metrics this layout was computed with.
    pub cell: CellMetrics,
    /// Bytes shown per row.
    pub bytes_per_row: i32,
    /// Rows that fit in the viewport (may exceed the rows of data).
    pub visible_rows: i32,
    /// Characters in the address gutter.
    pub address_digits: i32,
    /// Pixel width of the address gutter.
    pub address_width: i32,
    /// Left edge of the hex column.
    pub hex_x: i32,
    /// Pixel width of the hex column.
    pub hex_width: i32,
    /// Left edge of the ASCII column.
    pub ascii_x: i32,
}

impl Layout {
    /// Compute the layout for a viewport.
    pub fn compute(viewport: ViewportSize, cell: CellMetrics, total_len: u64) -> Self {
        let width = viewport.width.max(0);
        let height = viewport.height.max(0);

        let address_digits = address_digits(total_len);
        let address_width = address_digits * cell.char_width;
        let hex_x = address_width + cell.address_gap;

        // A byte pair costs four hex glyphs, the pair gap and two ASCII glyphs.
        let pair_cost = 6 * cell.char_width + cell.pair_gap;
        let bytes_per_row = if cell.char_width > 0 && pair_cost > 0 {
            ((width - hex_x - cell.hex_ascii_gap).max(0) / pair_cost) * 2
        } else {
            0
        };

        let hex_width = if bytes_per_row > 0 {
            bytes_per_row * 2 * cell.char_width + (bytes_per_row / 2 - 1) * cell.pair_gap
        } else {
            0
        };
        let ascii_x = hex_x + hex_width + cell.hex_ascii_gap;

        let row_height = cell.row_height();
        let visible_rows = if row_height > 0 { height / row_height } else { 0 };

        Self {
            cell,
            bytes_per_row,
            visible_rows,
            address_digits,
            address_width,
            hex_x,
            hex_width,
            ascii_x,
        }
    }

    /// Height of one row including the line gap.
    pub fn row_height(&self) -> i32 {
        self.cell.row_height()
    }

    /// Right edge (exclusive) of the hex column.
    pub fn hex_right(&self) -> i32 {
        self.hex_x + self.hex_width
    }

    /// True when no byte can be displayed.
    pub fn is_degenerate(&self) -> bool {
        self.bytes_per_row == 0 || self.visible_rows == 0
    }

    /// Bytes in a full window (`bytes_per_row * visible_rows`).
    pub fn window_capacity(&self) -> u64 {
        self.bytes_per_row.max(0) as u64 * self.visible_rows.max(0) as u64
    }

    /// Rows needed for `total_len` bytes (0 when `bytes_per_row == 0`).
    pub fn total_rows(&self, total_len: u64) -> u64 {
        if self.bytes_per_row <= 0 {
            return 0;
        }
        total_len.div_ceil(self.bytes_per_row as u64)
    }

    /// Left edge of the first hex glyph of byte `column`.
    pub fn hex_column_x(&self, column: i32) -> i32 {
        self.hex_x + column * 2 * self.cell.char_width + (column / 2) * self.cell.pair_gap
    }

    /// Left edge of the ASCII glyph of byte `column`.
    pub fn ascii_column_x(&self, column: i32) -> i32 {
        self.ascii_x + column * self.cell.char_width
    }

    /// Top edge of window row `row`.
    pub fn row_y(&self, row: i32) -> i32 {
        row * self.row_height()
    }
}

/// Characters needed for the largest address: `floor(log10(max(len, 1))) + 1`.
pub fn address_digits(total_len: u64) -> i32 {
    total_len.max(1).ilog10() as i32 + 1
}

/// Format an address for the gutter: hexadecimal, zero padded to `digits`.
pub fn format_address(address: u64, digits: i32) -> String {
    format!("{:0width$x}", address, width = digits.max(0) as usize)
}

/// Memoising layout calculator.
///
/// Recomputes only when the viewport size changes; cell metrics are fixed at
/// construction. Observers registered with [`LayoutEngine::on_metrics_changed`]
/// run once per recompute that changed the layout.
#[derive(Debug)]
pub struct LayoutEngine {
    cell: CellMetrics,
    layout: Layout,
    last_size: Option<ViewportSize>,
    listeners: Listeners<Layout>,
}

impl LayoutEngine {
    /// Create an engine; the initial layout is the empty one.
    pub fn new(cell: CellMetrics) -> Self {
        Self {
            cell,
            layout: Layout::compute(ViewportSize::default(), cell, 0),
            last_size: None,
            listeners: Listeners::new(),
        }
    }

    /// The current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Cell metrics the engine was built with.
    pub fn cell(&self) -> CellMetrics {
        self.cell
    }

    /// Recompute for a new viewport size.
    ///
    /// Returns the new layout if geometry changed, `None` when the size is
    /// unchanged since the last call or the derived layout is identical.
    pub fn recompute(&mut self, viewport: ViewportSize, total_len: u64) -> Option<&Layout> {
        if self.last_size == Some(viewport) {
            return None;
        }
        self.last_size = Some(viewport);

        let next = Layout::compute(viewport, self.cell, total_len);
        if next == self.layout {
            return None;
        }
        self.layout = next;

        debug!(
            width = viewport.width,
            height = viewport.height,
            bytes_per_row = next.bytes_per_row,
            visible_rows = next.visible_rows,
            "Layout recomputed"
        );

        self.listeners.notify(&next);
        Some(&self.layout)
    }

    /// Register a metrics-changed observer.
    pub fn on_metrics_changed(&mut self, listener: impl FnMut(&Layout) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Remove a metrics-changed observer.
    pub fn remove_metrics_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
