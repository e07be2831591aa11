//! The hex widget core.
//!
//! [`HexView`] ties the data source, layout engine, scroll mapper and the
//! loaded byte window together. The shell drives it with resize and scroll
//! calls and queries it while painting; it never touches the terminal.

use super::address::WindowGeometry;
use super::highlighter::{compute_border, BorderGeometry};
use super::layout::{format_address, Layout, LayoutEngine};
use super::scroll::ScrollMapper;
use super::types::{CellMetrics, ViewportSize};
use crate::model::{BytePosition, ByteRange, ListenerId};
use crate::source::{read_padded, ByteWindow, DataSource, PaddedRead};
use tracing::debug;

/// One displayed row of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexRow<'a> {
    /// Window row.
    pub row: i32,
    /// Index of the first byte on the row.
    pub address: u64,
    /// Formatted address gutter text.
    pub label: String,
    /// Bytes on the row (fewer than `bytes_per_row` on the last data row).
    pub bytes: &'a [u8],
    /// How many leading entries of `bytes` the source actually delivered.
    pub known: usize,
}

/// Widget core: owns the source and all scroll/layout state.
#[derive(Debug)]
pub struct HexView {
    source: Box<dyn DataSource>,
    engine: LayoutEngine,
    scroll: ScrollMapper,
    window_offset: u64,
    window: ByteWindow,
}

impl HexView {
    /// Create a view over `source`. Nothing is visible until the first resize.
    pub fn new(source: Box<dyn DataSource>, cell: CellMetrics, tick_cap: u64) -> Self {
        Self {
            source,
            engine: LayoutEngine::new(cell),
            scroll: ScrollMapper::new(tick_cap),
            window_offset: 0,
            window: ByteWindow::default(),
        }
    }

    /// Total length of the source.
    pub fn total_len(&self) -> u64 {
        self.source.len()
    }

    /// Current layout.
    pub fn layout(&self) -> &Layout {
        self.engine.layout()
    }

    /// Scroll state.
    pub fn scroll(&self) -> &ScrollMapper {
        &self.scroll
    }

    /// Index of the first displayed byte.
    pub fn window_offset(&self) -> u64 {
        self.window_offset
    }

    /// Bytes currently loaded for display.
    pub fn window(&self) -> &ByteWindow {
        &self.window
    }

    /// Fixed-width read from the source, right-aligned when short.
    pub fn read_padded(&mut self, offset: u64, width: usize) -> PaddedRead {
        read_padded(self.source.as_mut(), offset, width)
    }

    /// Apply a new viewport size. Returns `true` if the geometry changed.
    ///
    /// A changed row width re-snaps the window offset to the new grid.
    pub fn resize(&mut self, viewport: ViewportSize) -> bool {
        let total_len = self.total_len();
        if self.engine.recompute(viewport, total_len).is_none() {
            return false;
        }
        let layout = *self.engine.layout();
        self.scroll
            .configure(layout.total_rows(total_len), layout.visible_rows.max(0) as u64);
        self.window_offset = self.snap(self.window_offset);
        self.sync_row();
        self.reload();
        true
    }

    /// Show the row containing byte `raw` at the top.
    ///
    /// `raw` is clamped to the data and snapped down to a row start.
    /// Returns `true` if the window moved.
    pub fn set_offset(&mut self, raw: u64) -> bool {
        let raw = raw.min(self.total_len().saturating_sub(1));
        let offset = self.snap(raw);
        let moved = self.move_window(offset);
        self.sync_row();
        moved
    }

    /// Show data row `row` at the top.
    pub fn set_line_offset(&mut self, row: u64) -> bool {
        let bytes_per_row = self.bytes_per_row();
        self.set_offset(row.saturating_mul(bytes_per_row))
    }

    /// Scroll by `steps` rows. Returns `true` if the window moved.
    pub fn wheel(&mut self, steps: i64) -> bool {
        if self.bytes_per_row() == 0 {
            return false;
        }
        let row = self.scroll.wheel(steps);
        self.move_to_row(row)
    }

    /// Scroll so `row` is at the top, clamped to the scrollable rows.
    pub fn scroll_to_row(&mut self, row: u64) -> bool {
        if self.bytes_per_row() == 0 {
            return false;
        }
        let row = self.scroll.scroll_to_row(row);
        self.move_to_row(row)
    }

    /// The user dragged the scrollbar to `tick`.
    pub fn drag_scrollbar(&mut self, tick: u64) -> bool {
        if self.bytes_per_row() == 0 {
            return false;
        }
        match self.scroll.drag_to_tick(tick) {
            Some(row) => self.move_to_row(row),
            None => false,
        }
    }

    /// Snapshot for byte ↔ pixel queries.
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::new(*self.engine.layout(), self.window_offset, self.total_len())
    }

    /// See [`WindowGeometry::position_from_index`].
    pub fn position_from_index(&self, index: u64) -> Option<BytePosition> {
        self.geometry().position_from_index(index)
    }

    /// See [`WindowGeometry::index_from_position`].
    pub fn index_from_position(&self, x: i32, y: i32) -> Option<u64> {
        self.geometry().index_from_position(x, y)
    }

    /// See [`WindowGeometry::position_from_point`].
    pub fn position_from_point(&self, x: i32, y: i32) -> Option<BytePosition> {
        self.geometry().position_from_point(x, y)
    }

    /// Border for `range` in the current window.
    pub fn border(&self, range: ByteRange) -> Option<BorderGeometry> {
        compute_border(range, &self.geometry())
    }

    /// Displayed rows, top to bottom.
    pub fn rows(&self) -> Vec<HexRow<'_>> {
        let layout = self.engine.layout();
        let bytes_per_row = layout.bytes_per_row.max(0) as usize;
        if bytes_per_row == 0 {
            return Vec::new();
        }
        let bytes = self.window.bytes();
        let known_end = bytes.len() - self.window.unknown_trailing();

        bytes
            .chunks(bytes_per_row)
            .enumerate()
            .map(|(row, chunk)| {
                let start = row * bytes_per_row;
                let address = self.window_offset + start as u64;
                HexRow {
                    row: row as i32,
                    address,
                    label: format_address(address, layout.address_digits),
                    bytes: chunk,
                    known: known_end.saturating_sub(start).min(chunk.len()),
                }
            })
            .collect()
    }

    /// Register a metrics-changed observer on the layout engine.
    pub fn on_metrics_changed(&mut self, listener: impl FnMut(&Layout) + 'static) -> ListenerId {
        self.engine.on_metrics_changed(listener)
    }

    /// Remove a metrics-changed observer.
    pub fn remove_metrics_listener(&mut self, id: ListenerId) -> bool {
        self.engine.remove_metrics_listener(id)
    }

    fn bytes_per_row(&self) -> u64 {
        self.engine.layout().bytes_per_row.max(0) as u64
    }

    /// Round `raw` down to a row start; unchanged while no row fits.
    fn snap(&self, raw: u64) -> u64 {
        let bytes_per_row = self.bytes_per_row();
        if bytes_per_row == 0 {
            raw
        } else {
            raw / bytes_per_row * bytes_per_row
        }
    }

    fn move_to_row(&mut self, row: u64) -> bool {
        let offset = row.saturating_mul(self.bytes_per_row());
        self.move_window(offset)
    }

    fn move_window(&mut self, offset: u64) -> bool {
        if offset == self.window_offset {
            return false;
        }
        debug!(from = self.window_offset, to = offset, "Window offset changed");
        self.window_offset = offset;
        self.reload();
        true
    }

    fn sync_row(&mut self) {
        let bytes_per_row = self.bytes_per_row();
        if bytes_per_row > 0 {
            self.scroll.follow_row(self.window_offset / bytes_per_row);
        }
    }

    fn reload(&mut self) {
        let capacity = usize::try_from(self.engine.layout().window_capacity()).unwrap_or(usize::MAX);
        self.window = ByteWindow::load(self.source.as_mut(), self.window_offset, capacity);
    }
}

#[cfg(test)]
#[path = "hex_view_tests.rs"]
mod tests;
