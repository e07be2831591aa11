//! Row ↔ scrollbar tick mapping.
//!
//! Data can have far more rows than a scrollbar can represent usefully, so
//! the scrollbar works in a bounded tick domain `0..=scroll_max` where
//! `scroll_max = min(total_scrollable_rows, tick_cap)`. Rows map to ticks and
//! back by rounded proportion.
//!
//! # Feedback
//!
//! When the user drags the scrollbar, its adjustment listener converts the
//! tick to a row. When the view scrolls for any other reason (wheel, keys),
//! the scrollbar is moved to the matching tick with that listener detached.
//! Otherwise a small wheel step on a huge file would round to the same tick,
//! map back to the old row and cancel the scroll.

use tracing::trace;

/// Default upper bound of the tick domain.
pub const DEFAULT_TICK_CAP: u64 = 1000;

/// `round(numerator / denominator)`, half up.
fn div_round(numerator: u128, denominator: u128) -> u128 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Tick for `row`. Returns 0 when nothing scrolls.
pub fn tick_from_row(row: u64, total_scrollable_rows: u64, scroll_max: u64) -> u64 {
    if total_scrollable_rows == 0 || scroll_max == 0 {
        return 0;
    }
    let row = row.min(total_scrollable_rows);
    div_round(
        scroll_max as u128 * row as u128,
        total_scrollable_rows as u128,
    ) as u64
}

/// Row for `tick`. Returns 0 when nothing scrolls.
pub fn row_from_tick(tick: u64, total_scrollable_rows: u64, scroll_max: u64) -> u64 {
    if total_scrollable_rows == 0 || scroll_max == 0 {
        return 0;
    }
    let tick = tick.min(scroll_max);
    div_round(
        total_scrollable_rows as u128 * tick as u128,
        scroll_max as u128,
    ) as u64
}

/// Model of the scrollbar widget's adjustment.
///
/// `set_value` reports the new tick only while the adjustment listener is
/// attached; that report is what drives the view during a user drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrollbar {
    value: u64,
    maximum: u64,
    listener_attached: bool,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self {
            value: 0,
            maximum: 0,
            listener_attached: true,
        }
    }
}

impl Scrollbar {
    /// Current tick.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Largest tick.
    pub fn maximum(&self) -> u64 {
        self.maximum
    }

    /// False when there is nothing to scroll.
    pub fn is_enabled(&self) -> bool {
        self.maximum > 0
    }

    /// Whether value changes are reported.
    pub fn is_listener_attached(&self) -> bool {
        self.listener_attached
    }

    /// Set the largest tick, clamping the value. Disabling pins the value to 0.
    pub fn set_maximum(&mut self, maximum: u64) {
        self.maximum = maximum;
        self.value = self.value.min(maximum);
    }

    /// Move to `tick` (clamped).
    ///
    /// Returns the new tick if it changed and the listener is attached.
    pub fn set_value(&mut self, tick: u64) -> Option<u64> {
        let tick = tick.min(self.maximum);
        if tick == self.value {
            return None;
        }
        self.value = tick;
        self.listener_attached.then_some(tick)
    }

    /// Stop reporting value changes.
    pub fn detach_listener(&mut self) {
        self.listener_attached = false;
    }

    /// Resume reporting value changes.
    pub fn attach_listener(&mut self) {
        self.listener_attached = true;
    }
}

/// Tracks the top row and keeps the scrollbar consistent with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollMapper {
    tick_cap: u64,
    total_scrollable_rows: u64,
    current_row: u64,
    scrollbar: Scrollbar,
}

impl Default for ScrollMapper {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_CAP)
    }
}

impl ScrollMapper {
    /// Create a mapper with the given tick cap (at least 1).
    pub fn new(tick_cap: u64) -> Self {
        Self {
            tick_cap: tick_cap.max(1),
            total_scrollable_rows: 0,
            current_row: 0,
            scrollbar: Scrollbar::default(),
        }
    }

    /// Upper bound of the tick domain.
    pub fn tick_cap(&self) -> u64 {
        self.tick_cap
    }

    /// Rows the top of the window can move through.
    pub fn total_scrollable_rows(&self) -> u64 {
        self.total_scrollable_rows
    }

    /// Largest scrollbar tick.
    pub fn scroll_max(&self) -> u64 {
        self.total_scrollable_rows.min(self.tick_cap)
    }

    /// Row shown at the top of the window.
    pub fn current_row(&self) -> u64 {
        self.current_row
    }

    /// The scrollbar model.
    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    /// Tick for `row` in the current domain.
    pub fn tick_from_row(&self, row: u64) -> u64 {
        tick_from_row(row, self.total_scrollable_rows, self.scroll_max())
    }

    /// Row for `tick` in the current domain.
    pub fn row_from_tick(&self, tick: u64) -> u64 {
        row_from_tick(tick, self.total_scrollable_rows, self.scroll_max())
    }

    /// Update the row domain after a layout or data change.
    ///
    /// The current row is kept; the scrollbar follows it into the new domain.
    pub fn configure(&mut self, total_rows: u64, visible_rows: u64) {
        self.total_scrollable_rows = total_rows.saturating_sub(visible_rows);
        self.scrollbar.set_maximum(self.scroll_max());
        self.sync_scrollbar();
    }

    /// Record a row set directly through the window offset.
    ///
    /// Unlike [`ScrollMapper::scroll_to_row`] the row is not clamped, so an
    /// offset near the end of the data keeps its partially filled window.
    pub fn follow_row(&mut self, row: u64) {
        self.current_row = row;
        self.sync_scrollbar();
    }

    /// The user moved the scrollbar to `tick`.
    ///
    /// Returns the new top row when the drag moved the view.
    pub fn drag_to_tick(&mut self, tick: u64) -> Option<u64> {
        let tick = self.scrollbar.set_value(tick)?;
        let row = self.row_from_tick(tick);
        trace!(tick, row, "Scrollbar drag");
        if row == self.current_row {
            return None;
        }
        self.current_row = row;
        Some(row)
    }

    /// Move by `steps` rows (negative is up). Returns the new row.
    ///
    /// Only the bound in the direction of motion applies: a row past the end
    /// (left by [`ScrollMapper::follow_row`]) never moves up on a step down.
    pub fn wheel(&mut self, steps: i64) -> u64 {
        let current = self.current_row;
        self.current_row = if steps < 0 {
            current.saturating_sub(steps.unsigned_abs())
        } else {
            current
                .saturating_add(steps as u64)
                .min(self.total_scrollable_rows)
                .max(current)
        };
        self.sync_scrollbar();
        self.current_row
    }

    /// Jump to `row`, clamped. Returns the new row.
    pub fn scroll_to_row(&mut self, row: u64) -> u64 {
        self.current_row = row.min(self.total_scrollable_rows);
        self.sync_scrollbar();
        self.current_row
    }

    /// Move the scrollbar to the current row without feeding it back.
    fn sync_scrollbar(&mut self) {
        let tick = self.tick_from_row(self.current_row);
        self.scrollbar.detach_listener();
        let _ = self.scrollbar.set_value(tick);
        self.scrollbar.attach_listener();
    }
}

#[cfg(test)]
#[path = "scroll_tests.rs"]
mod tests;
