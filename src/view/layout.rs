//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into the hex pane, the scrollbar
//! column and the status bar, and renders each of them.

use super::constants::{SCROLLBAR_WIDTH, STATUS_BAR_HEIGHT};
use super::hex_pane::HexPane;
use super::styles::HexStyles;
use crate::state::SelectionController;
use crate::view_state::{HexView, ScrollMapper};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    /// Hex grid.
    pub pane: Rect,
    /// Scrollbar column right of the grid.
    pub scrollbar: Rect,
    /// Status bar at the bottom.
    pub status: Rect,
}

impl ScreenAreas {
    /// Split the frame area.
    pub fn split(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // Grid and scrollbar
                Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),                  // Hex grid
                Constraint::Length(SCROLLBAR_WIDTH), // Scrollbar
            ])
            .split(vertical_chunks[0]);

        Self {
            pane: horizontal_chunks[0],
            scrollbar: horizontal_chunks[1],
            status: vertical_chunks[1],
        }
    }
}

/// Render the hex pane, scrollbar and status bar.
pub fn render_layout(
    frame: &mut Frame,
    areas: &ScreenAreas,
    view: &HexView,
    selection: &SelectionController,
    styles: &HexStyles,
    status: &str,
) {
    frame.render_widget(HexPane::new(view, selection, styles), areas.pane);
    render_scrollbar(frame, areas.scrollbar, view.scroll());
    render_status_bar(frame, areas.status, status, styles);
}

/// Scrollbar tick for a click or drag on terminal row `row`.
///
/// The top cell maps to tick 0 and the bottom cell to the scrollbar maximum.
pub fn tick_at_row(scroll: &ScrollMapper, area: Rect, row: u16) -> u64 {
    let maximum = scroll.scrollbar().maximum();
    let last = u128::from(area.height.saturating_sub(1));
    if last == 0 {
        return 0;
    }
    let offset = u128::from(row.saturating_sub(area.y)).min(last);
    let tick = (u128::from(maximum) * offset + last / 2) / last;
    u64::try_from(tick).unwrap_or(maximum)
}

fn render_scrollbar(frame: &mut Frame, area: Rect, scroll: &ScrollMapper) {
    let scrollbar = scroll.scrollbar();
    if !scrollbar.is_enabled() {
        return;
    }
    let content_length = usize::try_from(scrollbar.maximum().saturating_add(1)).unwrap_or(usize::MAX);
    let position = usize::try_from(scrollbar.value()).unwrap_or(usize::MAX);
    let mut state = ScrollbarState::new(content_length).position(position);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut state,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, status: &str, styles: &HexStyles) {
    let paragraph = Paragraph::new(Line::from(status.to_string())).style(styles.status);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
