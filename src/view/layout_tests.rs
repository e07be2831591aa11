//! Tests for screen layout rendering.

use super::*;
use crate::source::MemorySource;
use crate::view_state::{CellMetrics, ViewportSize};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 25);
    Terminal::new(backend).unwrap()
}

fn create_view(len: usize, areas: &ScreenAreas) -> HexView {
    let data = (0..len).map(|i| (i % 256) as u8).collect();
    let mut view = HexView::new(
        Box::new(MemorySource::new(data)),
        CellMetrics::terminal(),
        1000,
    );
    view.resize(ViewportSize::new(
        i32::from(areas.pane.width),
        i32::from(areas.pane.height),
    ));
    view
}

fn render(view: &HexView, areas: &ScreenAreas, status: &str) -> ratatui::buffer::Buffer {
    let mut terminal = create_test_terminal();
    let selection = SelectionController::new();
    let styles = HexStyles::default();
    terminal
        .draw(|frame| render_layout(frame, areas, view, &selection, &styles, status))
        .unwrap();
    terminal.backend().buffer().clone()
}

// ===== Area Split Tests =====

#[test]
fn split_reserves_status_row_and_scrollbar_column() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 80, 25));

    assert_eq!(areas.pane, Rect::new(0, 0, 79, 24));
    assert_eq!(areas.scrollbar, Rect::new(79, 0, 1, 24));
    assert_eq!(areas.status, Rect::new(0, 24, 80, 1));
}

#[test]
fn split_tiny_frame_keeps_status_row() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 10, 1));

    assert_eq!(areas.pane.height, 0);
    assert_eq!(areas.status, Rect::new(0, 0, 10, 1));
}

// ===== Scrollbar Tick Tests =====

#[test]
fn tick_at_row_spans_scrollbar_range() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 80, 25));
    let view = create_view(4096, &areas);
    let scroll = view.scroll();
    assert_eq!(scroll.scrollbar().maximum(), 181);

    assert_eq!(tick_at_row(scroll, areas.scrollbar, 0), 0);
    assert_eq!(tick_at_row(scroll, areas.scrollbar, 12), 94);
    assert_eq!(tick_at_row(scroll, areas.scrollbar, 23), 181);
    assert_eq!(tick_at_row(scroll, areas.scrollbar, 40), 181);
}

#[test]
fn tick_at_row_single_cell_scrollbar_is_zero() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 80, 25));
    let view = create_view(4096, &areas);

    assert_eq!(tick_at_row(view.scroll(), Rect::new(79, 0, 1, 1), 0), 0);
}

// ===== Rendering Tests =====

#[test]
fn render_layout_draws_status_text() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 80, 25));
    let view = create_view(4096, &areas);
    let buffer = render(&view, &areas, "offset 0x0 / 0x1000");

    let status: String = (0..19).map(|x| buffer[(x, 24)].symbol()).collect();
    assert_eq!(status, "offset 0x0 / 0x1000");
}

#[test]
fn render_layout_draws_scrollbar_when_scrollable() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 80, 25));
    let view = create_view(4096, &areas);
    let buffer = render(&view, &areas, "");

    assert_ne!(buffer[(79, 0)].symbol(), " ");
}

#[test]
fn render_layout_hides_scrollbar_when_everything_fits() {
    let areas = ScreenAreas::split(Rect::new(0, 0, 80, 25));
    let view = create_view(100, &areas);
    let buffer = render(&view, &areas, "");

    assert!((0..24).all(|y| buffer[(79, y)].symbol() == " "));
}
