//! Tests for layout computation and the recompute gate.

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn terminal_layout(width: i32, height: i32, total_len: u64) -> Layout {
    Layout::compute(
        ViewportSize::new(width, height),
        CellMetrics::terminal(),
        total_len,
    )
}

// ===== address_digits =====

#[test]
fn address_digits_of_empty_data_is_one() {
    assert_eq!(address_digits(0), 1);
    assert_eq!(address_digits(1), 1);
}

#[test]
fn address_digits_grow_at_powers_of_ten() {
    assert_eq!(address_digits(9), 1);
    assert_eq!(address_digits(10), 2);
    assert_eq!(address_digits(99_999), 5);
    assert_eq!(address_digits(100_000), 6);
}

#[test]
fn address_digits_handle_64_bit_lengths() {
    assert_eq!(address_digits(u64::MAX), 20);
}

#[test]
fn format_address_pads_hex() {
    assert_eq!(format_address(0x1f, 4), "001f");
    assert_eq!(format_address(0, 1), "0");
    assert_eq!(format_address(0xabcdef, 4), "abcdef");
}

// ===== Layout::compute =====

#[test]
fn terminal_layout_for_80_columns() {
    let layout = terminal_layout(80, 24, 4096);
    assert_eq!(layout.address_digits, 4);
    assert_eq!(layout.address_width, 4);
    assert_eq!(layout.hex_x, 6);
    assert_eq!(layout.bytes_per_row, 20);
    assert_eq!(layout.hex_width, 49);
    assert_eq!(layout.ascii_x, 57);
    assert_eq!(layout.visible_rows, 24);
}

#[test]
fn ascii_column_fits_inside_viewport() {
    for width in 0..200 {
        let layout = terminal_layout(width, 10, 65_536);
        if layout.bytes_per_row > 0 {
            let ascii_end = layout.ascii_x + layout.bytes_per_row;
            assert!(
                ascii_end <= width,
                "width {width}: ASCII column ends at {ascii_end}"
            );
        }
    }
}

#[test]
fn pixel_layout_uses_glyph_gaps() {
    let layout = Layout::compute(
        ViewportSize::new(800, 600),
        CellMetrics::from_glyph(10, 20),
        1000,
    );
    assert_eq!(layout.hex_x, 60);
    assert_eq!(layout.bytes_per_row, 22);
    assert_eq!(layout.hex_width, 490);
    assert_eq!(layout.ascii_x, 570);
    assert_eq!(layout.row_height(), 30);
    assert_eq!(layout.visible_rows, 20);
}

#[test]
fn bytes_per_row_is_always_even() {
    for width in 0..300 {
        let layout = terminal_layout(width, 5, 1 << 20);
        assert_eq!(layout.bytes_per_row % 2, 0, "width {width}");
    }
}

#[test]
fn viewport_narrower_than_gutter_has_no_bytes() {
    let layout = terminal_layout(5, 24, 4096);
    assert_eq!(layout.bytes_per_row, 0);
    assert_eq!(layout.hex_width, 0);
    assert!(layout.is_degenerate());
    assert_eq!(layout.window_capacity(), 0);
    assert_eq!(layout.total_rows(4096), 0);
}

#[test]
fn negative_viewport_is_treated_as_empty() {
    let layout = terminal_layout(-10, -3, 100);
    assert_eq!(layout.bytes_per_row, 0);
    assert_eq!(layout.visible_rows, 0);
}

#[test]
fn zero_row_height_does_not_divide_by_zero() {
    let cell = CellMetrics {
        char_height: 0,
        line_gap: 0,
        ..CellMetrics::terminal()
    };
    let layout = Layout::compute(ViewportSize::new(80, 24), cell, 100);
    assert_eq!(layout.visible_rows, 0);
}

#[test]
fn zero_width_glyphs_do_not_divide_by_zero() {
    let cell = CellMetrics {
        char_width: 0,
        pair_gap: 0,
        ..CellMetrics::terminal()
    };
    let layout = Layout::compute(ViewportSize::new(80, 24), cell, 100);
    assert_eq!(layout.bytes_per_row, 0);
}

#[test]
fn total_rows_rounds_up() {
    let layout = terminal_layout(80, 24, 4096);
    assert_eq!(layout.total_rows(0), 0);
    assert_eq!(layout.total_rows(20), 1);
    assert_eq!(layout.total_rows(21), 2);
    assert_eq!(layout.total_rows(4096), 205);
}

#[test]
fn column_positions_include_pair_gaps() {
    let layout = terminal_layout(80, 24, 4096);
    assert_eq!(layout.hex_column_x(0), 6);
    assert_eq!(layout.hex_column_x(1), 8);
    assert_eq!(layout.hex_column_x(2), 11);
    assert_eq!(layout.hex_column_x(3), 13);
    assert_eq!(layout.hex_column_x(4), 16);
    assert_eq!(layout.ascii_column_x(3), 60);
    assert_eq!(layout.row_y(5), 5);
}

// ===== LayoutEngine =====

#[test]
fn engine_starts_degenerate() {
    let engine = LayoutEngine::new(CellMetrics::terminal());
    assert!(engine.layout().is_degenerate());
}

#[test]
fn recompute_returns_new_layout_on_first_size() {
    let mut engine = LayoutEngine::new(CellMetrics::terminal());
    let layout = engine
        .recompute(ViewportSize::new(80, 24), 4096)
        .copied()
        .expect("first real size changes geometry");
    assert_eq!(layout.bytes_per_row, 20);
    assert_eq!(*engine.layout(), layout);
}

#[test]
fn recompute_skips_unchanged_size() {
    let mut engine = LayoutEngine::new(CellMetrics::terminal());
    assert!(engine.recompute(ViewportSize::new(80, 24), 4096).is_some());
    assert!(engine.recompute(ViewportSize::new(80, 24), 4096).is_none());
}

#[test]
fn recompute_skips_size_change_without_geometry_change() {
    let mut engine = LayoutEngine::new(CellMetrics::from_glyph(10, 20));
    assert!(engine.recompute(ViewportSize::new(800, 600), 1000).is_some());
    // 610 / 30 still gives 20 rows; 801 still gives 22 bytes per row.
    assert!(engine.recompute(ViewportSize::new(801, 610), 1000).is_none());
}

#[test]
fn metrics_listener_fires_once_per_change() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = LayoutEngine::new(CellMetrics::terminal());
    let sink = Rc::clone(&events);
    engine.on_metrics_changed(move |layout| sink.borrow_mut().push(layout.bytes_per_row));

    engine.recompute(ViewportSize::new(80, 24), 4096);
    engine.recompute(ViewportSize::new(80, 24), 4096);
    engine.recompute(ViewportSize::new(40, 24), 4096);

    assert_eq!(*events.borrow(), vec![20, 8]);
}

#[test]
fn removed_metrics_listener_is_silent() {
    let calls = Rc::new(RefCell::new(0));
    let mut engine = LayoutEngine::new(CellMetrics::terminal());
    let counter = Rc::clone(&calls);
    let id = engine.on_metrics_changed(move |_| *counter.borrow_mut() += 1);

    assert!(engine.remove_metrics_listener(id));
    engine.recompute(ViewportSize::new(80, 24), 4096);

    assert_eq!(*calls.borrow(), 0);
}
