//! Property-based tests for addressing, marker and border invariants.
//!
//! Tests validate:
//! 1. Byte index → position → index round-trips for every visible byte
//! 2. The window offset is row aligned and contains the requested offset
//! 3. A single-byte marker keeps `start == end` through any setter sequence
//! 4. Border geometry does not depend on the direction of a range
//! 5. Degenerate viewports never resolve a position

use hexview::model::ByteRange;
use hexview::source::MemorySource;
use hexview::state::{MarkerTone, RangeMarker};
use hexview::view_state::{compute_border, CellMetrics, HexView, ViewportSize};
use proptest::prelude::*;

fn view(len: usize, width: i32, height: i32, cell: CellMetrics) -> HexView {
    let mut view = HexView::new(Box::new(MemorySource::new(vec![0xa5; len])), cell, 1000);
    view.resize(ViewportSize::new(width, height));
    view
}

fn cell_metrics() -> impl Strategy<Value = CellMetrics> {
    prop_oneof![
        Just(CellMetrics::terminal()),
        (4..12i32, 8..20i32).prop_map(|(w, h)| CellMetrics::from_glyph(w, h)),
    ]
}

// ===== Property 1: Position Round-Trip =====

proptest! {
    #[test]
    fn visible_index_round_trips(
        len in 1usize..20_000,
        width in 20i32..400,
        height in 1i32..80,
        offset in any::<u64>(),
        pick in any::<u64>(),
    ) {
        let mut view = view(len, width, height, CellMetrics::terminal());
        view.set_offset(offset % len as u64);

        let geometry = view.geometry();
        let end = geometry.window_end().min(len as u64);
        prop_assume!(geometry.window_offset < end);

        let index = geometry.window_offset + pick % (end - geometry.window_offset);
        let position = geometry.position_from_index(index).expect("visible byte");
        prop_assert_eq!(geometry.index_from_position(position.x, position.y), Some(index));
    }

    #[test]
    fn round_trip_holds_for_scaled_cells(
        cell in cell_metrics(),
        len in 1usize..5_000,
        width in 0i32..2_000,
        height in 0i32..1_000,
        pick in any::<u64>(),
    ) {
        let view = view(len, width, height, cell);
        let geometry = view.geometry();
        let end = geometry.window_end().min(len as u64);
        prop_assume!(end > 0 && geometry.layout.bytes_per_row > 0);

        let index = pick % end;
        let position = geometry.position_from_index(index).expect("visible byte");
        prop_assert_eq!(geometry.index_from_position(position.x, position.y), Some(index));
    }
}

// ===== Property 2: Window Alignment =====

proptest! {
    #[test]
    fn window_offset_is_row_aligned(
        len in 1usize..100_000,
        width in 20i32..400,
        raw in any::<u64>(),
    ) {
        let mut view = view(len, width, 24, CellMetrics::terminal());
        let bytes_per_row = view.layout().bytes_per_row as u64;
        prop_assume!(bytes_per_row > 0);

        let requested = raw % len as u64;
        view.set_offset(requested);
        let offset = view.window_offset();

        prop_assert_eq!(offset % bytes_per_row, 0);
        prop_assert!(offset <= requested);
        prop_assert!(requested < offset + bytes_per_row);
    }
}

// ===== Property 3: Single-Byte Marker =====

#[derive(Debug, Clone)]
enum Setter {
    Start(i64),
    End(i64),
    StartEnd(i64),
    Invalidate,
}

fn setter() -> impl Strategy<Value = Setter> {
    prop_oneof![
        (0..1_000_000i64).prop_map(Setter::Start),
        (0..1_000_000i64).prop_map(Setter::End),
        (0..1_000_000i64).prop_map(Setter::StartEnd),
        Just(Setter::Invalidate),
    ]
}

proptest! {
    #[test]
    fn single_byte_marker_stays_single(setters in prop::collection::vec(setter(), 0..32)) {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_single_byte(true);

        for setter in setters {
            match setter {
                Setter::Start(index) => marker.set_start(index),
                Setter::End(index) => marker.set_end(index),
                Setter::StartEnd(index) => marker.set_start_end(index, index),
                Setter::Invalidate => marker.invalidate(),
            }
            let range = hexview::state::Marker::range(&marker);
            prop_assert_eq!(range.start(), range.end());
        }
    }
}

// ===== Property 4: Range Normalization =====

proptest! {
    #[test]
    fn border_ignores_range_direction(
        a in 0i64..8_192,
        b in 0i64..8_192,
        offset in 0u64..8_192,
    ) {
        let mut view = view(8_192, 80, 24, CellMetrics::terminal());
        view.set_offset(offset);
        let geometry = view.geometry();

        prop_assert_eq!(
            compute_border(ByteRange::new(a, b), &geometry),
            compute_border(ByteRange::new(b, a), &geometry)
        );
    }
}

#[test]
fn border_of_reversed_literal_range_matches() {
    let view = view(4_096, 80, 24, CellMetrics::terminal());
    let geometry = view.geometry();
    assert_eq!(
        compute_border(ByteRange::new(50, 10), &geometry),
        compute_border(ByteRange::new(10, 50), &geometry)
    );
}

// ===== Property 5: Degenerate Viewport =====

proptest! {
    #[test]
    fn narrow_viewport_resolves_nothing(
        len in 1usize..100_000,
        width in -10i32..7,
        x in -100i32..1_000,
        y in -100i32..1_000,
        index in any::<u64>(),
    ) {
        // Any gutter is at least 1 digit + 2 gap; 6 columns cannot fit it plus a byte pair.
        let view = view(len, width, 24, CellMetrics::terminal());
        prop_assert_eq!(view.layout().bytes_per_row, 0);
        prop_assert_eq!(view.index_from_position(x, y), None);
        prop_assert_eq!(view.position_from_point(x, y), None);
        prop_assert_eq!(view.position_from_index(index % (len as u64 + 1)), None);
    }
}
