//! Tests for RangeMarker semantics.

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Marker plus a log of every range its listener saw.
fn observed(tone: MarkerTone) -> (RangeMarker, Rc<RefCell<Vec<ByteRange>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut marker = RangeMarker::new(tone);
    let sink = Rc::clone(&log);
    marker.on_update(move |range| sink.borrow_mut().push(*range));
    (marker, log)
}

mod setters {
    use super::*;

    #[test]
    fn new_marker_is_invalid() {
        let marker = RangeMarker::new(MarkerTone::Selection);
        assert!(marker.is_invalid());
        assert_eq!(marker.range(), ByteRange::INVALID);
        assert_eq!(marker.tone(), MarkerTone::Selection);
    }

    #[test]
    fn set_start_on_invalid_sets_both_ends() {
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        marker.set_start(7);
        assert_eq!(marker.range(), ByteRange::new(7, 7));
    }

    #[test]
    fn set_end_on_invalid_sets_both_ends() {
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        marker.set_end(9);
        assert_eq!(marker.range(), ByteRange::new(9, 9));
    }

    #[test]
    fn set_end_moves_only_end() {
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        marker.set_start_end(4, 4);
        marker.set_end(12);
        assert_eq!(marker.range(), ByteRange::new(4, 12));
        marker.set_start(2);
        assert_eq!(marker.range(), ByteRange::new(2, 12));
    }

    #[test]
    fn backwards_range_is_kept_as_set() {
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        marker.set_start_end(20, 20);
        marker.set_end(5);
        assert_eq!((marker.range().start(), marker.range().end()), (20, 5));
    }

    #[test]
    fn invalidate_unsets() {
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        marker.set_start_end(1, 3);
        marker.invalidate();
        assert!(marker.is_invalid());
    }

    #[test]
    #[should_panic(expected = "negative byte index")]
    fn negative_start_panics() {
        RangeMarker::new(MarkerTone::Selection).set_start(-1);
    }

    #[test]
    #[should_panic(expected = "negative byte index")]
    fn negative_end_panics() {
        RangeMarker::new(MarkerTone::Selection).set_end(-3);
    }
}

mod single_byte {
    use super::*;

    #[test]
    fn set_start_moves_both_ends() {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_single_byte(true);
        marker.set_start(5);
        marker.set_start(8);
        assert_eq!(marker.range(), ByteRange::single(8));
    }

    #[test]
    fn set_end_moves_both_ends() {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_single_byte(true);
        marker.set_start(5);
        marker.set_end(2);
        assert_eq!(marker.range(), ByteRange::single(2));
    }

    #[test]
    fn equal_ends_are_allowed() {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_single_byte(true);
        marker.set_start_end(3, 3);
        assert_eq!(marker.range(), ByteRange::single(3));
    }

    #[test]
    #[should_panic(expected = "single byte mode is active")]
    fn differing_ends_panic() {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_single_byte(true);
        marker.set_start_end(3, 4);
    }

    #[test]
    fn enabling_collapses_existing_range() {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_start_end(3, 9);
        marker.set_single_byte(true);
        assert!(marker.is_single_byte());
        assert_eq!(marker.range(), ByteRange::single(3));
    }

    #[test]
    fn disabling_keeps_range() {
        let mut marker = RangeMarker::new(MarkerTone::Hover);
        marker.set_single_byte(true);
        marker.set_start(6);
        marker.set_single_byte(false);
        marker.set_end(10);
        assert_eq!(marker.range(), ByteRange::new(6, 10));
    }
}

mod listeners {
    use super::*;

    #[test]
    fn fires_once_per_change() {
        let (mut marker, log) = observed(MarkerTone::Selection);
        marker.set_start(4);
        marker.set_end(9);
        marker.invalidate();
        assert_eq!(
            *log.borrow(),
            vec![ByteRange::new(4, 4), ByteRange::new(4, 9), ByteRange::INVALID]
        );
    }

    #[test]
    fn no_op_mutations_are_silent() {
        let (mut marker, log) = observed(MarkerTone::Selection);
        marker.invalidate();
        marker.set_start_end(2, 6);
        marker.set_start(2);
        marker.set_end(6);
        marker.set_start_end(2, 6);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn set_start_end_fires_once_for_both_ends() {
        let (mut marker, log) = observed(MarkerTone::Selection);
        marker.set_start_end(1, 2);
        marker.set_start_end(5, 8);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn boxed_listener_can_be_removed() {
        let calls = Rc::new(RefCell::new(0));
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        let counter = Rc::clone(&calls);
        let id = marker.add_listener(Box::new(move |_| *counter.borrow_mut() += 1));

        marker.set_start(1);
        assert!(marker.remove_listener(id));
        marker.set_start(2);

        assert_eq!(*calls.borrow(), 1);
        assert!(!marker.remove_listener(id));
    }
}

mod rendering {
    use super::*;
    use crate::view_state::layout::Layout;
    use crate::view_state::types::{CellMetrics, ViewportSize};

    #[test]
    fn border_follows_range() {
        let layout = Layout::compute(ViewportSize::new(80, 24), CellMetrics::terminal(), 4096);
        let geometry = WindowGeometry::new(layout, 0, 4096);
        let mut marker = RangeMarker::new(MarkerTone::Selection);
        assert_eq!(marker.border(&geometry), None);

        marker.set_start_end(3, 25);
        let border = marker.border(&geometry).unwrap();
        assert_eq!(border.spans.len(), 2);
    }

    #[test]
    fn marker_index_saturates() {
        assert_eq!(marker_index(42), 42);
        assert_eq!(marker_index(u64::MAX), i64::MAX);
    }
}
