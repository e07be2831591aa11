//! Border geometry for highlighted byte ranges.
//!
//! A range on one row is a plain box. A range spanning several rows is drawn
//! as a bracket: the head row runs from the first byte to the right margin,
//! interior rows are full width, the tail row runs from the left margin to the
//! last byte. Only the head has a left stroke and only the tail a right
//! stroke, so interior cells are enclosed without being shaded.
//!
//! Ends that fall outside the visible window are pinned to the window corner
//! and left open (no vertical stroke), showing that the range continues
//! off-screen.

use super::address::WindowGeometry;
use crate::model::{BytePosition, ByteRange};

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal pixel.
    pub x: i32,
    /// Vertical pixel.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Start of the stroke.
    pub from: Point,
    /// End of the stroke.
    pub to: Point,
}

impl Segment {
    fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        Self {
            from: Point::new(from.0, from.1),
            to: Point::new(to.0, to.1),
        }
    }

    /// True for a stroke with constant x.
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x && self.from.y != self.to.y
    }
}

/// The part of a border that lies on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Window row.
    pub row: i32,
    /// Top pixel of the span.
    pub top: i32,
    /// Bottom pixel of the span.
    pub bottom: i32,
    /// Left pixel of the span.
    pub left: i32,
    /// Right pixel of the span.
    pub right: i32,
    /// First byte column covered.
    pub first_column: i32,
    /// Last byte column covered.
    pub last_column: i32,
    /// Whether a vertical stroke closes the left side.
    pub left_closed: bool,
    /// Whether a vertical stroke closes the right side.
    pub right_closed: bool,
}

impl RowSpan {
    fn segments_into(&self, out: &mut Vec<Segment>) {
        out.push(Segment::new((self.left, self.top), (self.right, self.top)));
        out.push(Segment::new((self.left, self.bottom), (self.right, self.bottom)));
        if self.left_closed {
            out.push(Segment::new((self.left, self.top), (self.left, self.bottom)));
        }
        if self.right_closed {
            out.push(Segment::new((self.right, self.top), (self.right, self.bottom)));
        }
    }
}

/// Border around a byte range, clipped to the visible window.
///
/// `spans` are ordered top to bottom; the first is the head and the last the
/// tail (the same span for single-row ranges).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGeometry {
    /// The range begins above the window.
    pub open_start: bool,
    /// The range ends below the window.
    pub open_end: bool,
    /// One span per covered window row.
    pub spans: Vec<RowSpan>,
}

impl BorderGeometry {
    /// True when the border is a single box.
    pub fn is_single_row(&self) -> bool {
        self.spans.len() == 1
    }

    /// All strokes to draw, in span order.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 2);
        for span in &self.spans {
            span.segments_into(&mut out);
        }
        out
    }
}

/// Compute the border for `range` in the current window.
///
/// Returns `None` for an unset range, a degenerate layout, or a range that
/// lies entirely outside the visible window or past the data end. A range
/// running past the data end is cut at the last byte.
pub fn compute_border(range: ByteRange, geometry: &WindowGeometry) -> Option<BorderGeometry> {
    let (lo, hi) = range.normalized()?;
    let layout = &geometry.layout;
    if layout.is_degenerate() || lo >= geometry.total_len {
        return None;
    }
    let hi = hi.min(geometry.total_len - 1);

    let window_start = geometry.window_offset;
    let window_end = geometry.window_end();
    if hi < window_start || lo >= window_end {
        return None;
    }

    let open_start = lo < window_start;
    let open_end = hi >= window_end;
    let start = endpoint(geometry, lo, open_start, WindowGeometry::top_left_sentinel)?;
    let end = endpoint(geometry, hi, open_end, WindowGeometry::bottom_right_sentinel)?;

    let char_width = layout.cell.char_width;
    let char_height = layout.cell.char_height;
    let last_column = layout.bytes_per_row - 1;
    let end_right = end.x + 2 * char_width;

    let span = |row: i32, left: i32, right: i32, columns: (i32, i32), closed: (bool, bool)| {
        let top = layout.row_y(row);
        RowSpan {
            row,
            top,
            bottom: top + char_height,
            left,
            right,
            first_column: columns.0,
            last_column: columns.1,
            left_closed: closed.0,
            right_closed: closed.1,
        }
    };

    let spans = if start.row == end.row {
        vec![span(
            start.row,
            start.x,
            end_right,
            (start.column, end.column),
            (!open_start, !open_end),
        )]
    } else {
        let mut spans = Vec::with_capacity((end.row - start.row + 1) as usize);
        spans.push(span(
            start.row,
            start.x,
            layout.hex_right(),
            (start.column, last_column),
            (!open_start, false),
        ));
        for row in start.row + 1..end.row {
            spans.push(span(
                row,
                layout.hex_x,
                layout.hex_right(),
                (0, last_column),
                (false, false),
            ));
        }
        spans.push(span(
            end.row,
            layout.hex_x,
            end_right,
            (0, end.column),
            (false, !open_end),
        ));
        spans
    };

    Some(BorderGeometry {
        open_start,
        open_end,
        spans,
    })
}

fn endpoint(
    geometry: &WindowGeometry,
    index: u64,
    open: bool,
    sentinel: fn(&WindowGeometry) -> BytePosition,
) -> Option<BytePosition> {
    if open {
        Some(sentinel(geometry))
    } else {
        geometry.position_from_index(index)
    }
}

#[cfg(test)]
#[path = "highlighter_tests.rs"]
mod tests;
