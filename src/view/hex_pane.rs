//! Hex pane widget.
//!
//! Paints the address gutter, hex column and ASCII column of a [`HexView`]
//! into a ratatui buffer, then overlays marker styling. Marker cells come
//! from the border spans: the hex cells between a span's left and right
//! edge, and the matching columns of the ASCII column.

use super::constants::{NON_PRINTABLE, UNKNOWN_HEX};
use super::styles::HexStyles;
use crate::state::{MarkerTone, SelectionController};
use crate::view_state::{BorderGeometry, HexView};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// Widget over one paint pass of a [`HexView`].
pub struct HexPane<'a> {
    view: &'a HexView,
    markers: Vec<(MarkerTone, BorderGeometry)>,
    styles: &'a HexStyles,
}

impl<'a> HexPane<'a> {
    /// Snapshot the view and the borders of all installed markers.
    pub fn new(view: &'a HexView, selection: &SelectionController, styles: &'a HexStyles) -> Self {
        let geometry = view.geometry();
        let markers = selection
            .markers()
            .filter_map(|marker| Some((marker.tone(), marker.border(&geometry)?)))
            .collect();
        Self {
            view,
            markers,
            styles,
        }
    }
}

impl Widget for HexPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.view.layout();
        let styles = self.styles;

        for row in self.view.rows() {
            let y = layout.row_y(row.row);
            put_str(buf, area, 0, y, &row.label, styles.address);

            for (i, byte) in row.bytes.iter().enumerate() {
                let column = i as i32;
                let hex_x = layout.hex_column_x(column);
                let ascii_x = layout.ascii_column_x(column);
                if i < row.known {
                    put_str(buf, area, hex_x, y, &format!("{byte:02x}"), styles.hex);
                    put_char(buf, area, ascii_x, y, printable(*byte), styles.ascii);
                } else {
                    put_str(buf, area, hex_x, y, UNKNOWN_HEX, styles.unknown);
                    put_char(buf, area, ascii_x, y, NON_PRINTABLE, styles.unknown);
                }
            }
        }

        for (tone, border) in &self.markers {
            let style = styles.for_tone(*tone);
            for span in &border.spans {
                style_run(buf, area, span.left, span.top, span.right - span.left, style);
                style_run(
                    buf,
                    area,
                    layout.ascii_column_x(span.first_column),
                    span.top,
                    span.last_column - span.first_column + 1,
                    style,
                );
            }
        }
    }
}

/// Glyph for the ASCII column.
pub fn printable(byte: u8) -> char {
    if (0x20..0x7f).contains(&byte) {
        byte as char
    } else {
        NON_PRINTABLE
    }
}

/// Buffer position of pane-relative `(x, y)`, if it is inside `area`.
fn cell_at(area: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= i32::from(area.width) || y >= i32::from(area.height) {
        return None;
    }
    Some((area.x + x as u16, area.y + y as u16))
}

fn put_char(buf: &mut Buffer, area: Rect, x: i32, y: i32, glyph: char, style: Style) {
    if let Some(cell) = cell_at(area, x, y).and_then(|position| buf.cell_mut(position)) {
        cell.set_char(glyph).set_style(style);
    }
}

fn put_str(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    for (i, glyph) in text.chars().enumerate() {
        put_char(buf, area, x + i as i32, y, glyph, style);
    }
}

fn style_run(buf: &mut Buffer, area: Rect, x: i32, y: i32, width: i32, style: Style) {
    for dx in 0..width.max(0) {
        if let Some(cell) = cell_at(area, x + dx, y).and_then(|position| buf.cell_mut(position)) {
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
#[path = "hex_pane_tests.rs"]
mod tests;
