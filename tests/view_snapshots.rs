//! Snapshot tests for the rendered hex screen
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.

use hexview::config::ResolvedConfig;
use hexview::source::MemorySource;
use hexview::view::TuiApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn render(data: &[u8], width: u16, height: u16) -> String {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let source = Box::new(MemorySource::new(data.to_vec()));
    let mut app = TuiApp::with_terminal(terminal, source, ResolvedConfig::default()).unwrap();
    app.draw().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

// ===== Snapshots =====

#[test]
fn text_rows_with_ascii_column() {
    let output = render(b"hexview renders only the visible window.", 60, 6);

    insta::assert_snapshot!(output, @r"
    00  6865 7876 6965 7720 7265 6e64 6572  hexview render
    0e  7320 6f6e 6c79 2074 6865 2076 6973  s only the vis
    1c  6962 6c65 2077 696e 646f 772e       ible window.
    offset 0x0 / 0x28
    ");
}

#[test]
fn binary_rows_use_dots_for_control_bytes() {
    let data: Vec<u8> = (0u8..16).collect();
    let output = render(&data, 40, 4);

    insta::assert_snapshot!(output, @r"
    00  0001 0203 0405 0607  ........
    08  0809 0a0b 0c0d 0e0f  ........
    offset 0x0 / 0x10
    ");
}
