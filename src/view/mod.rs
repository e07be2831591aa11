//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod hex_pane;
mod layout;
mod styles;

pub use hex_pane::{printable, HexPane};
pub use layout::{render_layout, tick_at_row, ScreenAreas};
pub use styles::{ColorConfig, HexStyles};

use crate::config::ResolvedConfig;
use crate::model::AppError;
use crate::source::DataSource;
use crate::state::{Marker, PointerEvent, PointerTracker, SelectionController};
use crate::view_state::{CellMetrics, HexView, ViewportSize};
use constants::INSPECT_WIDTH;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    view: HexView,
    tracker: PointerTracker,
    selection: SelectionController,
    styles: HexStyles,
    config: ResolvedConfig,
    /// True while the left button drags the scrollbar thumb.
    scrollbar_drag: bool,
    /// Areas of the last layout pass (for mouse routing)
    areas: ScreenAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture,
    /// then scrolls to the row containing `offset`.
    pub fn new(
        source: Box<dyn DataSource>,
        config: ResolvedConfig,
        offset: u64,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut app = Self::with_terminal(terminal, source, config)?;
        app.view.set_offset(offset);
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;
            if self.handle_event(event::read()?)? {
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application over an existing terminal.
    ///
    /// The view is sized to the terminal before this returns, so pointer
    /// events can be routed without an initial draw.
    pub fn with_terminal(
        terminal: Terminal<B>,
        source: Box<dyn DataSource>,
        config: ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let view = HexView::new(source, CellMetrics::terminal(), config.tick_cap);
        let mut app = Self {
            terminal,
            view,
            tracker: PointerTracker::new(),
            selection: SelectionController::with_default_markers(),
            styles: HexStyles::with_color_config(ColorConfig::from_config(&config)),
            config,
            scrollbar_drag: false,
            areas: ScreenAreas::default(),
        };
        app.sync_viewport()?;
        Ok(app)
    }

    /// The hex view.
    pub fn view(&self) -> &HexView {
        &self.view
    }

    /// Hover and selection markers.
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// The terminal, for buffer inspection.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Areas of the last layout pass.
    pub fn areas(&self) -> ScreenAreas {
        self.areas
    }

    /// Handle one terminal event.
    ///
    /// Returns true if app should quit
    pub fn handle_event(&mut self, event: Event) -> Result<bool, TuiError> {
        match event {
            Event::Key(key) => Ok(self.handle_key(key)),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Ok(false)
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.sync_viewport()?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.sync_viewport()?;
        let status = self.status_text();

        let Self {
            terminal,
            view,
            selection,
            styles,
            areas,
            ..
        } = self;
        terminal.draw(|frame| {
            render_layout(frame, areas, view, selection, styles, &status);
        })?;

        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let page = i64::from(self.view.layout().visible_rows)
            .saturating_sub(i64::from(self.config.page_overlap))
            .max(1);
        let moved = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.view.wheel(-1),
            KeyCode::Down | KeyCode::Char('j') => self.view.wheel(1),
            KeyCode::PageUp => self.view.wheel(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.view.wheel(page),
            KeyCode::Home | KeyCode::Char('g') => self.view.scroll_to_row(0),
            KeyCode::End | KeyCode::Char('G') => self.view.scroll_to_row(u64::MAX),
            _ => false,
        };
        if moved {
            self.refresh_hover();
        }
        false
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = Position::new(mouse.column, mouse.row);
        let in_pane = self.areas.pane.contains(point);
        let (x, y) = pane_point(self.areas.pane, point);
        let geometry = self.view.geometry();

        let event = match mouse.kind {
            MouseEventKind::Moved => {
                if in_pane {
                    self.tracker.moved(&geometry, x, y)
                } else {
                    self.pointer_left();
                    None
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.areas.scrollbar.contains(point) {
                    self.scrollbar_drag = true;
                    self.drag_scrollbar(point.y);
                } else {
                    self.tracker.pressed(x, y);
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.scrollbar_drag {
                    self.drag_scrollbar(point.y);
                    None
                } else {
                    self.tracker.dragged(&geometry, x, y)
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if std::mem::replace(&mut self.scrollbar_drag, false) {
                    None
                } else {
                    self.tracker.released(&geometry, x, y)
                }
            }
            MouseEventKind::ScrollUp => {
                self.wheel(-i64::from(self.config.wheel_step));
                None
            }
            MouseEventKind::ScrollDown => {
                self.wheel(i64::from(self.config.wheel_step));
                None
            }
            _ => None,
        };

        if let Some(event) = event {
            self.apply(event);
        }
    }

    fn wheel(&mut self, steps: i64) {
        if self.view.wheel(steps) {
            self.refresh_hover();
        }
    }

    fn drag_scrollbar(&mut self, row: u16) {
        let tick = tick_at_row(self.view.scroll(), self.areas.scrollbar, row);
        if self.view.drag_scrollbar(tick) {
            self.refresh_hover();
        }
    }

    fn refresh_hover(&mut self) {
        if let Some(event) = self.tracker.refresh_hover(&self.view.geometry()) {
            self.apply(event);
        }
    }

    fn pointer_left(&mut self) {
        self.tracker.left();
        if let Some(hover) = self.selection.hover_mut() {
            hover.invalidate();
        }
    }

    fn apply(&mut self, event: PointerEvent) {
        debug!(?event, "Pointer event");
        self.selection.apply(&event);
    }

    /// Lay out the frame and size the view to the hex pane.
    fn sync_viewport(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.areas = ScreenAreas::split(Rect::new(0, 0, size.width, size.height));
        let pane = self.areas.pane;
        if self
            .view
            .resize(ViewportSize::new(i32::from(pane.width), i32::from(pane.height)))
        {
            debug!(
                bytes_per_row = self.view.layout().bytes_per_row,
                visible_rows = self.view.layout().visible_rows,
                "Viewport resized"
            );
            self.refresh_hover();
        }
        Ok(())
    }

    /// Status bar text: hovered byte and value, then the selection.
    fn status_text(&mut self) -> String {
        let bytes_per_row = self.view.layout().bytes_per_row.max(0) as u64;
        let hovered = self
            .selection
            .hover()
            .and_then(|hover| hover.range().normalized())
            .map(|(index, _)| index);

        let mut text = match hovered {
            Some(index) if bytes_per_row > 0 => {
                let value = self.view.read_padded(index, INSPECT_WIDTH).be_value();
                format!(
                    "{} : {}  0x{value:08x}",
                    index / bytes_per_row,
                    index % bytes_per_row
                )
            }
            _ => format!(
                "offset 0x{:x} / 0x{:x}",
                self.view.window_offset(),
                self.view.total_len()
            ),
        };

        if let Some(range) = self.selection.selection().map(|selection| selection.range()) {
            if let Some((lo, hi)) = range.normalized() {
                text.push_str(&format!("  sel 0x{lo:x}..0x{hi:x} ({} bytes)", range.len()));
            }
        }
        text
    }
}

/// Pane-relative point of a terminal cell.
fn pane_point(pane: Rect, point: Position) -> (i32, i32) {
    (
        i32::from(point.x) - i32::from(pane.x),
        i32::from(point.y) - i32::from(pane.y),
    )
}

/// Open `path` and run the TUI until the user quits.
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(path: PathBuf, config: ResolvedConfig, offset: u64) -> Result<(), TuiError> {
    let source = crate::source::open(path)?;
    info!(len = source.len(), offset, "Opened data source");

    let mut app = TuiApp::new(source, config, offset)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
