//! Hex grid styling configuration.
//!
//! Provides distinct styles for the address gutter, hex and ASCII columns,
//! unknown bytes and the two marker tones.

use crate::config::ResolvedConfig;
use crate::state::MarkerTone;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` flag or a non-empty `NO_COLOR`
/// environment variable, both folded into [`ResolvedConfig::no_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            enabled: !config.no_color,
        }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== HexStyles =====

/// Styles for every part of the hex pane.
///
/// Without colors, markers fall back to text modifiers so hover and
/// selection stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexStyles {
    /// Address gutter.
    pub address: Style,
    /// Hex digits.
    pub hex: Style,
    /// ASCII column.
    pub ascii: Style,
    /// Bytes the source failed to deliver.
    pub unknown: Style,
    /// Hover marker cells.
    pub hover: Style,
    /// Selection marker cells.
    pub selection: Style,
    /// Status bar.
    pub status: Style,
}

impl HexStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                address: Style::default().fg(Color::DarkGray),
                hex: Style::default(),
                ascii: Style::default().fg(Color::Cyan),
                unknown: Style::default().fg(Color::Red),
                hover: Style::default().bg(Color::Yellow).fg(Color::Black),
                selection: Style::default().bg(Color::Blue).fg(Color::White),
                status: Style::default().bg(Color::DarkGray).fg(Color::White),
            }
        } else {
            Self {
                address: Style::default(),
                hex: Style::default(),
                ascii: Style::default(),
                unknown: Style::default(),
                hover: Style::default().add_modifier(Modifier::REVERSED),
                selection: Style::default().add_modifier(Modifier::UNDERLINED),
                status: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Style for a marker tone.
    pub fn for_tone(&self, tone: MarkerTone) -> Style {
        match tone {
            MarkerTone::Hover => self.hover,
            MarkerTone::Selection => self.selection,
        }
    }
}

impl Default for HexStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig { enabled: true })
    }
}

// ===== Tests =====
