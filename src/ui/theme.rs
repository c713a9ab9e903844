//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::app::Tone;
use crate::data::{DomainStatus, Outcome};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for successful (200) examinations and online domains.
    pub up: Color,
    /// Color for failed (500) examinations and offline domains.
    pub down: Color,
    /// Color for examinations with any other status code.
    pub unknown: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section headers and field labels.
    pub header: Style,
    /// Style for the selected list row.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            up: Color::Green,
            down: Color::Red,
            unknown: Color::Gray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            up: Color::Green,
            down: Color::Red,
            unknown: Color::DarkGray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a history-strip cell
    pub fn outcome_style(&self, outcome: Outcome) -> Style {
        match outcome {
            Outcome::Up => Style::default().fg(self.up),
            Outcome::Down => Style::default().fg(self.down),
            Outcome::Unknown => Style::default().fg(self.unknown),
        }
    }

    /// Get style for the status dot on a domain card
    pub fn domain_status_style(&self, status: DomainStatus) -> Style {
        match status {
            DomainStatus::Online => Style::default().fg(self.up),
            DomainStatus::Offline => Style::default().fg(self.down),
        }
    }

    /// Get style for a form message of the given tone
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Success => Style::default().fg(self.up),
            Tone::Error => Style::default().fg(self.down),
        }
    }
}
