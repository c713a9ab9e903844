//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help
//! overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, DomainsState, View};

/// Render the header bar with the dashboard summary.
///
/// Displays: application name, domain count, and the API endpoint in use.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" DOMWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
    ];

    match app.domains {
        DomainsState::Loaded(ref entries) => {
            spans.push(Span::styled(
                format!("{}", entries.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" domains │ "));
        }
        DomainsState::Loading => {
            spans.push(Span::raw("loading │ "));
        }
        DomainsState::Failed(_) => {
            spans.push(Span::styled("offline", Style::default().fg(app.theme.down)));
            spans.push(Span::raw(" │ "));
        }
    }

    spans.push(Span::styled(
        app.api_description().to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Domains "),
        Line::from(" 2:Monitor "),
        Line::from(" 3:Add Domain "),
    ];

    let selected = match app.current_view {
        View::Domains => 0,
        View::Monitor => 1,
        View::AddDomain => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the current view and its available controls, or a temporary
/// status message.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    // Context-sensitive controls
    let controls = match app.current_view {
        View::Domains => "↑↓:select Enter:monitor a:add r:reload ?:help q:quit",
        View::Monitor => "r:reload Esc:back ?:help q:quit",
        View::AddDomain => "Type the domain | Enter:submit Esc:back",
    };

    let status = format!(" {} | {}", app.current_view.label(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  1           Domain list"),
        Line::from("  2           Monitor"),
        Line::from("  3 / a       Add domain"),
        Line::from("  Esc         Back to the list"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Domain list",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Select domain"),
        Line::from("  PgUp/PgDn   Jump 10 items"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       Open monitor"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r           Reload current view"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
