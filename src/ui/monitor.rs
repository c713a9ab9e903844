//! Domain monitor view rendering.
//!
//! Shows the latest examination result, 24h uptime, and a history strip
//! with one colored cell per examination.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, MonitorState};
use crate::data::DomainHistory;

/// Placeholder shown when a derived field has no data to derive from.
const NOT_AVAILABLE: &str = "N/A";

/// Render the monitor view for the current domain.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let domain = app.monitor_domain.as_deref().unwrap_or("?");
    let block = Block::default()
        .title(format!(" Monitoring {} ", domain))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    match app.monitor {
        MonitorState::Loading => {
            let paragraph = Paragraph::new("Loading...")
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
        }
        MonitorState::Failed(ref reason) => {
            let paragraph = Paragraph::new(format!("Error: {}", reason))
                .style(Style::default().fg(app.theme.down))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
        }
        MonitorState::Loaded(ref history) => {
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let chunks = Layout::vertical([
                Constraint::Length(5), // Derived status fields
                Constraint::Min(3),    // History strip
            ])
            .split(inner);

            render_status_fields(frame, app, history, chunks[0]);
            render_history_strip(frame, app, history, chunks[1]);
        }
    }
}

fn render_status_fields(frame: &mut Frame, app: &App, history: &DomainHistory, area: Rect) {
    let status_style = history
        .records
        .last()
        .map(|r| app.theme.outcome_style(r.outcome))
        .unwrap_or_default();

    let field = |label: &str, value: Option<&str>, suffix: &str, style: Style| -> Line<'static> {
        let value = value.unwrap_or(NOT_AVAILABLE);
        Line::from(vec![
            Span::styled(format!(" {:<15}", label), app.theme.header),
            Span::styled(format!("{}{}", value, suffix), style),
        ])
    };

    let status = history.latest_status.map(|s| s.to_string());
    let lines = vec![
        field("Status code:", status.as_deref(), "", status_style),
        field(
            "Response time:",
            history.response_time_ms.as_deref(),
            " ms",
            Style::default(),
        ),
        field(
            "Uptime (24h):",
            history.uptime_24h.as_deref(),
            "%",
            Style::default(),
        ),
        field(
            "Last checked:",
            history.last_checked.as_deref(),
            "",
            Style::default(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_history_strip(frame: &mut Frame, app: &App, history: &DomainHistory, area: Rect) {
    let block = Block::default()
        .title(" History (last 24 hours) ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = if history.records.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "no examinations recorded",
            Style::default().add_modifier(Modifier::DIM),
        )))
    } else {
        // One cell per examination, in the order the API returned them
        let cells: Vec<Span> = history
            .records
            .iter()
            .map(|r| Span::styled("■ ", app.theme.outcome_style(r.outcome)))
            .collect();
        Paragraph::new(Line::from(cells)).wrap(Wrap { trim: false })
    };

    frame.render_widget(paragraph.block(block), area);
}
