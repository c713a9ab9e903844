//! Add-domain form rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the add-domain form as a centered box.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form_width = 48u16.min(area.width.saturating_sub(4));
    let form_height = 8u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(form_width)) / 2;
    let y = area.y + (area.height.saturating_sub(form_height)) / 2;
    let form_area = Rect::new(x, y, form_width, form_height);

    let input_line = if app.form.input.is_empty() {
        Line::from(Span::styled(
            " Enter URL http://www.example.com",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![
            Span::raw(format!(" {}", app.form.input)),
            Span::styled("_", Style::default().fg(app.theme.highlight)),
        ])
    };

    let mut lines = vec![Line::from(""), input_line, Line::from("")];

    if app.form.in_flight {
        lines.push(Line::from(Span::styled(
            " Adding...",
            Style::default().add_modifier(Modifier::DIM),
        )));
    } else if let Some((ref text, tone)) = app.form.message {
        lines.push(Line::from(Span::styled(
            format!(" {}", text),
            app.theme.tone_style(tone),
        )));
    }

    let block = Block::default()
        .title(" Add Domain ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    frame.render_widget(Paragraph::new(lines).block(block), form_area);
}
