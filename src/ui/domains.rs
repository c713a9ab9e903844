//! Domain list view rendering.
//!
//! Shows one card per monitored domain, or the loading, error, and
//! empty-state messages.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::card::card_lines;
use crate::app::{App, DomainsState};

/// Render the domain list view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.domains {
        DomainsState::Loading => {
            let paragraph = Paragraph::new("Loading domain list...")
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center)
                .block(bordered(app, " Domains ".to_string()));
            frame.render_widget(paragraph, area);
        }
        DomainsState::Failed(ref reason) => {
            let paragraph = Paragraph::new(format!("Error: {}", reason))
                .style(Style::default().fg(app.theme.down))
                .alignment(Alignment::Center)
                .block(bordered(app, " Domains ".to_string()));
            frame.render_widget(paragraph, area);
        }
        DomainsState::Loaded(ref entries) if entries.is_empty() => {
            let paragraph = Paragraph::new("No domains available yet")
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center)
                .block(bordered(app, " Domains ".to_string()));
            frame.render_widget(paragraph, area);
        }
        DomainsState::Loaded(ref entries) => {
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| ListItem::new(card_lines(entry, &app.theme)))
                .collect();

            let selected = app.selected_index.min(entries.len() - 1);
            let title = format!(
                " Domains ({}) [{}/{}] ",
                entries.len(),
                selected + 1,
                entries.len()
            );

            let list = List::new(items)
                .block(bordered(app, title))
                .highlight_style(app.theme.selected)
                .highlight_symbol("▶ ");

            let mut state = ListState::default();
            state.select(Some(selected));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn bordered(app: &App, title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}
