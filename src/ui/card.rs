//! Domain card rendering.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Theme;
use crate::data::DomainEntry;

/// Build the text lines for one domain card.
///
/// A status dot colored by the domain's reachability, the domain name as
/// the navigable element, and a dimmed note line underneath. An empty note
/// omits the note line entirely.
pub fn card_lines(entry: &DomainEntry, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("● ", theme.domain_status_style(entry.status)),
        Span::styled(
            entry.name.clone(),
            Style::default().fg(theme.highlight).add_modifier(Modifier::UNDERLINED),
        ),
    ])];

    if !entry.note.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.note),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    lines
}
