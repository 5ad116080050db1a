//! Favorites screen rendering
//!
//! Lists the favorited breaks in the order they were added. Entries whose
//! break no longer exists in the loaded data are still shown; opening one
//! will surface the backend's lookup error.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// One row of the favorites list
fn favorite_line(name: &str, state: Option<&str>, is_selected: bool) -> Line<'static> {
    let name_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let mut spans = vec![
        Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
        Span::styled(name.to_string(), name_style),
    ];
    if let Some(state) = state {
        spans.push(Span::styled(
            format!("  ({})", state),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

/// Renders the favorites view
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let mut lines = Vec::new();
    if app.favorites.list().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No favorites yet - press f on a break to add one",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (i, name) in app.favorites.list().iter().enumerate() {
            let state = app
                .breaks
                .iter()
                .find(|b| &b.name == name)
                .map(|b| b.state.as_str());
            lines.push(favorite_line(name, state, i == app.favorites_index));
        }
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Favorites ")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(list, chunks[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " j/k move  Enter detail  f remove  Esc back  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[1]);
}
