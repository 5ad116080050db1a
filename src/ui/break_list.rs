//! Break list screen rendering
//!
//! Renders the main list view: a search/filter bar, breaks grouped by state,
//! and a key hint footer. Favorited breaks get a star marker.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::SurfBreak;
use crate::filter;

/// Color for a skill level label
fn skill_color(skill: &str) -> Color {
    match skill {
        "beginner" => Color::Green,
        "intermediate" => Color::Yellow,
        "advanced" => Color::LightRed,
        "expert" => Color::Magenta,
        _ => Color::Gray,
    }
}

/// Builds the search/filter status line shown at the top of the list
fn filter_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::Gray))];
    if app.search_editing {
        spans.push(Span::styled(
            format!("{}_", app.filters.search),
            Style::default().fg(Color::Yellow),
        ));
    } else if app.filters.search.is_empty() {
        spans.push(Span::styled("(/)", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(app.filters.search.clone()));
    }

    let state = if app.filters.state.is_empty() {
        "All states"
    } else {
        app.filters.state.as_str()
    };
    let skill = if app.filters.skill.is_empty() {
        "All levels"
    } else {
        app.filters.skill.as_str()
    };
    spans.push(Span::styled(
        format!("  [s] {}  [v] {}", state, skill),
        Style::default().fg(Color::Cyan),
    ));

    Line::from(spans)
}

/// One row of the list for a single break
fn break_line(b: &SurfBreak, is_favorite: bool, is_selected: bool) -> Line<'static> {
    let star = if is_favorite { "★ " } else { "  " };
    let name_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("  {}", star), Style::default().fg(Color::Yellow)),
        Span::styled(b.name.clone(), name_style),
        Span::styled(
            format!("  {}", b.skill_level),
            Style::default().fg(skill_color(&b.skill_level)),
        ),
    ])
}

/// Builds every line of the list body and returns them with the line index
/// of the selected break (for scrolling)
fn list_lines(app: &App) -> (Vec<Line<'static>>, Option<usize>) {
    let filtered = filter::filter_breaks(&app.breaks, &app.filters);
    let groups = filter::group_by_state(&filtered);

    let mut lines = Vec::new();
    let mut selected_line = None;
    let mut row = 0usize;

    for (state, breaks) in groups {
        lines.push(Line::from(Span::styled(
            state,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for b in breaks {
            let is_selected = row == app.selected_index;
            if is_selected {
                selected_line = Some(lines.len());
            }
            lines.push(break_line(b, app.favorites.is_favorite(&b.name), is_selected));
            row += 1;
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No breaks match the current filters",
            Style::default().fg(Color::DarkGray),
        )));
    }

    (lines, selected_line)
}

/// Renders the break list view
pub fn render_break_list(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let banner_height = if app.offline { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let search_bar = Paragraph::new(filter_line(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Surf Breaks ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(search_bar, chunks[0]);

    if app.offline {
        render_offline_banner(frame, chunks[1]);
    }

    let (lines, selected_line) = list_lines(app);
    let scroll = scroll_for_selection(selected_line, lines.len(), chunks[2].height);
    let list = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(list, chunks[2]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " j/k move  Enter detail  / search  s/v filter  f fav  F favorites  r reload  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[3]);
}

/// Shared banner for backend-unreachable state
pub fn render_offline_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(Span::styled(
        " Offline - showing last loaded data (r to retry)",
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )));
    frame.render_widget(banner, area);
}

/// Scroll offset that keeps the selected line inside the viewport
fn scroll_for_selection(selected_line: Option<usize>, total: usize, height: u16) -> u16 {
    let height = height as usize;
    if height == 0 || total <= height {
        return 0;
    }
    let Some(selected) = selected_line else {
        return 0;
    };
    if selected < height {
        0
    } else {
        ((selected + 1 - height).min(total - height)) as u16
    }
}
