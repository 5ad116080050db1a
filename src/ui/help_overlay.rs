//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame) {
    let area = frame.area();

    let overlay_width = 52;
    let overlay_height = 22;
    let overlay_area = centered_rect(overlay_width, overlay_height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "List",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        help_line("↑/k, ↓/j", "Move selection up/down"),
        help_line("Enter", "Open break details"),
        help_line("/", "Search (Enter/Esc to finish)"),
        help_line("s", "Cycle state filter"),
        help_line("v", "Cycle skill filter"),
        Line::from(""),
        Line::from(Span::styled(
            "Details",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        help_line("h/←, l/→", "Select forecast day"),
        help_line("j/k, g/G", "Scroll / jump"),
        Line::from(""),
        Line::from(Span::styled(
            "Favorites",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        help_line("f", "Toggle favorite"),
        help_line("F", "Open favorites view"),
        Line::from(""),
        help_line("r", "Reload data"),
        help_line("q / Esc", "Quit / go back"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description.to_string()),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(52, 22, area);
        assert_eq!(rect.width, 52);
        assert_eq!(rect.height, 22);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }

    #[test]
    fn test_centered_rect_small_terminal() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(52, 22, area);
        // Oversized overlay clamps instead of overflowing.
        assert!(rect.width <= area.width + 52);
        assert_eq!(rect.x, 0);
    }
}
