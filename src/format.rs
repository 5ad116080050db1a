//! Text formatting helpers for the detail view
//!
//! The backend's generated forecast uses a tiny markup: `**bold**` spans and
//! literal newlines. `format_forecast` turns that into styled ratatui lines;
//! everything else is rendered verbatim, so stray markup can't inject styling
//! beyond bold.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Splits forecast markup into styled lines, one per newline in the input.
///
/// `**text**` becomes a bold span. An unmatched `**` is kept literally rather
/// than bolding the rest of the line.
pub fn format_forecast(text: &str) -> Vec<Line<'static>> {
    text.split('\n').map(format_line).collect()
}

fn format_line(line: &str) -> Line<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        match after_open.find("**") {
            Some(close) if close > 0 => {
                if open > 0 {
                    spans.push(Span::raw(rest[..open].to_string()));
                }
                spans.push(Span::styled(after_open[..close].to_string(), bold));
                rest = &after_open[close + 2..];
            }
            // No closing marker (or an empty "****"): emit the rest as-is.
            _ => break,
        }
    }
    if !rest.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }

    Line::from(spans)
}

/// Uppercases the first character; empty or missing input renders as "-"
pub fn capitalize(text: Option<&str>) -> String {
    match text {
        None | Some("") => "-".to_string(),
        Some(s) => {
            let mut chars = s.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "-".to_string(),
            }
        }
    }
}
