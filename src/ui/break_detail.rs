//! Break detail screen rendering
//!
//! Shows one break's characteristics, the generated forecast text, and the
//! 7-day wave/wind charts. The h/l day cursor highlights a day in both charts
//! and surfaces its tooltip text.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{BreakDetail, WeatherData};
use crate::forecast::{
    aggregate_daily, chart_geometry, compass_label, wave_tooltip, wind_tooltip, ChartGeometry,
    ContainerRect, DailyAggregate, TooltipState,
};
use crate::format::{capitalize, format_forecast};
use crate::ui::widgets::{WaveChart, WindBars};

const WAVE_CHART_HEIGHT: u16 = 10;
const WIND_CHART_HEIGHT: u16 = 6;

/// Renders the break detail screen
pub fn render(frame: &mut Frame, app: &App, name: &str) {
    let area = frame.area();

    let Some(detail) = app.details.get(name) else {
        if let Some(error) = &app.detail_error {
            render_message(frame, area, name, error, Color::Red);
        } else {
            render_message(frame, area, name, "Loading...", Color::Cyan);
        }
        return;
    };

    let star = if app.favorites.is_favorite(name) {
        "★ "
    } else {
        ""
    };
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {}{} ", star, detail.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = main_block.inner(area);
    frame.render_widget(main_block, area);

    let banner_height = if app.offline { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Min(3),
            Constraint::Length(WAVE_CHART_HEIGHT),
            Constraint::Length(WIND_CHART_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    if app.offline {
        super::break_list::render_offline_banner(frame, chunks[0]);
    }

    // Textual sections scroll; the charts stay pinned below them.
    let mut lines = info_lines(detail);
    lines.push(Line::from(""));
    lines.extend(forecast_lines(detail));
    let max_scroll = (lines.len() as u16).saturating_sub(chunks[1].height);
    let text = Paragraph::new(lines).scroll((app.detail_scroll_offset.min(max_scroll), 0));
    frame.render_widget(text, chunks[1]);

    let days = detail
        .hourly()
        .map(aggregate_daily)
        .unwrap_or_default();
    let geometry = chart_geometry(&days);

    render_wave_chart(frame, chunks[2], &geometry, app.chart_day_cursor);
    render_wind_chart(frame, chunks[3], &geometry, app.chart_day_cursor);
    render_tooltip_line(frame, chunks[4], &days, &geometry, app.chart_day_cursor);

    let footer = Paragraph::new(Line::from(Span::styled(
        " h/l select day  j/k scroll  g/G top/bottom  f fav  r reload  Esc back  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[5]);
}

/// Centered single-message screen used for loading and error states
fn render_message(frame: &mut Frame, area: Rect, name: &str, message: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);
    let text = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(text, chunks[1]);
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// The characteristics and conditions sections of the detail text
fn info_lines(detail: &BreakDetail) -> Vec<Line<'static>> {
    let mut lines = vec![section_header("Break")];
    lines.push(field_line("State", capitalize(detail.state.as_deref())));
    lines.push(field_line("Skill level", capitalize(detail.skill_level.as_deref())));
    lines.push(field_line("Break type", capitalize(detail.break_type.as_deref())));
    lines.push(field_line("Bottom", capitalize(detail.bottom_type.as_deref())));
    lines.push(field_line(
        "Wave direction",
        capitalize(detail.wave_direction.as_deref()),
    ));
    lines.push(Line::from(""));
    lines.push(section_header("Ideal conditions"));
    lines.push(field_line("Wind", capitalize(detail.ideal_wind.as_deref())));
    lines.push(field_line("Tide", capitalize(detail.ideal_tide.as_deref())));
    lines.push(field_line(
        "Swell size",
        capitalize(detail.ideal_swell_size.as_deref()),
    ));

    if let Some(weather) = &detail.weather_data {
        lines.push(Line::from(""));
        lines.push(section_header("Current conditions"));
        lines.extend(conditions_lines(weather));
    }

    if let Some(description) = &detail.description {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    lines
}

fn conditions_lines(weather: &WeatherData) -> Vec<Line<'static>> {
    let metric = |v: Option<f64>, unit: &str| match v {
        Some(v) => format!("{:.1} {}", v, unit),
        None => "-".to_string(),
    };
    let direction = match weather.wind_direction {
        Some(deg) => format!("{} ({:.0}°)", compass_label(Some(deg)), deg),
        None => "-".to_string(),
    };
    vec![
        field_line("Max wave", metric(weather.wave_height_max, "m")),
        field_line("Max period", metric(weather.wave_period_max, "s")),
        field_line("Max wind", metric(weather.wind_speed_max, "km/h")),
        field_line("Wind from", direction),
    ]
}

/// The generated forecast section, styled from its `**bold**` markup
fn forecast_lines(detail: &BreakDetail) -> Vec<Line<'static>> {
    let mut lines = vec![section_header("Surf report")];
    match &detail.forecast {
        Some(text) => lines.extend(format_forecast(text)),
        None => lines.push(Line::from(Span::styled(
            "  Forecast unavailable",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines
}

fn render_wave_chart(
    frame: &mut Frame,
    area: Rect,
    geometry: &ChartGeometry,
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(Span::styled(
            format!(" Wave height, 7 days (scale {:.1} m) ", geometry.max_wave_scale),
            Style::default().fg(Color::Cyan),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if geometry.points.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No forecast data",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, inner);
        return;
    }
    frame.render_widget(WaveChart::new(geometry).selected(selected), inner);
}

fn render_wind_chart(
    frame: &mut Frame,
    area: Rect,
    geometry: &ChartGeometry,
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(Span::styled(
            format!(" Wind, 7 days (scale {:.0} km/h) ", geometry.wind_scale_max),
            Style::default().fg(Color::Cyan),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if geometry.wind_bars.is_empty() {
        return;
    }
    frame.render_widget(WindBars::new(&geometry.wind_bars).selected(selected), inner);
}

/// Tooltip text for the day under the cursor, indented toward its position
fn render_tooltip_line(
    frame: &mut Frame,
    area: Rect,
    days: &[DailyAggregate],
    geometry: &ChartGeometry,
    selected: Option<usize>,
) {
    let Some((wave, wind)) = selected_tooltips(days, geometry, selected, area) else {
        let hint = Paragraph::new(Line::from(Span::styled(
            " h/l to inspect a day",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hint, area);
        return;
    };

    let indent = (wave.x.max(0.0) as u16).min(area.width.saturating_sub(1)) as usize;
    let line = Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(
            wave.content,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  |  {}", wind.content),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Builds both tooltips for the selected day against the tooltip line's rect
fn selected_tooltips(
    days: &[DailyAggregate],
    geometry: &ChartGeometry,
    selected: Option<usize>,
    area: Rect,
) -> Option<(TooltipState, TooltipState)> {
    let index = selected?;
    let day = days.get(index)?;
    let point = geometry.points.get(index)?;
    let container = ContainerRect {
        width: area.width as f64,
        height: area.height as f64,
    };
    let wave = wave_tooltip(point, container);
    let wind = wind_tooltip(day, index, days.len(), container);
    Some((wave, wind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::HourlySeries;

    fn detail_fixture() -> BreakDetail {
        let hourly = HourlySeries {
            time: (0..48)
                .map(|i| format!("2024-07-{:02}T{:02}:00", 15 + i / 24, i % 24))
                .collect(),
            wave_height: vec![Some(1.5); 48],
            wind_speed: vec![Some(12.0); 48],
            wind_direction: vec![Some(90.0); 48],
        };
        BreakDetail {
            name: "Bells Beach".to_string(),
            state: Some("Victoria".to_string()),
            skill_level: Some("advanced".to_string()),
            bottom_type: Some("reef".to_string()),
            ideal_wind: Some("northwest".to_string()),
            forecast: Some("**Solid swell** on the way.\nLight winds.".to_string()),
            weather_data: Some(WeatherData {
                wave_height_max: Some(1.8),
                wind_direction: Some(90.0),
                hourly: Some(hourly),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_info_lines_capitalize_and_dash_missing() {
        let detail = detail_fixture();
        let text = text_of(&info_lines(&detail));
        assert!(text.contains("Victoria"));
        assert!(text.contains("Advanced"));
        assert!(text.contains("Reef"));
        assert!(text.contains("Northwest"));
        // break_type is absent and renders as a dash.
        assert!(text.contains("Break type"));
        assert!(text.contains('-'));
    }

    #[test]
    fn test_conditions_lines_show_compass_direction() {
        let detail = detail_fixture();
        let weather = detail.weather_data.as_ref().unwrap();
        let text = text_of(&conditions_lines(weather));
        assert!(text.contains("1.8 m"));
        assert!(text.contains("E (90°)"));
    }

    #[test]
    fn test_forecast_lines_fall_back_when_missing() {
        let mut detail = detail_fixture();
        detail.forecast = None;
        let text = text_of(&forecast_lines(&detail));
        assert!(text.contains("Forecast unavailable"));
    }

    #[test]
    fn test_selected_tooltips_for_cursor_day() {
        let detail = detail_fixture();
        let days = aggregate_daily(detail.hourly().unwrap());
        let geometry = chart_geometry(&days);
        let area = Rect::new(0, 0, 80, 1);

        let (wave, wind) =
            selected_tooltips(&days, &geometry, Some(1), area).expect("tooltips for day 1");
        assert!(wave.content.contains("1.5m max"));
        assert!(wind.content.contains("12 km/h avg E"));
        assert!(wave.visible && wind.visible);
    }

    #[test]
    fn test_selected_tooltips_absent_without_cursor_or_days() {
        let detail = detail_fixture();
        let days = aggregate_daily(detail.hourly().unwrap());
        let geometry = chart_geometry(&days);
        let area = Rect::new(0, 0, 80, 1);

        assert!(selected_tooltips(&days, &geometry, None, area).is_none());
        assert!(selected_tooltips(&days, &geometry, Some(9), area).is_none());
        assert!(selected_tooltips(&[], &chart_geometry(&[]), Some(0), area).is_none());
    }
}
