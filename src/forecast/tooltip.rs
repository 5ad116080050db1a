//! Tooltip state for the forecast charts
//!
//! The hover handlers are pure: they take a day reference plus the on-screen
//! bounding box of the chart container and return the tooltip to show. The UI
//! layer decides what "hover" means (pointer events, or a keyboard-driven day
//! cursor in the TUI) and where the returned pixel offsets land.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::chart::WavePoint;
use super::DailyAggregate;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Transient tooltip UI state; at most one tooltip is visible at a time
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    /// Horizontal pixel offset within the chart container
    pub x: f64,
    /// Vertical pixel offset within the chart container (may be negative to
    /// place the tooltip above it)
    pub y: f64,
}

impl TooltipState {
    /// The pointer-leave state
    pub fn hidden() -> Self {
        Self {
            visible: false,
            content: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }
}

/// On-screen bounding box of a chart container, measured at hover time so the
/// surface may resize freely between layout and interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub width: f64,
    pub height: f64,
}

/// Snaps a wind direction to the nearest of 8 compass points.
///
/// A null direction yields an empty label, not an error. Degrees outside
/// 0-360 wrap (e.g. 400 snaps the same as 40-ish bearings do).
pub fn compass_label(degrees: Option<f64>) -> &'static str {
    match degrees {
        None => "",
        Some(deg) => {
            let index = ((deg / 45.0).round() as i64).rem_euclid(8) as usize;
            COMPASS_POINTS[index]
        }
    }
}

/// Parses a series timestamp into "Mon 15/7" style day-name and short-date
/// labels. Unparseable input degrades to a "?" label.
fn day_date_label(time: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(time, "%Y-%m-%d"));

    match parsed {
        Ok(date) => {
            let day_name = DAY_NAMES[date.weekday().num_days_from_sunday() as usize];
            format!("{} {}/{}", day_name, date.day(), date.month())
        }
        Err(_) => "?".to_string(),
    }
}

/// Tooltip for hovering a wave-chart point.
///
/// The point's unit-space coordinates are converted to pixels against the
/// container measured now, and the tooltip is lifted 35px above the point.
pub fn wave_tooltip(point: &WavePoint, container: ContainerRect) -> TooltipState {
    let value = match point.value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    };
    TooltipState {
        visible: true,
        content: format!("{}: {}m max", day_date_label(&point.time), value),
        x: point.x / 100.0 * container.width,
        y: point.y / 100.0 * container.height - 35.0,
    }
}

/// Tooltip for hovering a day's wind bar.
///
/// Centered over the hovered bar (`index` of `day_count` equal-width bars)
/// and placed 25px above the container.
pub fn wind_tooltip(
    day: &DailyAggregate,
    index: usize,
    day_count: usize,
    container: ContainerRect,
) -> TooltipState {
    let speed = day.avg_wind_speed.unwrap_or(0.0).round() as i64;
    let label = compass_label(day.wind_direction);
    let content = if label.is_empty() {
        format!("{}: {} km/h avg", day_date_label(&day.time), speed)
    } else {
        format!("{}: {} km/h avg {}", day_date_label(&day.time), speed, label)
    };
    let bar_width = container.width / day_count.max(1) as f64;
    TooltipState {
        visible: true,
        content,
        x: (index as f64 + 0.5) * bar_width,
        y: -25.0,
    }
}
