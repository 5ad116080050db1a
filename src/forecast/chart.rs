//! Chart geometry for the 7-day forecast
//!
//! Converts daily aggregates into screen-space geometry: a wave-height
//! line/area chart in a resolution-independent unit space, and per-day wind
//! bar visual parameters. The drawing itself is delegated to whatever surface
//! renders the geometry (the TUI widget in `ui::widgets`).

use super::DailyAggregate;

/// Vertical extent of the wave chart's unit space
pub const CHART_HEIGHT: f64 = 120.0;
/// Horizontal extent of the wave chart's unit space
pub const CHART_WIDTH: f64 = 100.0;

const PAD_TOP: f64 = 20.0;
const PAD_BOTTOM: f64 = 20.0;
const PAD_LEFT: f64 = 5.0;
const PAD_RIGHT: f64 = 5.0;

/// One point on the wave-height line, in chart unit space
#[derive(Debug, Clone, PartialEq)]
pub struct WavePoint {
    /// Horizontal position in `[0, 100]`
    pub x: f64,
    /// Vertical position in `[0, CHART_HEIGHT]`, top-down
    pub y: f64,
    /// The day's max wave height, if any sample existed
    pub value: Option<f64>,
    /// The day's label timestamp
    pub time: String,
}

/// Visual parameters for one day's wind bar
#[derive(Debug, Clone, PartialEq)]
pub struct WindBar {
    /// `avg_wind_speed / wind_scale_max`, 0 when the average is null
    pub speed_ratio: f64,
    /// Arrow glyph size in pixels, grows linearly with the speed ratio
    pub arrow_size_px: f64,
    /// Bar height as a percentage of the container, never zero so calm days
    /// stay visible
    pub bar_height_pct: f64,
    /// Arrow rotation in degrees; equals the raw "from" direction, 0 when null
    pub rotation_deg: f64,
}

/// Geometry for both forecast charts, derived fresh from the aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// Wave-height points in day order
    pub points: Vec<WavePoint>,
    /// SVG-style path connecting the points ("M x y L x y ...")
    pub line_path: String,
    /// Closed outline of the filled region under the line
    pub area_path: String,
    /// Wave-height scale maximum, floored at 1
    pub max_wave_scale: f64,
    /// Per-day wind bars in day order
    pub wind_bars: Vec<WindBar>,
    /// Wind-speed scale maximum, floored at 1
    pub wind_scale_max: f64,
}

/// Fraction of the drawable band a point's y coordinate fills, 0.0 at the
/// baseline and 1.0 at the top padding edge
pub fn fill_fraction(y: f64) -> f64 {
    let inner = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    ((CHART_HEIGHT - PAD_BOTTOM - y) / inner).clamp(0.0, 1.0)
}

/// Maximum of the non-null values yielded by `pick`, floored at 1.0.
///
/// The floor guards division for all-null input and keeps tiny values from
/// producing absurd scaling.
fn scale_max(days: &[DailyAggregate], pick: impl Fn(&DailyAggregate) -> Option<f64>) -> f64 {
    days.iter()
        .filter_map(pick)
        .fold(1.0_f64, f64::max)
}

/// Computes the full chart geometry for up to 7 daily aggregates.
///
/// Handles the degenerate cases without panicking: zero days produce empty
/// point/bar lists and empty paths, a single day sits at the left padding
/// edge, and all-null values render a flat line at the baseline.
pub fn chart_geometry(days: &[DailyAggregate]) -> ChartGeometry {
    let max_wave_scale = scale_max(days, |d| d.max_wave_height);
    let wind_scale_max = scale_max(days, |d| d.max_wind_speed);

    let inner_height = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let inner_width = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
    let x_step_divisor = days.len().saturating_sub(1).max(1) as f64;

    let points: Vec<WavePoint> = days
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let x = PAD_LEFT + (i as f64 / x_step_divisor) * inner_width;
            let normalized = d.max_wave_height.map_or(0.0, |v| v / max_wave_scale);
            let y = PAD_TOP + inner_height - normalized * inner_height;
            WavePoint {
                x,
                y,
                value: d.max_wave_height,
                time: d.time.clone(),
            }
        })
        .collect();

    let line_path = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let op = if i == 0 { 'M' } else { 'L' };
            format!("{} {:.2} {:.2}", op, p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let area_path = match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            let bottom = CHART_HEIGHT - PAD_BOTTOM;
            format!(
                "{} L {:.2} {:.2} L {:.2} {:.2} Z",
                line_path, last.x, bottom, first.x, bottom
            )
        }
        _ => String::new(),
    };

    let wind_bars = days
        .iter()
        .map(|d| {
            let speed_ratio = d.avg_wind_speed.map_or(0.0, |v| v / wind_scale_max);
            WindBar {
                speed_ratio,
                arrow_size_px: 16.0 + speed_ratio * 20.0,
                bar_height_pct: 25.0 + speed_ratio * 70.0,
                rotation_deg: d.wind_direction.unwrap_or(0.0),
            }
        })
        .collect();

    ChartGeometry {
        points,
        line_path,
        area_path,
        max_wave_scale,
        wind_bars,
        wind_scale_max,
    }
}
