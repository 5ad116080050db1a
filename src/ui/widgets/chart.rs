//! Forecast chart widgets
//!
//! Renders the wave-height area chart and the wind bar chart from
//! [`ChartGeometry`]. The geometry lives in a resolution-independent unit
//! space; these widgets map it onto whatever terminal rect they are given.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::forecast::chart::{fill_fraction, CHART_WIDTH};
use crate::forecast::{ChartGeometry, WindBar};

/// Block characters for partial cell fills (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Arrow glyphs by the direction the wind blows toward, one per compass octant
/// of the "from" direction starting at north
const WIND_ARROWS: [char; 8] = ['↓', '↙', '←', '↖', '↑', '↗', '→', '↘'];

/// Picks the arrow showing where wind from `rotation_deg` blows toward
fn wind_arrow(rotation_deg: f64) -> char {
    let index = ((rotation_deg / 45.0).round() as i64).rem_euclid(8) as usize;
    WIND_ARROWS[index]
}

/// Linearly interpolates the line's y coordinate at unit-space `x`.
///
/// Before the first point and past the last the line is held flat.
fn interpolate_y(points: &[crate::forecast::WavePoint], x: f64) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;
    if x <= first.x {
        return Some(first.y);
    }
    if x >= last.x {
        return Some(last.y);
    }
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if x >= a.x && x <= b.x {
            let span = b.x - a.x;
            if span <= f64::EPSILON {
                return Some(a.y);
            }
            let t = (x - a.x) / span;
            return Some(a.y + (b.y - a.y) * t);
        }
    }
    Some(last.y)
}

/// Area chart of daily max wave heights
pub struct WaveChart<'a> {
    geometry: &'a ChartGeometry,
    /// Day highlighted by the day cursor
    selected: Option<usize>,
    style: Style,
    selected_style: Style,
}

impl<'a> WaveChart<'a> {
    pub fn new(geometry: &'a ChartGeometry) -> Self {
        Self {
            geometry,
            selected: None,
            style: Style::default().fg(Color::Cyan),
            selected_style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Terminal column closest to the selected day's point
    fn selected_column(&self, width: u16) -> Option<u16> {
        let point = self.geometry.points.get(self.selected?)?;
        let col = (point.x / CHART_WIDTH * (width.saturating_sub(1)) as f64).round();
        Some(col as u16)
    }
}

impl Widget for WaveChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.geometry.points.is_empty() {
            return;
        }

        let selected_column = self.selected_column(area.width);
        let rows = area.height as f64;

        for col in 0..area.width {
            let unit_x = if area.width == 1 {
                0.0
            } else {
                col as f64 / (area.width - 1) as f64 * CHART_WIDTH
            };
            let Some(y) = interpolate_y(&self.geometry.points, unit_x) else {
                continue;
            };
            let filled_rows = fill_fraction(y) * rows;

            let style = if selected_column == Some(col) {
                self.selected_style
            } else {
                self.style
            };

            for row in 0..area.height {
                // Row 0 is the top of the rect; fill grows from the bottom.
                let cells_below = (area.height - 1 - row) as f64;
                let fill = filled_rows - cells_below;
                let ch = if fill >= 1.0 {
                    '█'
                } else if fill > 0.0 {
                    BLOCKS[((fill * 7.0).round() as usize).min(7)]
                } else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}

/// Bar chart of daily average wind, with direction arrows above the bars
pub struct WindBars<'a> {
    bars: &'a [WindBar],
    selected: Option<usize>,
    style: Style,
    selected_style: Style,
}

impl<'a> WindBars<'a> {
    pub fn new(bars: &'a [WindBar]) -> Self {
        Self {
            bars,
            selected: None,
            style: Style::default().fg(Color::Green),
            selected_style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for WindBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 || self.bars.is_empty() {
            return;
        }

        let slot_width = area.width as usize / self.bars.len();
        if slot_width == 0 {
            return;
        }
        // Top row is reserved for the direction arrow.
        let bar_rows = (area.height - 1) as f64;

        for (i, bar) in self.bars.iter().enumerate() {
            let style = if self.selected == Some(i) {
                self.selected_style
            } else {
                self.style
            };
            let slot_x = area.x + (i * slot_width) as u16;
            let center_x = slot_x + (slot_width / 2) as u16;

            let filled = (bar.bar_height_pct / 100.0 * bar_rows).max(1.0);

            for row in 1..area.height {
                let cells_below = (area.height - 1 - row) as f64;
                let fill = filled - cells_below;
                let ch = if fill >= 1.0 {
                    '█'
                } else if fill > 0.0 {
                    BLOCKS[((fill * 7.0).round() as usize).min(7)]
                } else {
                    continue;
                };
                for dx in 0..slot_width.saturating_sub(1).max(1) {
                    if let Some(cell) = buf.cell_mut((slot_x + dx as u16, area.y + row)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }

            // Stronger wind gets a bolder arrow.
            let arrow_style = if bar.arrow_size_px >= 26.0 {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };
            if let Some(cell) = buf.cell_mut((center_x, area.y)) {
                cell.set_char(wind_arrow(bar.rotation_deg))
                    .set_style(arrow_style);
            }
        }
    }
}
