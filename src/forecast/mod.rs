//! Forecast aggregation core
//!
//! Turns the raw hourly weather series returned by the backend into per-day
//! aggregates for the 7-day forecast charts. Everything in this module and
//! its submodules is pure and synchronous so it can be unit tested without a
//! rendering surface attached.

pub mod chart;
pub mod tooltip;

pub use chart::{chart_geometry, ChartGeometry, WavePoint, WindBar};
pub use tooltip::{compass_label, wave_tooltip, wind_tooltip, ContainerRect, TooltipState};

use serde::{Deserialize, Serialize};

/// Maximum number of days shown in the forecast charts
pub const MAX_FORECAST_DAYS: usize = 7;

/// Raw hourly weather series as delivered by the backend.
///
/// The four arrays are index-aligned on `time` (one entry per hour, ascending).
/// Missing samples arrive as JSON `null`, not as omitted entries. Arrays that
/// are absent from the payload deserialize as empty, and a value array shorter
/// than `time` simply reads as missing past its end, so partial upstream data
/// degrades to null aggregates instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// ISO 8601 timestamps (e.g. "2024-07-15T00:00"), hourly cadence
    #[serde(default)]
    pub time: Vec<String>,
    /// Wave height in meters
    #[serde(default)]
    pub wave_height: Vec<Option<f64>>,
    /// Wind speed in km/h
    #[serde(default)]
    pub wind_speed: Vec<Option<f64>>,
    /// Wind direction in degrees, meteorological "from" convention
    #[serde(default)]
    pub wind_direction: Vec<Option<f64>>,
}

/// Aggregated forecast values for one day (one 24-hour block of the series)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Timestamp of the block's first hour, used as the day's label source
    pub time: String,
    /// Maximum wave height over the day's non-null samples
    pub max_wave_height: Option<f64>,
    /// Mean wave height over the day's non-null samples
    pub avg_wave_height: Option<f64>,
    /// Mean wind speed over the day's non-null samples
    pub avg_wind_speed: Option<f64>,
    /// Maximum wind speed over the day's non-null samples
    pub max_wind_speed: Option<f64>,
    /// Representative wind direction: the sample at the lower-median index of
    /// the day's non-null directions. A sample pick, not a circular mean, so
    /// the value is always one that actually occurred.
    pub wind_direction: Option<f64>,
}

/// Collects the non-null samples of one signal for the block `[start, end)`.
///
/// Indexes past the end of `values` count as null, which is how mismatched
/// array lengths are tolerated.
fn compact_block(values: &[Option<f64>], start: usize, end: usize) -> Vec<f64> {
    (start..end)
        .filter_map(|i| values.get(i).copied().flatten())
        .collect()
}

fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Partitions the hourly series into consecutive 24-hour blocks and aggregates
/// each block into a [`DailyAggregate`].
///
/// Produces `min(7, ceil(len / 24))` aggregates; the final block may cover
/// fewer than 24 hours, hours beyond day 7 are ignored, and an empty series
/// yields no aggregates. Each signal is null-filtered independently before
/// reduction, so a missing wave sample does not drop its co-indexed wind
/// sample.
pub fn aggregate_daily(series: &HourlySeries) -> Vec<DailyAggregate> {
    let len = series.time.len();
    let mut days = Vec::with_capacity(MAX_FORECAST_DAYS.min(len.div_ceil(24)));

    for day in 0..MAX_FORECAST_DAYS {
        let start = day * 24;
        if start >= len {
            break;
        }
        let end = (start + 24).min(len);

        let waves = compact_block(&series.wave_height, start, end);
        let winds = compact_block(&series.wind_speed, start, end);
        let dirs = compact_block(&series.wind_direction, start, end);

        days.push(DailyAggregate {
            time: series.time[start].clone(),
            max_wave_height: max_of(&waves),
            avg_wave_height: mean_of(&waves),
            avg_wind_speed: mean_of(&winds),
            max_wind_speed: max_of(&winds),
            wind_direction: dirs.get(dirs.len() / 2).copied(),
        });
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds hourly timestamps starting at 2024-07-15T00:00
    fn hourly_times(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("2024-07-{:02}T{:02}:00", 15 + i / 24, i % 24))
            .collect()
    }

    fn series(len: usize) -> HourlySeries {
        HourlySeries {
            time: hourly_times(len),
            wave_height: vec![Some(1.0); len],
            wind_speed: vec![Some(10.0); len],
            wind_direction: vec![Some(180.0); len],
        }
    }

    #[test]
    fn test_empty_series_yields_no_aggregates() {
        assert!(aggregate_daily(&HourlySeries::default()).is_empty());
    }

    #[test]
    fn test_day_count_matches_ceil_of_hours_over_24() {
        assert_eq!(aggregate_daily(&series(1)).len(), 1);
        assert_eq!(aggregate_daily(&series(24)).len(), 1);
        assert_eq!(aggregate_daily(&series(25)).len(), 2);
        assert_eq!(aggregate_daily(&series(48)).len(), 2);
        assert_eq!(aggregate_daily(&series(168)).len(), 7);
    }

    #[test]
    fn test_extra_days_beyond_seven_are_ignored() {
        let days = aggregate_daily(&series(24 * 10));
        assert_eq!(days.len(), 7);
    }

    #[test]
    fn test_two_day_wave_aggregation() {
        let mut s = series(48);
        s.wave_height = std::iter::repeat(Some(1.0))
            .take(24)
            .chain(std::iter::repeat(Some(2.0)).take(24))
            .collect();
        s.wind_speed = vec![None; 48];
        s.wind_direction = vec![None; 48];

        let days = aggregate_daily(&s);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].max_wave_height, Some(1.0));
        assert_eq!(days[0].avg_wave_height, Some(1.0));
        assert_eq!(days[1].max_wave_height, Some(2.0));
        assert_eq!(days[1].avg_wave_height, Some(2.0));
        assert_eq!(days[0].avg_wind_speed, None);
        assert_eq!(days[0].wind_direction, None);
    }

    #[test]
    fn test_max_is_at_least_avg() {
        let mut s = series(24);
        s.wave_height = (0..24).map(|i| Some(i as f64 * 0.3)).collect();
        let days = aggregate_daily(&s);
        let day = &days[0];
        assert!(day.max_wave_height.unwrap() >= day.avg_wave_height.unwrap());
    }

    #[test]
    fn test_nulls_filtered_per_signal_independently() {
        let mut s = series(24);
        // Hour 0 has a wave sample but no wind; hour 1 the opposite.
        s.wave_height = vec![None; 24];
        s.wind_speed = vec![None; 24];
        s.wave_height[0] = Some(3.0);
        s.wind_speed[1] = Some(20.0);

        let days = aggregate_daily(&s);
        assert_eq!(days[0].max_wave_height, Some(3.0));
        assert_eq!(days[0].avg_wave_height, Some(3.0));
        assert_eq!(days[0].max_wind_speed, Some(20.0));
        assert_eq!(days[0].avg_wind_speed, Some(20.0));
    }

    #[test]
    fn test_direction_is_lower_median_sample() {
        let mut s = series(24);
        s.wind_direction = vec![None; 24];
        s.wind_direction[3] = Some(40.0);
        s.wind_direction[10] = Some(50.0);
        s.wind_direction[20] = Some(400.0);

        let days = aggregate_daily(&s);
        // Compacted list is [40, 50, 400]; lower-median index floor(3/2) = 1.
        assert_eq!(days[0].wind_direction, Some(50.0));
    }

    #[test]
    fn test_direction_is_always_an_actual_sample() {
        let mut s = series(48);
        s.wind_direction = (0..48).map(|i| Some((i * 17 % 360) as f64)).collect();
        let days = aggregate_daily(&s);
        for (d, day) in days.iter().enumerate() {
            let dir = day.wind_direction.unwrap();
            let block: Vec<f64> = s.wind_direction[d * 24..(d + 1) * 24]
                .iter()
                .filter_map(|v| *v)
                .collect();
            assert!(block.contains(&dir), "direction {} not in day {} block", dir, d);
        }
    }

    #[test]
    fn test_empty_direction_array_with_nonempty_time() {
        let s = HourlySeries {
            time: hourly_times(24),
            wave_height: vec![Some(1.5); 24],
            wind_speed: vec![Some(8.0); 24],
            wind_direction: vec![],
        };
        let days = aggregate_daily(&s);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].wind_direction, None);
        assert_eq!(days[0].max_wave_height, Some(1.5));
    }

    #[test]
    fn test_shorter_value_arrays_read_as_null() {
        let s = HourlySeries {
            time: hourly_times(48),
            wave_height: vec![Some(2.0); 24], // second day has no wave data
            wind_speed: vec![Some(5.0); 48],
            wind_direction: vec![Some(90.0); 48],
        };
        let days = aggregate_daily(&s);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].max_wave_height, Some(2.0));
        assert_eq!(days[1].max_wave_height, None);
        assert_eq!(days[1].avg_wind_speed, Some(5.0));
    }

    #[test]
    fn test_day_time_is_blocks_first_hour_even_if_null_sample() {
        let mut s = series(48);
        s.wave_height[24] = None;
        let days = aggregate_daily(&s);
        assert_eq!(days[0].time, "2024-07-15T00:00");
        assert_eq!(days[1].time, "2024-07-16T00:00");
    }

    #[test]
    fn test_partial_day_input_yields_one_aggregate() {
        let days = aggregate_daily(&series(5));
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].avg_wave_height, Some(1.0));
    }

    #[test]
    fn test_aggregation_is_pure() {
        let s = series(60);
        assert_eq!(aggregate_daily(&s), aggregate_daily(&s));
    }

    #[test]
    fn test_deserialize_missing_arrays_as_empty() {
        let s: HourlySeries = serde_json::from_str(r#"{"time": ["2024-07-15T00:00"]}"#)
            .expect("should parse with missing arrays");
        assert_eq!(s.time.len(), 1);
        assert!(s.wave_height.is_empty());

        let days = aggregate_daily(&s);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].max_wave_height, None);
    }

    #[test]
    fn test_deserialize_null_samples() {
        let s: HourlySeries = serde_json::from_str(
            r#"{
                "time": ["2024-07-15T00:00", "2024-07-15T01:00"],
                "wave_height": [null, 1.2],
                "wind_speed": [3.0, null],
                "wind_direction": [null, null]
            }"#,
        )
        .expect("should parse nulls");

        let days = aggregate_daily(&s);
        assert_eq!(days[0].max_wave_height, Some(1.2));
        assert_eq!(days[0].avg_wind_speed, Some(3.0));
        assert_eq!(days[0].wind_direction, None);
    }
}
