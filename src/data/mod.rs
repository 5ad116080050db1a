//! Core data models for the surf-break browser
//!
//! Wire-level types mirroring the backend's REST payloads, plus the client
//! that fetches them. Fields the backend may omit are optional or defaulted
//! so partial payloads degrade instead of failing to parse.

pub mod client;

pub use client::{ApiClient, ApiError};

use serde::{Deserialize, Serialize};

use crate::forecast::HourlySeries;

/// A surf break as listed by `/api/breaks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfBreak {
    /// Database id, when the backend provides one
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique break name, used as the detail-lookup key
    pub name: String,
    /// State the break is in
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Free-form skill level label (e.g. "beginner", "advanced")
    #[serde(default)]
    pub skill_level: String,
}

/// Weather summary and hourly series attached to a break detail payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    #[serde(default)]
    pub wave_height_max: Option<f64>,
    #[serde(default)]
    pub wave_period_max: Option<f64>,
    #[serde(default)]
    pub wind_speed_max: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    /// Raw hourly series feeding the forecast charts; may be absent entirely
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Full break detail from `/api/break/:name`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub wave_direction: Option<String>,
    #[serde(default)]
    pub bottom_type: Option<String>,
    #[serde(default)]
    pub break_type: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub ideal_wind: Option<String>,
    #[serde(default)]
    pub ideal_tide: Option<String>,
    #[serde(default)]
    pub ideal_swell_size: Option<String>,
    /// Present only when the backend could reach the weather provider
    #[serde(default)]
    pub weather_data: Option<WeatherData>,
    /// Generated daily surf report, with `**bold**` and newline markup
    #[serde(default)]
    pub forecast: Option<String>,
}

impl BreakDetail {
    /// The hourly series to chart, if the payload carried one
    pub fn hourly(&self) -> Option<&HourlySeries> {
        self.weather_data.as_ref().and_then(|w| w.hourly.as_ref())
    }
}
