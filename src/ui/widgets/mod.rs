//! Custom widgets for the detail view charts

pub mod chart;

pub use chart::{WaveChart, WindBars};
