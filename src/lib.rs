//! Wavereader library
//!
//! Exposes the application modules for use by the binary and integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod favorites;
pub mod filter;
pub mod forecast;
pub mod format;
pub mod ui;
