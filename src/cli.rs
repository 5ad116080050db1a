//! Command-line interface parsing
//!
//! Supports jumping straight to a filtered list (`--state`) or to the
//! favorites view (`--favorites`), and pointing the client at a non-default
//! backend (`--url`).

use clap::Parser;

/// Wavereader - browse surf breaks and their 7-day forecasts
#[derive(Parser, Debug)]
#[command(name = "wavereader")]
#[command(about = "Surf break conditions and 7-day wave/wind forecasts")]
#[command(version)]
pub struct Cli {
    /// Start with the break list filtered to this state
    ///
    /// Example: wavereader --state "Victoria"
    #[arg(long, value_name = "STATE")]
    pub state: Option<String>,

    /// Start in the favorites view
    #[arg(long)]
    pub favorites: bool,

    /// Backend base URL (default: http://localhost:8000)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Pre-applied state filter, if any
    pub initial_state: Option<String>,
    /// Whether to open the favorites view once data is loaded
    pub start_in_favorites: bool,
    /// Backend base URL override
    pub base_url: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            initial_state: cli.state.clone(),
            start_in_favorites: cli.favorites,
            base_url: cli.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["wavereader"]);
        assert!(cli.state.is_none());
        assert!(!cli.favorites);
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_cli_parse_state_filter() {
        let cli = Cli::parse_from(["wavereader", "--state", "Victoria"]);
        assert_eq!(cli.state.as_deref(), Some("Victoria"));
    }

    #[test]
    fn test_cli_parse_favorites_flag() {
        let cli = Cli::parse_from(["wavereader", "--favorites"]);
        assert!(cli.favorites);
    }

    #[test]
    fn test_cli_parse_url_override() {
        let cli = Cli::parse_from(["wavereader", "--url", "http://example.test:9000"]);
        assert_eq!(cli.url.as_deref(), Some("http://example.test:9000"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.initial_state.is_none());
        assert!(!config.start_in_favorites);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_startup_config_from_cli() {
        let cli = Cli::parse_from(["wavereader", "--state", "Queensland", "--favorites"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.initial_state.as_deref(), Some("Queensland"));
        assert!(config.start_in_favorites);
    }

    #[test]
    fn test_flags_combine_independently() {
        let cli = Cli::parse_from(["wavereader", "--url", "http://localhost:1234"]);
        let config = StartupConfig::from_cli(&cli);
        assert!(config.initial_state.is_none());
        assert!(!config.start_in_favorites);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:1234"));
    }
}
