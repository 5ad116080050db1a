//! REST client for the surf-break backend
//!
//! Thin wrapper over `reqwest` covering the four endpoints the app uses:
//! the state list, the full break list, per-state break names, and the
//! single-break detail (which carries the weather series and forecast text).

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{BreakDetail, SurfBreak};

/// Default backend address when none is configured
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Backend responded with a non-success HTTP status
    #[error("Backend returned HTTP status {0}")]
    Status(u16),

    /// Backend returned a payload with an error message
    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Deserialize)]
struct StatesResponse {
    #[serde(default)]
    states: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BreaksResponse {
    #[serde(default)]
    breaks: Vec<SurfBreak>,
}

#[derive(Debug, Deserialize)]
struct BreakNamesResponse {
    #[serde(default)]
    breaks: Vec<String>,
}

/// Client for the surf-break backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a client pointed at the default backend address
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client pointed at a custom backend address
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the list of states that have breaks
    pub async fn fetch_states(&self) -> Result<Vec<String>, ApiError> {
        let text = self.get_text("/api/states").await?;
        let parsed: StatesResponse = serde_json::from_str(&text)?;
        Ok(parsed.states)
    }

    /// Fetch every break with its full listing fields
    pub async fn fetch_breaks(&self) -> Result<Vec<SurfBreak>, ApiError> {
        let text = self.get_text("/api/breaks").await?;
        let parsed: BreaksResponse = serde_json::from_str(&text)?;
        Ok(parsed.breaks)
    }

    /// Fetch the names of the breaks in one state
    pub async fn fetch_breaks_by_state(&self, state: &str) -> Result<Vec<String>, ApiError> {
        let path = format!("/api/breaks/{}", encode_segment(state));
        let text = self.get_text(&path).await?;
        let parsed: BreakNamesResponse = serde_json::from_str(&text)?;
        Ok(parsed.breaks)
    }

    /// Fetch the full detail for one break, including weather data and the
    /// generated forecast text when the backend has them
    pub async fn fetch_break_detail(&self, name: &str) -> Result<BreakDetail, ApiError> {
        let path = format!("/api/break/{}", encode_segment(name));
        let text = self.get_text(&path).await?;
        parse_detail(&text)
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Percent-encodes a URL path segment so break and state names containing
/// spaces or slashes stay a single segment
fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

/// Parses a detail payload, surfacing a backend-reported error.
///
/// The backend signals lookup failures inside a 200 response via an `error`
/// key, so the payload is inspected before deserializing into [`BreakDetail`].
fn parse_detail(text: &str) -> Result<BreakDetail, ApiError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(ApiError::Backend(message.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_states_response() {
        let parsed: StatesResponse = serde_json::from_str(
            r#"{"states": ["New South Wales", "Queensland", "Victoria"]}"#,
        )
        .expect("states payload should parse");
        assert_eq!(parsed.states.len(), 3);
        assert_eq!(parsed.states[0], "New South Wales");
    }

    #[test]
    fn test_parse_breaks_response() {
        let parsed: BreaksResponse = serde_json::from_str(
            r#"{
                "breaks": [
                    {"id": 1, "name": "Bells Beach", "state": "Victoria",
                     "latitude": -38.3667, "longitude": 144.2833,
                     "skill_level": "advanced"},
                    {"name": "Snapper Rocks", "state": "Queensland",
                     "skill_level": "expert"}
                ]
            }"#,
        )
        .expect("breaks payload should parse");
        assert_eq!(parsed.breaks.len(), 2);
        assert_eq!(parsed.breaks[0].name, "Bells Beach");
        assert_eq!(parsed.breaks[1].id, None);
    }

    #[test]
    fn test_parse_break_names_response() {
        let parsed: BreakNamesResponse =
            serde_json::from_str(r#"{"breaks": ["Bells Beach", "Winkipop"]}"#)
                .expect("names payload should parse");
        assert_eq!(parsed.breaks, vec!["Bells Beach", "Winkipop"]);
    }

    #[test]
    fn test_parse_detail_success() {
        let detail = parse_detail(
            r#"{"name": "Bells Beach", "state": "Victoria", "forecast": "Flat."}"#,
        )
        .expect("detail payload should parse");
        assert_eq!(detail.name, "Bells Beach");
        assert_eq!(detail.forecast.as_deref(), Some("Flat."));
    }

    #[test]
    fn test_parse_detail_backend_error_key() {
        let err = parse_detail(r#"{"error": "Break not found"}"#)
            .expect_err("error payload should be rejected");
        match err {
            ApiError::Backend(message) => assert_eq!(message, "Break not found"),
            other => panic!("expected Backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_detail_invalid_json() {
        assert!(matches!(
            parse_detail("not json"),
            Err(ApiError::ParseError(_))
        ));
    }

    #[test]
    fn test_encode_segment_escapes_spaces_and_slashes() {
        assert_eq!(encode_segment("Bells Beach"), "Bells%20Beach");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("Winkipop"), "Winkipop");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://example.test:9000///");
        assert_eq!(client.base_url, "http://example.test:9000");
    }
}
