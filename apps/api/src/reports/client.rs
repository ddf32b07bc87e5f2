//! HTTP client for the VedicAstro planet-report API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{field_text, Planet, Profile};
use crate::reports::ReportSource;

const REPORT_API_URL: &str = "https://api.vedicastroapi.com/v3-json/horoscope/planet-report";
const REPORT_LANG: &str = "en";
/// Upstream convention: a successful body carries `"status": 200`.
const SUCCESS_STATUS: i64 = 200;

/// Birthplace sent with every request. City and state from the profile are
/// not geocoded yet, so these stay fixed.
pub const LATITUDE: i32 = 19;
pub const LONGITUDE: i32 = 72;
pub const TIMEZONE: i32 = 5;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Report API returned HTTP {http} with status {embedded:?}")]
    Status { http: u16, embedded: Option<i64> },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Report API returned an empty response list")]
    Empty,
}

#[derive(Debug, Serialize)]
struct PlanetReportQuery<'a> {
    api_key: &'a str,
    dob: Option<String>,
    tob: Option<String>,
    lat: i32,
    lon: i32,
    tz: i32,
    planet: &'a str,
    lang: &'a str,
}

#[derive(Clone)]
pub struct VedicAstroClient {
    client: Client,
    api_key: String,
}

impl VedicAstroClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ReportSource for VedicAstroClient {
    async fn fetch_report(&self, profile: &Profile, planet: Planet) -> Result<Value, ReportError> {
        let query = PlanetReportQuery {
            api_key: &self.api_key,
            dob: field_text(&profile.dob),
            tob: field_text(&profile.tob),
            lat: LATITUDE,
            lon: LONGITUDE,
            tz: TIMEZONE,
            planet: planet.as_str(),
            lang: REPORT_LANG,
        };

        let response = self.client.get(REPORT_API_URL).query(&query).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!("Report API answered {planet} with HTTP {status} ({} bytes)", body.len());

        extract_report(status, &body)
    }
}

/// Applies the upstream success rule: HTTP 200, embedded `status` 200, and a
/// non-empty `response` list whose first element is the report.
fn extract_report(http_status: u16, body: &[u8]) -> Result<Value, ReportError> {
    let parsed = serde_json::from_slice::<Value>(body);

    if http_status != 200 {
        let embedded = parsed.ok().and_then(|v| v.get("status").and_then(Value::as_i64));
        return Err(ReportError::Status {
            http: http_status,
            embedded,
        });
    }

    let mut body = parsed?;
    let embedded = body.get("status").and_then(Value::as_i64);
    if embedded != Some(SUCCESS_STATUS) {
        return Err(ReportError::Status {
            http: http_status,
            embedded,
        });
    }

    body.pointer_mut("/response/0")
        .map(Value::take)
        .ok_or(ReportError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_success_takes_first_response_element() {
        let raw = body(json!({
            "status": 200,
            "response": [{ "planet_considered": "Sun" }, { "ignored": true }]
        }));
        assert_eq!(
            extract_report(200, &raw).unwrap(),
            json!({ "planet_considered": "Sun" })
        );
    }

    #[test]
    fn test_embedded_failure_status_is_an_error() {
        let raw = body(json!({ "status": 402, "response": "Out of API calls" }));
        assert!(matches!(
            extract_report(200, &raw),
            Err(ReportError::Status {
                http: 200,
                embedded: Some(402)
            })
        ));
    }

    #[test]
    fn test_http_failure_is_an_error_even_with_good_body() {
        let raw = body(json!({ "status": 200, "response": [{}] }));
        assert!(matches!(
            extract_report(503, &raw),
            Err(ReportError::Status { http: 503, .. })
        ));
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(matches!(
            extract_report(200, b"<html>gateway</html>"),
            Err(ReportError::Parse(_))
        ));
        assert!(matches!(
            extract_report(502, b"<html>gateway</html>"),
            Err(ReportError::Status {
                http: 502,
                embedded: None
            })
        ));
    }

    #[test]
    fn test_empty_response_list_is_an_error() {
        let raw = body(json!({ "status": 200, "response": [] }));
        assert!(matches!(extract_report(200, &raw), Err(ReportError::Empty)));
    }

    #[test]
    fn test_query_carries_fixed_location_and_language() {
        let query = PlanetReportQuery {
            api_key: "k",
            dob: Some("01/01/2000".to_string()),
            tob: None,
            lat: LATITUDE,
            lon: LONGITUDE,
            tz: TIMEZONE,
            planet: Planet::Venus.as_str(),
            lang: REPORT_LANG,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["lat"], 19);
        assert_eq!(value["lon"], 72);
        assert_eq!(value["tz"], 5);
        assert_eq!(value["planet"], "Venus");
        assert_eq!(value["lang"], "en");
    }
}
