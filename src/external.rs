//! HTTP adapters for remote routing services.
//!
//! Two hosted services are supported: the Google Distance Matrix API and the
//! OpenRouteService matrix API. Both are optional (a client only exists
//! when its API key is present in the environment) and both degrade to
//! `None` on any failure so the caller's geometric fallback takes over.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::traits::DurationProvider;

/// Environment variable holding the Google Distance Matrix API key.
pub const GOOGLE_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable holding the OpenRouteService API key.
pub const ORS_KEY_ENV: &str = "ORS_API_KEY";

#[derive(Debug, Clone)]
pub struct GoogleMatrixConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GoogleMatrixConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://maps.googleapis.com/maps/api/distancematrix/json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Google Distance Matrix client for single origin/destination queries.
#[derive(Debug, Clone)]
pub struct GoogleMatrixClient {
    config: GoogleMatrixConfig,
    client: reqwest::blocking::Client,
}

impl GoogleMatrixClient {
    pub fn new(config: GoogleMatrixConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Build a client from `GOOGLE_MAPS_API_KEY`, if set.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var(GOOGLE_KEY_ENV).ok()?;
        match Self::new(GoogleMatrixConfig::new(api_key)) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "could not build Google matrix client");
                None
            }
        }
    }
}

impl DurationProvider for GoogleMatrixClient {
    fn duration_secs(&self, from: (f64, f64), to: (f64, f64)) -> Option<u32> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("origins", format!("{},{}", from.0, from.1)),
                ("destinations", format!("{},{}", to.0, to.1)),
                ("key", self.config.api_key.clone()),
                ("mode", "driving".to_string()),
                ("departure_time", "now".to_string()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<GoogleMatrixResponse>());

        match response {
            Ok(body) => body.duration_secs(),
            Err(err) => {
                debug!(error = %err, "Google matrix request failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleMatrixResponse {
    rows: Vec<GoogleMatrixRow>,
}

#[derive(Debug, Deserialize)]
struct GoogleMatrixRow {
    elements: Vec<GoogleMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct GoogleMatrixElement {
    status: String,
    duration: Option<GoogleDuration>,
    duration_in_traffic: Option<GoogleDuration>,
}

#[derive(Debug, Deserialize)]
struct GoogleDuration {
    value: f64,
}

impl GoogleMatrixResponse {
    fn duration_secs(&self) -> Option<u32> {
        let element = self.rows.first()?.elements.first()?;
        if element.status != "OK" {
            return None;
        }
        // Prefer duration in traffic when the service reports it.
        let duration = element
            .duration_in_traffic
            .as_ref()
            .or(element.duration.as_ref())?;
        Some(duration.value.round() as u32)
    }
}

#[derive(Debug, Clone)]
pub struct OrsMatrixConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl OrsMatrixConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openrouteservice.org/v2/matrix/driving-car".to_string(),
            timeout_secs: 15,
        }
    }
}

/// OpenRouteService matrix client for single origin/destination queries.
#[derive(Debug, Clone)]
pub struct OrsMatrixClient {
    config: OrsMatrixConfig,
    client: reqwest::blocking::Client,
}

impl OrsMatrixClient {
    pub fn new(config: OrsMatrixConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Build a client from `ORS_API_KEY`, if set.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var(ORS_KEY_ENV).ok()?;
        match Self::new(OrsMatrixConfig::new(api_key)) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "could not build ORS matrix client");
                None
            }
        }
    }
}

impl DurationProvider for OrsMatrixClient {
    fn duration_secs(&self, from: (f64, f64), to: (f64, f64)) -> Option<u32> {
        // ORS expects [lng, lat].
        let body = OrsMatrixRequest {
            locations: [[from.1, from.0], [to.1, to.0]],
            metrics: ["duration"],
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", self.config.api_key.as_str())
            .json(&body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OrsMatrixResponse>());

        match response {
            Ok(body) => body.duration_secs(),
            Err(err) => {
                debug!(error = %err, "ORS matrix request failed");
                None
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct OrsMatrixRequest {
    locations: [[f64; 2]; 2],
    metrics: [&'static str; 1],
}

#[derive(Debug, Deserialize)]
struct OrsMatrixResponse {
    durations: Option<Vec<Vec<f64>>>,
}

impl OrsMatrixResponse {
    fn duration_secs(&self) -> Option<u32> {
        let first_row = self.durations.as_ref()?.first()?;
        let value = *first_row.get(1)?;
        Some(value.round() as u32)
    }
}
