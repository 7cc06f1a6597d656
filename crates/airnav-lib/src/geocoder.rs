use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::directory::LocationDirectory;
use crate::distance::Coordinates;
use crate::error::{Error, Result};

const DEFAULT_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1/json";
const API_KEY_ENV: &str = "AIRNAV_GEOCODER_API_KEY";
const ENDPOINT_ENV: &str = "AIRNAV_GEOCODER_URL";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the forward geocoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from `AIRNAV_GEOCODER_API_KEY` and the optional
    /// `AIRNAV_GEOCODER_URL` endpoint override.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(API_KEY_ENV).ok(), env::var(ENDPOINT_ENV).ok())
    }

    /// Build a configuration from already-read variables. Blank values count as unset.
    pub fn from_vars(api_key: Option<String>, endpoint: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey { var: API_KEY_ENV })?;

        let mut config = Self::new(api_key.trim());
        if let Some(endpoint) = endpoint.filter(|url| !url.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// [`LocationDirectory`] backed by the OpenCage forward-geocoding API.
///
/// Every call performs a blocking HTTP request and takes the first result.
/// Nothing is cached or retried here; wrap the geocoder in a
/// [`CachingDirectory`](crate::directory::CachingDirectory) when loading many
/// routes.
#[derive(Debug, Clone)]
pub struct OpenCageGeocoder {
    client: Client,
    config: GeocoderConfig,
}

impl OpenCageGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    fn forward(&self, name: &str) -> Result<ForwardResponse> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .query(&[
                ("q", name),
                ("key", self.config.api_key.as_str()),
                ("limit", "1"),
                ("no_annotations", "1"),
            ])
            .send()
            .map_err(|err| lookup_error(name, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(name, %status, "geocoder rejected request");
            return Err(lookup_error(name, format!("geocoder returned HTTP {status}")));
        }

        response
            .json::<ForwardResponse>()
            .map_err(|err| lookup_error(name, format!("invalid geocoder response: {err}")))
    }
}

impl LocationDirectory for OpenCageGeocoder {
    fn resolve(&self, name: &str) -> Result<Coordinates> {
        let response = self.forward(name)?;
        let coordinates = first_position(name, &response)?;
        debug!(
            name,
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "geocoded location"
        );
        Ok(coordinates)
    }
}

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!("airnav-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    #[serde(default)]
    results: Vec<ForwardResult>,
}

#[derive(Debug, Deserialize)]
struct ForwardResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn first_position(name: &str, response: &ForwardResponse) -> Result<Coordinates> {
    let geometry = response
        .results
        .first()
        .map(|result| &result.geometry)
        .ok_or_else(|| lookup_error(name, "no results".to_string()))?;

    let coordinates = Coordinates::new(geometry.lat, geometry.lng);
    if !coordinates.is_finite() {
        return Err(lookup_error(name, "non-finite coordinates".to_string()));
    }
    Ok(coordinates)
}

fn lookup_error(name: &str, reason: String) -> Error {
    Error::Lookup {
        name: name.to_string(),
        reason,
    }
}
