//! HTTP geocoding adapter (Nominatim-compatible search API).

use std::env;
use std::time::Duration;

use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GeocodeError;
use crate::point::Coordinates;
use crate::traits::Geocoder;

pub const ENV_BASE_URL: &str = "ROUTE_PLANNER_GEOCODER_URL";
pub const ENV_API_KEY: &str = "ROUTE_PLANNER_GEOCODER_KEY";
pub const ENV_TIMEOUT_SECS: &str = "ROUTE_PLANNER_GEOCODER_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub api_key: Option<String>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("route-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            api_key: None,
        }
    }
}

impl GeocoderConfig {
    /// Defaults overridden by `ROUTE_PLANNER_GEOCODER_*` environment variables.
    ///
    /// An unparsable timeout is ignored in favour of the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`GeocoderConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            config.api_key = Some(key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "ignoring invalid geocoder timeout"),
            }
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

impl HttpGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    /// Use a caller-built client; `config.timeout_secs` and `user_agent` are
    /// then the client's business.
    pub fn with_client(config: GeocoderConfig, client: reqwest::blocking::Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut query = vec![("format", "json"), ("limit", "1"), ("q", address)];
        if let Some(key) = &self.config.api_key {
            query.push(("key", key.as_str()));
        }

        let places = self
            .client
            .get(url)
            .query(&query)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<SearchResult>>())
            .inspect_err(|err| warn!(%err, address, "geocoding request failed"))?;

        let coordinates = first_match(address, places)?;
        debug!(address, lat = coordinates.lat, lng = coordinates.lng, "geocoded address");
        Ok(coordinates)
    }
}

/// Geocode every address in parallel, keeping input order.
///
/// Fails with the error of the first failing address in input order.
pub fn geocode_all<G, A>(geocoder: &G, addresses: &[A]) -> Result<Vec<Coordinates>, GeocodeError>
where
    G: Geocoder + Sync,
    A: AsRef<str> + Sync,
{
    let results: Vec<_> = addresses
        .par_iter()
        .map(|address| geocoder.geocode(address.as_ref()))
        .collect();
    results.into_iter().collect()
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

fn first_match(address: &str, places: Vec<SearchResult>) -> Result<Coordinates, GeocodeError> {
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NoMatch {
            address: address.to_string(),
        })?;

    let invalid = |detail: String| GeocodeError::InvalidResponse {
        address: address.to_string(),
        detail,
    };
    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|err| invalid(format!("lat {:?}: {}", place.lat, err)))?;
    let lng = place
        .lon
        .parse::<f64>()
        .map_err(|err| invalid(format!("lon {:?}: {}", place.lon, err)))?;

    let coordinates = Coordinates::new(lat, lng);
    if !coordinates.is_valid() {
        return Err(invalid(format!("({}, {}) out of range", lat, lng)));
    }
    Ok(coordinates)
}
