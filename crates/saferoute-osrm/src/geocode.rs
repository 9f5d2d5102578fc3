//! Nominatim client for free-text location resolution.

use anyhow::{Context, Result};
use reqwest::Client;
use saferoute_core::Coordinate;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const RESULT_LIMIT: &str = "5";
const USER_AGENT: &str = concat!("saferoute/", env!("CARGO_PKG_VERSION"));

/// Nominatim serializes lat/lon as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// HTTP client for a Nominatim search endpoint.
pub struct NominatimClient {
    client: Client,
    base_url: String,
    country_codes: Option<String>,
}

impl NominatimClient {
    /// Create a new client. `country_codes` is a comma-separated filter
    /// (e.g. `us`) or `None` for a global search.
    pub fn new(base_url: impl Into<String>, country_codes: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            country_codes: country_codes.filter(|codes| !codes.trim().is_empty()),
        }
    }

    /// Resolve a free-text query to a coordinate.
    ///
    /// Returns `Ok(None)` when the geocoder finds no match; the caller is
    /// responsible for turning that into a user-facing message.
    pub async fn geocode(&self, query: &str) -> Result<Option<Coordinate>> {
        let mut request = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json"), ("limit", RESULT_LIMIT)]);

        if let Some(codes) = self.country_codes.as_deref() {
            request = request.query(&[("countrycodes", codes)]);
        }

        let response = request.send().await.context("Failed to reach geocoder")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Geocoding request failed: {} {}", status, body));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .context("Failed to parse geocoder response")?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = place
            .lat
            .parse()
            .context("Geocoder returned a non-numeric latitude")?;
        let lon: f64 = place
            .lon
            .parse()
            .context("Geocoder returned a non-numeric longitude")?;

        tracing::debug!("Resolved '{}' to {}, {} ({})", query, lat, lon, place.display_name);
        Ok(Some(Coordinate::new(lat, lon)))
    }
}
