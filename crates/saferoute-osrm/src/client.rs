//! OSRM HTTP client for the external routing engine.

use anyhow::Context;
use reqwest::Client;
use saferoute_core::Coordinate;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors surfaced by the routing engine.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// OSRM answered but declined the request (bad coordinates, no snapping
    /// candidates, unsupported profile, ...).
    #[error("routing engine rejected the request: {code} {message}")]
    Rejected { code: String, message: String },
    /// OSRM answered Ok but produced no routes.
    #[error("routing engine returned no routes")]
    NoRoute,
    /// Transport or decoding failure.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

/// A successfully computed route: the polyline plus its summary.
#[derive(Debug, Clone)]
pub struct RouteResult {
    pub coordinates: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry; positions are `[lon, lat]`.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// HTTP client for an OSRM `route/v1` service.
pub struct OsrmClient {
    client: Client,
    base_url: String,
    profile: String,
}

impl OsrmClient {
    /// Create a new client. `base_url` points at the service root (e.g.
    /// `https://router.project-osrm.org/route/v1`), `profile` is the travel
    /// profile the server exposes.
    pub fn new(base_url: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            profile: profile.into(),
        }
    }

    /// Request a route through the given stops, in order.
    ///
    /// Returns the full polyline plus total distance and travel time.
    pub async fn route(&self, stops: &[Coordinate]) -> Result<RouteResult, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::Transport(anyhow::anyhow!(
                "need at least 2 stops"
            )));
        }

        let path = stops
            .iter()
            .map(|stop| format!("{},{}", stop.lon, stop.lat))
            .collect::<Vec<_>>()
            .join(";");
        let url = format!("{}/{}/{}", self.base_url, self.profile, path);

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await
            .context("Failed to reach routing engine")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Transport(anyhow::anyhow!(
                "Routing request failed: {} {}",
                status,
                body
            )));
        }

        let payload: OsrmResponse = response
            .json()
            .await
            .context("Failed to parse routing response")?;

        if payload.code != "Ok" {
            return Err(RoutingError::Rejected {
                code: payload.code,
                message: payload.message.unwrap_or_default(),
            });
        }

        let route = payload.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        tracing::debug!(
            "Routing engine returned {} points, {:.0}m",
            route.geometry.coordinates.len(),
            route.distance
        );

        Ok(RouteResult {
            coordinates: route
                .geometry
                .coordinates
                .into_iter()
                .map(|[lon, lat]| Coordinate::new(lat, lon))
                .collect(),
            distance_m: route.distance,
            duration_s: route.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_osrm_route_payload() {
        let raw = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1523.4,
                "duration": 1097.0,
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-83.748, 42.281], [-83.740, 42.282]]
                }
            }],
            "waypoints": []
        }"#;
        let payload: OsrmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.code, "Ok");
        let route = &payload.routes[0];
        assert_eq!(route.geometry.coordinates.len(), 2);
        // GeoJSON order is lon,lat
        assert_eq!(route.geometry.coordinates[0][1], 42.281);
    }

    #[test]
    fn parses_osrm_error_payload() {
        let raw = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let payload: OsrmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.code, "NoRoute");
        assert!(payload.routes.is_empty());
    }
}
