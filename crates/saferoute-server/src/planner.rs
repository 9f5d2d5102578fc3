//! Route planning pipeline: resolve locations, synthesize waypoints, call
//! the routing engine, score the result.

use chrono::{DateTime, Utc};
use saferoute_core::{
    score_route, synthesize_waypoints, Coordinate, RouteWaypoint, SafetyRating,
};
use saferoute_osrm::RoutingError;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// A location reference in a planning request: either a coordinate pair or
/// a free-text query for the geocoder.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocationRef {
    Point(Coordinate),
    Query(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanRouteRequest {
    pub start: LocationRef,
    pub end: LocationRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanRouteResponse {
    pub ok: bool,
    pub route_id: Option<String>,
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
    /// Synthesized intermediate waypoints fed to the routing engine.
    pub waypoints: Vec<RouteWaypoint>,
    pub polyline: Vec<Coordinate>,
    pub distance_km: Option<f64>,
    pub duration_min: Option<f64>,
    pub safety_score: Option<u8>,
    pub safety_rating: Option<SafetyRating>,
    pub planned_at: DateTime<Utc>,
    pub errors: Vec<String>,
}

impl PlanRouteResponse {
    fn failure(errors: Vec<String>) -> Self {
        Self {
            ok: false,
            route_id: None,
            start: None,
            end: None,
            waypoints: Vec::new(),
            polyline: Vec::new(),
            distance_km: None,
            duration_min: None,
            safety_score: None,
            safety_rating: None,
            planned_at: Utc::now(),
            errors,
        }
    }
}

/// Plan a hazard-aware route between two locations.
///
/// A linear sequence of awaits: resolve end, resolve start, synthesize
/// waypoints, route through them, score the returned polyline. Collaborator
/// failures (geocode miss, routing engine error) come back as user-facing
/// messages with `ok = false`.
pub async fn plan_route(state: &AppState, request: PlanRouteRequest) -> PlanRouteResponse {
    let end = match resolve_location(state, &request.end).await {
        Ok(Some(coordinate)) => coordinate,
        Ok(None) => {
            return PlanRouteResponse::failure(vec![
                "Destination not found. Please try a different address.".to_string(),
            ]);
        }
        Err(message) => return PlanRouteResponse::failure(vec![message]),
    };

    let start = match resolve_location(state, &request.start).await {
        Ok(Some(coordinate)) => coordinate,
        Ok(None) => {
            return PlanRouteResponse::failure(vec![
                "Start location not found. Please try a different address.".to_string(),
            ]);
        }
        Err(message) => return PlanRouteResponse::failure(vec![message]),
    };

    let waypoints = synthesize_waypoints(start, end, state.zones());

    let mut stops = Vec::with_capacity(waypoints.len() + 2);
    stops.push(start);
    stops.extend(waypoints.iter().map(RouteWaypoint::location));
    stops.push(end);

    let route = match state.router().route(&stops).await {
        Ok(route) => route,
        Err(RoutingError::Rejected { .. }) | Err(RoutingError::NoRoute) => {
            return PlanRouteResponse::failure(vec![
                "Unable to calculate a route. Please try different locations.".to_string(),
            ]);
        }
        Err(RoutingError::Transport(err)) => {
            tracing::error!("Routing engine unreachable: {:#}", err);
            return PlanRouteResponse::failure(vec![
                "Routing service is unavailable. Please try again later.".to_string(),
            ]);
        }
    };

    let safety_score = score_route(&route.coordinates, state.zones());
    let route_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Planned route {} with {} waypoints, {:.1}km, safety {}/100",
        route_id,
        waypoints.len(),
        route.distance_m / 1000.0,
        safety_score
    );

    PlanRouteResponse {
        ok: true,
        route_id: Some(route_id),
        start: Some(start),
        end: Some(end),
        waypoints,
        polyline: route.coordinates,
        distance_km: Some(route.distance_m / 1000.0),
        duration_min: Some(route.duration_s / 60.0),
        safety_score: Some(safety_score),
        safety_rating: Some(SafetyRating::from_score(safety_score)),
        planned_at: Utc::now(),
        errors: Vec::new(),
    }
}

async fn resolve_location(
    state: &AppState,
    location: &LocationRef,
) -> Result<Option<Coordinate>, String> {
    match location {
        LocationRef::Point(coordinate) => Ok(Some(*coordinate)),
        LocationRef::Query(query) => {
            if query.trim().is_empty() {
                return Err("Please enter a location.".to_string());
            }
            state.resolve_query(query).await.map_err(|err| {
                tracing::error!("Geocoding failed for '{}': {:#}", query, err);
                "Geocoding service is unavailable. Please try again later.".to_string()
            })
        }
    }
}
