//! REST API routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::zones;
use crate::planner::{plan_route, PlanRouteRequest, PlanRouteResponse};
use crate::state::AppState;
use saferoute_core::{sample_stride, score_route, Coordinate, SafetyRating};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/zones", get(zones::list_zones))
        .route("/v1/routes/plan", post(plan_route_handler))
        .route("/v1/routes/score", post(score_route_handler))
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
pub struct ScoreRouteRequest {
    /// The polyline of an externally computed route.
    pub coordinates: Vec<Coordinate>,
}

#[derive(Debug, Serialize)]
pub struct ScoreRouteResponse {
    pub safety_score: u8,
    pub safety_rating: SafetyRating,
    /// How many polyline points were actually sampled.
    pub sampled_points: usize,
}

// === Handlers ===

async fn plan_route_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRouteRequest>,
) -> impl IntoResponse {
    let response: PlanRouteResponse = plan_route(state.as_ref(), request).await;
    let status = if response.ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

async fn score_route_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRouteRequest>,
) -> Json<ScoreRouteResponse> {
    let safety_score = score_route(&request.coordinates, state.zones());
    let sampled_points = if request.coordinates.is_empty() {
        0
    } else {
        request.coordinates.len().div_ceil(sample_stride(request.coordinates.len()))
    };

    Json(ScoreRouteResponse {
        safety_score,
        safety_rating: SafetyRating::from_score(safety_score),
        sampled_points,
    })
}
