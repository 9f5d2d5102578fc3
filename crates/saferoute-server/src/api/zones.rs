//! Zone table endpoints.
//!
//! Serves the loaded hazard and safe-zone tables, e.g. for map overlays.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;
use saferoute_core::{HazardZone, SafeZone};

#[derive(Debug, Serialize)]
pub struct ZoneTablesResponse {
    pub hazards: Vec<HazardZone>,
    pub safe_zones: Vec<SafeZone>,
}

/// List all hazard and safe zones.
pub async fn list_zones(State(state): State<Arc<AppState>>) -> Json<ZoneTablesResponse> {
    Json(ZoneTablesResponse {
        hazards: state.zones().hazards().to_vec(),
        safe_zones: state.zones().safe_zones().to_vec(),
    })
}
