//! Safety scoring for computed route polylines.

use crate::models::Coordinate;
use crate::spatial::distance_km;
use crate::zones::ZoneIndex;

/// Target number of samples per scored route. Long polylines are strided so
/// scoring cost stays bounded.
const MAX_SAMPLES: usize = 50;

/// Accumulated risk at which the score bottoms out at 0.
const RISK_CEILING: f64 = 50.0;

/// Flat risk reduction per sample inside a safe zone.
const SAFE_ZONE_BONUS: f64 = 0.5;

/// Sampling stride for a polyline of `len` coordinates.
pub fn sample_stride(len: usize) -> usize {
    (len / MAX_SAMPLES).max(1)
}

/// Score a route polyline for safety exposure, 0-100 (higher is safer).
///
/// Samples the polyline and accumulates, per sample, a risk contribution of
/// `(1 - d/radius) * severity` for every hazard whose influence radius
/// covers the sample (maximal at the center, zero at the boundary), minus a
/// flat bonus for each covering safe zone. The total is normalized against
/// [`RISK_CEILING`] and clamped.
///
/// An empty polyline observes no risk and scores 100.
pub fn score_route(route: &[Coordinate], zones: &ZoneIndex) -> u8 {
    let stride = sample_stride(route.len());
    let mut total_risk = 0.0;

    for sample in route.iter().step_by(stride) {
        for hazard in zones.hazards() {
            let distance_m = distance_km(*sample, hazard.location()) * 1000.0;
            if distance_m < hazard.radius_m {
                total_risk += (1.0 - distance_m / hazard.radius_m) * f64::from(hazard.severity);
            }
        }

        for zone in zones.safe_zones() {
            let distance_m = distance_km(*sample, zone.location()) * 1000.0;
            if distance_m < zone.radius_m {
                total_risk -= SAFE_ZONE_BONUS;
            }
        }
    }

    let score = (100.0 - (total_risk / RISK_CEILING) * 100.0).clamp(0.0, 100.0);
    score.round() as u8
}
