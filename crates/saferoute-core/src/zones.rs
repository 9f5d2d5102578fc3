//! Immutable hazard and safe-zone tables.

use crate::models::{Coordinate, HazardZone, SafeZone};
use crate::spatial::{distance_km, point_to_segment_distance_km};
use serde::{Deserialize, Serialize};

/// Extra corridor margin around a hazard's influence radius, in meters.
const HAZARD_CORRIDOR_BUFFER_M: f64 = 100.0;

/// How far off the direct corridor a safe zone may sit and still be worth
/// routing through, in meters.
const SAFE_ZONE_CORRIDOR_M: f64 = 500.0;

/// The loaded hazard and safe-zone tables.
///
/// Built once from externally supplied records and never mutated afterwards.
/// Passed by reference into the waypoint synthesizer and route scorer, which
/// keeps scoring deterministic and lets tests inject synthetic tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneIndex {
    #[serde(default)]
    hazards: Vec<HazardZone>,
    #[serde(default)]
    safe_zones: Vec<SafeZone>,
}

impl ZoneIndex {
    pub fn new(hazards: Vec<HazardZone>, safe_zones: Vec<SafeZone>) -> Self {
        Self {
            hazards,
            safe_zones,
        }
    }

    pub fn hazards(&self) -> &[HazardZone] {
        &self.hazards
    }

    pub fn safe_zones(&self) -> &[SafeZone] {
        &self.safe_zones
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty() && self.safe_zones.is_empty()
    }

    /// Hazards whose influence radius (plus a 100 m buffer) intersects the
    /// direct start-end corridor.
    pub fn hazards_near_corridor(&self, start: Coordinate, end: Coordinate) -> Vec<&HazardZone> {
        self.hazards
            .iter()
            .filter(|hazard| {
                let dist_km = point_to_segment_distance_km(hazard.location(), start, end);
                dist_km < (hazard.radius_m + HAZARD_CORRIDOR_BUFFER_M) / 1000.0
            })
            .collect()
    }

    /// Safe zones within 500 m of the direct start-end corridor.
    pub fn safe_zones_near_corridor(&self, start: Coordinate, end: Coordinate) -> Vec<&SafeZone> {
        self.safe_zones
            .iter()
            .filter(|zone| {
                point_to_segment_distance_km(zone.location(), start, end) * 1000.0
                    < SAFE_ZONE_CORRIDOR_M
            })
            .collect()
    }

    /// Summed severity of every hazard whose influence radius covers `point`.
    ///
    /// Used to compare avoidance candidates: a candidate sitting inside two
    /// severity-4 zones scores 8, an open one scores 0.
    pub fn severity_around(&self, point: Coordinate) -> u32 {
        self.hazards
            .iter()
            .filter(|hazard| distance_km(point, hazard.location()) < hazard.radius_m / 1000.0)
            .map(|hazard| u32::from(hazard.severity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HazardType, SafeZoneType};

    fn hazard(lat: f64, lon: f64, severity: u8, radius_m: f64) -> HazardZone {
        HazardZone {
            lat,
            lon,
            hazard_type: HazardType::Crime,
            severity,
            description: "test hazard".to_string(),
            radius_m,
        }
    }

    fn safe_zone(lat: f64, lon: f64, radius_m: f64) -> SafeZone {
        SafeZone {
            lat,
            lon,
            zone_type: SafeZoneType::Police,
            description: "test safe zone".to_string(),
            radius_m,
        }
    }

    #[test]
    fn corridor_filter_keeps_nearby_hazards_only() {
        let start = Coordinate::new(42.28, -83.75);
        let end = Coordinate::new(42.28, -83.73);
        // ~150m north of the corridor vs ~2km north of it
        let near = hazard(42.2813, -83.74, 4, 200.0);
        let far = hazard(42.298, -83.74, 5, 200.0);
        let index = ZoneIndex::new(vec![near, far], Vec::new());

        let matched = index.hazards_near_corridor(start, end);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].lat, 42.2813);
    }

    #[test]
    fn safe_zone_corridor_uses_500m_cutoff() {
        let start = Coordinate::new(42.28, -83.75);
        let end = Coordinate::new(42.28, -83.73);
        // ~330m off the corridor is in, ~1.1km is out
        let near = safe_zone(42.283, -83.74, 300.0);
        let far = safe_zone(42.29, -83.74, 300.0);
        let index = ZoneIndex::new(Vec::new(), vec![near, far]);

        let matched = index.safe_zones_near_corridor(start, end);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].lat, 42.283);
    }

    #[test]
    fn severity_sums_over_covering_hazards() {
        let point = Coordinate::new(42.28, -83.74);
        let index = ZoneIndex::new(
            vec![
                hazard(42.28, -83.74, 4, 200.0),
                hazard(42.2805, -83.74, 3, 200.0),
                hazard(42.30, -83.74, 5, 200.0),
            ],
            Vec::new(),
        );
        assert_eq!(index.severity_around(point), 7);
    }

    #[test]
    fn parses_legacy_zone_table_json() {
        let raw = r#"{
            "hazards": [
                { "lat": 42.2810, "lng": -83.7480, "type": "crime", "severity": 4,
                  "description": "High crime area", "radius": 200 }
            ],
            "safe_zones": [
                { "lat": 42.2808, "lng": -83.7430, "type": "police",
                  "description": "Police station nearby", "radius": 300 }
            ]
        }"#;
        let index: ZoneIndex = serde_json::from_str(raw).unwrap();
        assert_eq!(index.hazards().len(), 1);
        assert_eq!(index.hazards()[0].lon, -83.7480);
        assert_eq!(index.hazards()[0].radius_m, 200.0);
        assert_eq!(index.safe_zones().len(), 1);
        assert_eq!(index.safe_zones()[0].zone_type, SafeZoneType::Police);
    }
}
