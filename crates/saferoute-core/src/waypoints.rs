//! Waypoint synthesis: detour points that bias an external routing engine
//! away from severe hazards and toward nearby safe zones.

use crate::models::{Coordinate, HazardZone, RouteWaypoint};
use crate::spatial::{distance_km, METERS_PER_DEGREE};
use crate::zones::ZoneIndex;

/// Upper bound on synthesized waypoints, keeping the downstream routing
/// request simple regardless of how many zones qualify.
pub const MAX_WAYPOINTS: usize = 3;

/// Hazards below this severity do not justify a detour.
const MIN_AVOIDANCE_SEVERITY: u8 = 3;

/// Extra clearance past a hazard's influence radius when placing an
/// avoidance point, in meters.
const AVOIDANCE_BUFFER_M: f64 = 150.0;

/// Produce an ordered list of at most [`MAX_WAYPOINTS`] intermediate
/// waypoints for the `start` to `end` corridor.
///
/// Hazards intersecting the corridor are handled most-severe first; each one
/// at or above the avoidance threshold contributes a point offset
/// perpendicular to the corridor, on whichever side carries less hazard
/// exposure. Safe zones within reach of the corridor are added with
/// `priority = 1`. The result is sorted by distance from `start`, ascending.
///
/// A degenerate request (`start == end`) yields no waypoints.
pub fn synthesize_waypoints(
    start: Coordinate,
    end: Coordinate,
    zones: &ZoneIndex,
) -> Vec<RouteWaypoint> {
    if start == end {
        return Vec::new();
    }

    let mut corridor_hazards = zones.hazards_near_corridor(start, end);
    // Stable sort: equal severities keep their table order.
    corridor_hazards.sort_by(|a, b| b.severity.cmp(&a.severity));

    let mut waypoints: Vec<RouteWaypoint> = corridor_hazards
        .iter()
        .filter(|hazard| hazard.severity >= MIN_AVOIDANCE_SEVERITY)
        .filter_map(|hazard| avoidance_point(start, end, hazard, zones))
        .collect();

    for zone in zones.safe_zones_near_corridor(start, end) {
        waypoints.push(RouteWaypoint {
            lat: zone.lat,
            lon: zone.lon,
            priority: Some(1),
        });
    }

    waypoints.sort_by(|a, b| {
        distance_km(start, a.location()).total_cmp(&distance_km(start, b.location()))
    });
    waypoints.truncate(MAX_WAYPOINTS);
    waypoints
}

/// Shift a hazard's location perpendicular to the corridor so the route is
/// pulled around its influence radius.
///
/// Both perpendicular sides are candidates; the one overlapping less summed
/// hazard severity wins, with ties going to the positive side.
fn avoidance_point(
    start: Coordinate,
    end: Coordinate,
    hazard: &HazardZone,
    zones: &ZoneIndex,
) -> Option<RouteWaypoint> {
    let dx = end.lon - start.lon;
    let dy = end.lat - start.lat;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        // No corridor direction to offset along
        return None;
    }

    let perp_x = -dy / length;
    let perp_y = dx / length;
    let offset_deg = (hazard.radius_m + AVOIDANCE_BUFFER_M) / METERS_PER_DEGREE;

    let positive = Coordinate::new(
        hazard.lat + perp_y * offset_deg,
        hazard.lon + perp_x * offset_deg,
    );
    let negative = Coordinate::new(
        hazard.lat - perp_y * offset_deg,
        hazard.lon - perp_x * offset_deg,
    );

    let chosen = if zones.severity_around(positive) <= zones.severity_around(negative) {
        positive
    } else {
        negative
    };

    Some(RouteWaypoint {
        lat: chosen.lat,
        lon: chosen.lon,
        priority: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HazardType, SafeZone, SafeZoneType};

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
            zone_type: SafeZoneType::Busy,
            description: "test safe zone".to_string(),
            radius_m,
        }
    }

    const START: Coordinate = Coordinate {
        lat: 42.28,
        lon: -83.75,
    };
    const END: Coordinate = Coordinate {
        lat: 42.28,
        lon: -83.73,
    };

    #[test]
    fn empty_tables_yield_no_waypoints() {
        let zones = ZoneIndex::default();
        assert!(synthesize_waypoints(START, END, &zones).is_empty());
    }

    #[test]
    fn degenerate_request_yields_no_waypoints() {
        let zones = ZoneIndex::new(
            vec![hazard(42.28, -83.75, 5, 250.0)],
            vec![safe_zone(42.28, -83.75, 300.0)],
        );
        assert!(synthesize_waypoints(START, START, &zones).is_empty());
    }

    #[test]
    fn severe_midpoint_hazard_produces_perpendicular_detour() {
        let zones = ZoneIndex::new(vec![hazard(42.28, -83.74, 5, 250.0)], Vec::new());

        let waypoints = synthesize_waypoints(START, END, &zones);
        assert_eq!(waypoints.len(), 1);

        let wp = waypoints[0];
        assert_eq!(wp.priority, None);
        // Corridor runs east-west, so the offset must be purely in latitude
        // and clear the influence radius plus buffer.
        let min_offset_deg = (250.0 + 150.0) / METERS_PER_DEGREE;
        assert!((wp.lat - 42.28).abs() >= min_offset_deg - 1e-12);
        assert!((wp.lon - (-83.74)).abs() < 1e-12);
    }

    #[test]
    fn low_severity_hazard_is_ignored() {
        let zones = ZoneIndex::new(vec![hazard(42.28, -83.74, 2, 250.0)], Vec::new());
        assert!(synthesize_waypoints(START, END, &zones).is_empty());
    }

    #[test]
    fn candidate_side_avoids_other_hazards() {
        // A severe hazard on the corridor, with a second hazard blanketing
        // the northern candidate. The detour must go south.
        let on_path = hazard(42.28, -83.74, 5, 250.0);
        let north_blocker = hazard(42.2845, -83.74, 4, 200.0);
        let zones = ZoneIndex::new(vec![on_path, north_blocker], Vec::new());

        let waypoints = synthesize_waypoints(START, END, &zones);
        let detour = waypoints
            .iter()
            .find(|wp| wp.priority.is_none())
            .expect("avoidance waypoint");
        assert!(detour.lat < 42.28);
    }

    #[test]
    fn nearby_safe_zone_becomes_priority_waypoint() {
        let zones = ZoneIndex::new(Vec::new(), vec![safe_zone(42.2815, -83.745, 300.0)]);

        let waypoints = synthesize_waypoints(START, END, &zones);
        assert_eq!(waypoints.len(), 1);
        assert_eq!(waypoints[0].priority, Some(1));
        assert_eq!(waypoints[0].lat, 42.2815);
    }

    #[test]
    fn output_is_capped_and_sorted_by_distance_from_start() {
        let zones = ZoneIndex::new(
            vec![
                hazard(42.28, -83.748, 5, 200.0),
                hazard(42.28, -83.744, 4, 200.0),
                hazard(42.28, -83.74, 3, 200.0),
                hazard(42.28, -83.736, 5, 200.0),
            ],
            vec![safe_zone(42.2805, -83.7325, 250.0)],
        );

        let waypoints = synthesize_waypoints(START, END, &zones);
        assert_eq!(waypoints.len(), MAX_WAYPOINTS);

        let distances: Vec<f64> = waypoints
            .iter()
            .map(|wp| distance_km(START, wp.location()))
            .collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
