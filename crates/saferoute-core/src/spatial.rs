//! Spatial math for corridor checks and distance calculations.

use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Meters per degree of latitude/longitude used when converting zone radii
/// to degree offsets. A small-angle approximation that holds at city scale
/// in mid latitudes; not geodesically exact.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Great-circle distance between two points in kilometers (Haversine).
///
/// Symmetric, and zero exactly when both points are equal.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Minimum distance in kilometers from a point to a line segment.
///
/// The projection runs in the degrees domain (segments are short at city
/// scale, so degree differences are close enough to distance-proportional),
/// clamped to the segment rather than the infinite line. The final distance
/// to the closest point reuses [`distance_km`].
pub fn point_to_segment_distance_km(
    point: Coordinate,
    seg_start: Coordinate,
    seg_end: Coordinate,
) -> f64 {
    let ax = point.lat - seg_start.lat;
    let ay = point.lon - seg_start.lon;
    let cx = seg_end.lat - seg_start.lat;
    let cy = seg_end.lon - seg_start.lon;

    let len_sq = cx * cx + cy * cy;
    if len_sq == 0.0 {
        // Degenerate segment
        return distance_km(point, seg_start);
    }

    let t = ((ax * cx + ay * cy) / len_sq).clamp(0.0, 1.0);
    let closest = Coordinate::new(seg_start.lat + t * cx, seg_start.lon + t * cy);
    distance_km(point, closest)
}
