pub mod models;
pub mod score;
pub mod spatial;
pub mod waypoints;
pub mod zones;

pub use models::{
    Coordinate, HazardType, HazardZone, RouteWaypoint, SafeZone, SafeZoneType, SafetyRating,
};
pub use score::{sample_stride, score_route};
pub use spatial::{distance_km, point_to_segment_distance_km};
pub use waypoints::{synthesize_waypoints, MAX_WAYPOINTS};
pub use zones::ZoneIndex;
