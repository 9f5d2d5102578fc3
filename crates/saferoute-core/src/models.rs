//! Core data models for hazard-aware routing.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees (WGS84).
///
/// The core performs no range validation; callers are expected to supply
/// valid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    /// Accepts `lng` on the wire for compatibility with older zone tables.
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Category of a hazard zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    /// Reported criminal activity
    Crime,
    /// Poor or absent street lighting
    Lighting,
    /// Anything else flagged as a concern (isolated area, construction, ...)
    Other,
}

/// A circular area flagged with a safety concern.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardZone {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
    #[serde(rename = "type")]
    pub hazard_type: HazardType,
    /// Severity on a 1 (minor) to 5 (avoid) scale.
    pub severity: u8,
    pub description: String,
    /// Radius of influence in meters.
    #[serde(alias = "radius")]
    pub radius_m: f64,
}

impl HazardZone {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Category of a safe zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeZoneType {
    /// Police station or similar presence
    Police,
    /// Well-populated area
    Busy,
    /// University campus, usually well lit
    Campus,
}

/// A circular area associated with reduced risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeZone {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
    #[serde(rename = "type")]
    pub zone_type: SafeZoneType,
    pub description: String,
    #[serde(alias = "radius")]
    pub radius_m: f64,
}

impl SafeZone {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// An intermediate coordinate inserted between start and end to bias the
/// downstream routing engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteWaypoint {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
    /// Set to 1 for safe-zone waypoints. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl RouteWaypoint {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Coarse rating derived from a 0-100 safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyRating {
    /// Score 80 and above
    Safe,
    /// Score 60-79
    Moderate,
    /// Score below 60
    Risky,
}

impl SafetyRating {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            SafetyRating::Safe
        } else if score >= 60 {
            SafetyRating::Moderate
        } else {
            SafetyRating::Risky
        }
    }
}
