//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub osrm_url: String,
    pub osrm_profile: String,
    pub nominatim_url: String,
    pub geocode_countries: Option<String>,
    pub zones_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SAFEROUTE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            osrm_url: env::var("SAFEROUTE_OSRM_URL")
                .unwrap_or_else(|_| "https://router.project-osrm.org/route/v1".to_string()),
            // The public OSRM server only serves the driving profile; it
            // still routes reliably for short urban trips.
            osrm_profile: env::var("SAFEROUTE_OSRM_PROFILE")
                .unwrap_or_else(|_| "driving".to_string()),
            nominatim_url: env::var("SAFEROUTE_NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            geocode_countries: Some(
                env::var("SAFEROUTE_GEOCODE_COUNTRIES").unwrap_or_else(|_| "us".to_string()),
            )
            .filter(|codes| !codes.is_empty()),
            zones_path: env::var("SAFEROUTE_ZONES_PATH").ok(),
        }
    }
}
