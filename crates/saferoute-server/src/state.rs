//! Shared application state.

use anyhow::Result;
use dashmap::DashMap;
use saferoute_core::{Coordinate, ZoneIndex};
use saferoute_osrm::{NominatimClient, OsrmClient};

use crate::config::Config;

/// Application state: the immutable zone tables, the external-service
/// clients, and a cache of resolved geocoding queries.
pub struct AppState {
    zones: ZoneIndex,
    router: OsrmClient,
    geocoder: NominatimClient,
    geocode_cache: DashMap<String, Coordinate>,
}

impl AppState {
    pub fn new(config: &Config, zones: ZoneIndex) -> Self {
        Self {
            zones,
            router: OsrmClient::new(&config.osrm_url, &config.osrm_profile),
            geocoder: NominatimClient::new(&config.nominatim_url, config.geocode_countries.clone()),
            geocode_cache: DashMap::new(),
        }
    }

    pub fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    pub fn router(&self) -> &OsrmClient {
        &self.router
    }

    /// Resolve a free-text location, memoizing successful lookups.
    pub async fn resolve_query(&self, query: &str) -> Result<Option<Coordinate>> {
        let key = query.trim().to_lowercase();
        if let Some(cached) = self.geocode_cache.get(&key) {
            return Ok(Some(*cached));
        }

        let resolved = self.geocoder.geocode(query).await?;
        if let Some(coordinate) = resolved {
            self.geocode_cache.insert(key, coordinate);
        }
        Ok(resolved)
    }
}
