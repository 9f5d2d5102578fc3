//! Zone table loading.

use anyhow::{Context, Result};
use saferoute_core::ZoneIndex;

/// Demo zone table bundled with the server; used when no external table is
/// configured.
const BUNDLED_ZONES: &str = include_str!("../data/zones.json");

/// Load the hazard/safe-zone tables from `path`, or fall back to the
/// bundled demo dataset.
pub fn load_zones(path: Option<&str>) -> Result<ZoneIndex> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read zone table {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse zone table {}", path))
        }
        None => serde_json::from_str(BUNDLED_ZONES).context("Bundled zone table is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_zone_table_parses() {
        let zones = load_zones(None).unwrap();
        assert_eq!(zones.hazards().len(), 8);
        assert_eq!(zones.safe_zones().len(), 3);
        assert!(zones
            .hazards()
            .iter()
            .all(|hazard| (1..=5).contains(&hazard.severity) && hazard.radius_m > 0.0));
    }

    #[test]
    fn missing_zone_table_is_an_error() {
        assert!(load_zones(Some("/nonexistent/zones.json")).is_err());
    }
}
