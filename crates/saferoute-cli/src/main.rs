//! Command-line client for the SafeRoute server.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use saferoute_core::{Coordinate, HazardZone, RouteWaypoint, SafeZone, SafetyRating};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Hazard-aware route planning client", long_about = None)]
struct Cli {
    /// SafeRoute server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a safe route between two locations
    Plan {
        /// Start as "lat,lon" or a free-text address
        #[arg(long)]
        from: String,
        /// Destination as "lat,lon" or a free-text address
        #[arg(long)]
        to: String,
    },
    /// Score an existing route polyline from a JSON file
    Score {
        /// File containing `{"coordinates": [...]}` or a bare coordinate array
        route: PathBuf,
    },
    /// Show the server's hazard and safe-zone tables
    Zones,
}

#[derive(Debug, Deserialize)]
struct PlanResponse {
    ok: bool,
    route_id: Option<String>,
    waypoints: Vec<RouteWaypoint>,
    distance_km: Option<f64>,
    duration_min: Option<f64>,
    safety_score: Option<u8>,
    safety_rating: Option<SafetyRating>,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    safety_score: u8,
    safety_rating: SafetyRating,
    sampled_points: usize,
}

#[derive(Debug, Deserialize)]
struct ZonesResponse {
    hazards: Vec<HazardZone>,
    safe_zones: Vec<SafeZone>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Command::Plan { from, to } => plan(&client, &cli.url, &from, &to).await,
        Command::Score { route } => score(&client, &cli.url, &route).await,
        Command::Zones => zones(&client, &cli.url).await,
    }
}

/// Turn "lat,lon" into a coordinate object, anything else into a geocoder
/// query string.
fn location_value(input: &str) -> serde_json::Value {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() == 2 {
        if let (Ok(lat), Ok(lon)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
            return serde_json::json!({ "lat": lat, "lon": lon });
        }
    }
    serde_json::Value::String(input.to_string())
}

async fn plan(client: &reqwest::Client, url: &str, from: &str, to: &str) -> Result<()> {
    let body = serde_json::json!({
        "start": location_value(from),
        "end": location_value(to),
    });

    let response = client
        .post(format!("{}/v1/routes/plan", url))
        .json(&body)
        .send()
        .await
        .context("Failed to reach SafeRoute server")?;

    let plan: PlanResponse = response
        .json()
        .await
        .context("Failed to parse plan response")?;

    if !plan.ok {
        for error in &plan.errors {
            eprintln!("error: {}", error);
        }
        bail!("Route planning failed");
    }

    println!(
        "Route planned ({})",
        plan.route_id.as_deref().unwrap_or("unknown")
    );
    if let Some(distance_km) = plan.distance_km {
        println!("  Distance: {:.1} km", distance_km);
    }
    if let Some(duration_min) = plan.duration_min {
        println!("  Duration: {:.0} min", duration_min);
    }
    if let (Some(score), Some(rating)) = (plan.safety_score, plan.safety_rating) {
        println!("  Safety:   {}/100 ({})", score, rating_label(rating));
    }

    if plan.waypoints.is_empty() {
        println!("  Direct route, no detour waypoints needed");
    } else {
        println!("  Waypoints:");
        for (idx, wp) in plan.waypoints.iter().enumerate() {
            let kind = if wp.priority.is_some() {
                "safe zone"
            } else {
                "detour"
            };
            println!("    {}. {:.5}, {:.5} ({})", idx + 1, wp.lat, wp.lon, kind);
        }
    }

    Ok(())
}

async fn score(client: &reqwest::Client, url: &str, route: &PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(route)
        .with_context(|| format!("Failed to read {}", route.display()))?;
    let parsed: serde_json::Value =
        serde_json::from_str(&raw).context("Route file is not valid JSON")?;

    // Accept both a bare coordinate array and the score-request envelope.
    let coordinates: Vec<Coordinate> = if parsed.is_array() {
        serde_json::from_value(parsed).context("Route file is not a coordinate array")?
    } else {
        serde_json::from_value(
            parsed
                .get("coordinates")
                .cloned()
                .context("Route file is missing a 'coordinates' field")?,
        )
        .context("Route file 'coordinates' is not a coordinate array")?
    };

    let response = client
        .post(format!("{}/v1/routes/score", url))
        .json(&serde_json::json!({ "coordinates": coordinates }))
        .send()
        .await
        .context("Failed to reach SafeRoute server")?;

    let scored: ScoreResponse = response
        .json()
        .await
        .context("Failed to parse score response")?;

    println!(
        "Safety: {}/100 ({}) over {} sampled points",
        scored.safety_score,
        rating_label(scored.safety_rating),
        scored.sampled_points
    );

    Ok(())
}

async fn zones(client: &reqwest::Client, url: &str) -> Result<()> {
    let response = client
        .get(format!("{}/v1/zones", url))
        .send()
        .await
        .context("Failed to reach SafeRoute server")?;

    let tables: ZonesResponse = response
        .json()
        .await
        .context("Failed to parse zones response")?;

    println!("Hazard zones ({}):", tables.hazards.len());
    for hazard in &tables.hazards {
        println!(
            "  {} {:?}  {} ({:.0} m)",
            severity_dots(hazard.severity),
            hazard.hazard_type,
            hazard.description,
            hazard.radius_m
        );
    }

    println!("Safe zones ({}):", tables.safe_zones.len());
    for zone in &tables.safe_zones {
        println!(
            "  {:?}  {} ({:.0} m)",
            zone.zone_type, zone.description, zone.radius_m
        );
    }

    Ok(())
}

fn severity_dots(severity: u8) -> String {
    let filled = usize::from(severity.min(5));
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

fn rating_label(rating: SafetyRating) -> &'static str {
    match rating {
        SafetyRating::Safe => "safe",
        SafetyRating::Moderate => "moderate",
        SafetyRating::Risky => "risky",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_pairs_become_point_locations() {
        let value = location_value("42.2808, -83.7430");
        assert_eq!(value["lat"].as_f64(), Some(42.2808));
        assert_eq!(value["lon"].as_f64(), Some(-83.7430));
    }

    #[test]
    fn free_text_becomes_a_query_location() {
        let value = location_value("Michigan Union, Ann Arbor");
        assert!(value.is_string());
    }

    #[test]
    fn severity_dots_render_five_slots() {
        assert_eq!(severity_dots(3), "●●●○○");
        assert_eq!(severity_dots(5), "●●●●●");
        assert_eq!(severity_dots(0), "○○○○○");
    }
}
