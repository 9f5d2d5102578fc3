//! Route planning integration tests against a live server.
//!
//! Run with: cargo test --test plan_route_test -- --ignored

use reqwest::Client;

fn base_url() -> String {
    std::env::var("SAFEROUTE_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Plan a short route across the demo zone table's neighborhood.
#[tokio::test]
#[ignore]
async fn plan_route_between_coordinates() {
    let client = Client::new();
    let base = base_url();

    let body = serde_json::json!({
        "start": {"lat": 42.2808, "lon": -83.7430},
        "end": {"lat": 42.2815, "lon": -83.7330}
    });

    let resp = client
        .post(format!("{}/v1/routes/plan", base))
        .json(&body)
        .send()
        .await
        .expect("Failed to plan route");

    assert!(resp.status().is_success(), "Should plan route successfully");
    let plan: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(plan["ok"].as_bool(), Some(true));
    assert!(plan["waypoints"].as_array().unwrap().len() <= 3);
    assert!(!plan["polyline"].as_array().unwrap().is_empty());

    let score = plan["safety_score"].as_u64().unwrap();
    assert!(score <= 100, "Score must stay in 0-100, got {score}");
}

/// Score an externally computed polyline.
#[tokio::test]
#[ignore]
async fn score_external_polyline() {
    let client = Client::new();
    let base = base_url();

    let body = serde_json::json!({
        "coordinates": [
            {"lat": 42.2808, "lon": -83.7430},
            {"lat": 42.2820, "lon": -83.7390},
            {"lat": 42.2830, "lon": -83.7390}
        ]
    });

    let resp = client
        .post(format!("{}/v1/routes/score", base))
        .json(&body)
        .send()
        .await
        .expect("Failed to score route");

    assert!(resp.status().is_success());
    let scored: serde_json::Value = resp.json().await.unwrap();
    assert!(scored["safety_score"].as_u64().unwrap() <= 100);
}

/// Unresolvable destinations surface a user-facing error.
#[tokio::test]
#[ignore]
async fn unresolvable_destination_reports_error() {
    let client = Client::new();
    let base = base_url();

    let body = serde_json::json!({
        "start": {"lat": 42.2808, "lon": -83.7430},
        "end": "zzzzzz nowhere at all 00000"
    });

    let resp = client
        .post(format!("{}/v1/routes/plan", base))
        .json(&body)
        .send()
        .await
        .expect("Failed to call plan endpoint");

    assert_eq!(resp.status().as_u16(), 400);
    let plan: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(plan["ok"].as_bool(), Some(false));
    assert!(!plan["errors"].as_array().unwrap().is_empty());
}
