mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_planet_echoes_fields_plus_assigned_id() {
    let app = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/planets",
        json!({
            "name": "Tatooine",
            "climate": "arid",
            "terrain": "desert",
            "population": 200000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Tatooine",
            "climate": "arid",
            "terrain": "desert",
            "population": 200000
        })
    );

    let (status, fetched) = common::get(&app, "/planets/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn get_planet_unknown_id_is_a_json_404() {
    let app = common::test_app().await;

    let (status, body) = common::get(&app, "/planets/9").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Planet not found"}));
}

#[tokio::test]
async fn create_planet_requires_population() {
    let app = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/planets",
        json!({"name": "Hoth", "climate": "frozen", "terrain": "tundra"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "population is required"}));
}

#[tokio::test]
async fn create_planet_requires_name() {
    let app = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/planets",
        json!({"climate": "temperate", "terrain": "forest", "population": 1000}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "name is required"}));
}

#[tokio::test]
async fn list_planets_returns_every_created_planet() {
    let app = common::test_app().await;

    for (name, population) in [("Dagobah", 0), ("Endor", 30000000)] {
        let (status, _) = common::post_json(
            &app,
            "/planets",
            json!({"name": name, "climate": "x", "terrain": "y", "population": population}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = common::get(&app, "/planets").await;

    assert_eq!(status, StatusCode::OK);
    let planets = body.as_array().expect("expected a JSON array");
    assert_eq!(planets.len(), 2);
    assert_eq!(planets[1]["name"], "Endor");
    assert_eq!(planets[1]["population"], 30000000);
}
