mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_person_echoes_fields_plus_assigned_id() {
    let app = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/people",
        json!({
            "name": "Leia Organa",
            "birth_year": "19BBY",
            "eye_color": "brown",
            "hair_color": "brown",
            "height": "150",
            "mass": "49",
            "skin_color": "light"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Leia Organa",
            "birth_year": "19BBY",
            "eye_color": "brown",
            "hair_color": "brown",
            "height": "150",
            "mass": "49",
            "skin_color": "light"
        })
    );
}

#[tokio::test]
async fn get_person_returns_the_created_record() {
    let app = common::test_app().await;

    let (_, created) = common::post_json(
        &app,
        "/people",
        json!({"name": "Chewbacca", "birth_year": "200BBY"}),
    )
    .await;

    let (status, fetched) = common::get(&app, "/people/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_person_unknown_id_is_a_json_404() {
    let app = common::test_app().await;

    let (status, body) = common::get(&app, "/people/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "People not found"}));
}

#[tokio::test]
async fn person_fields_are_all_optional() {
    let app = common::test_app().await;

    let (status, body) = common::post_json(&app, "/people", json!({"name": "R2-D2"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "R2-D2");
    assert_eq!(body["birth_year"], json!(null));
    assert_eq!(body["skin_color"], json!(null));
}

#[tokio::test]
async fn list_people_preserves_insertion_order() {
    let app = common::test_app().await;

    for name in ["Han", "Lando", "Wedge"] {
        common::post_json(&app, "/people", json!({"name": name})).await;
    }

    let (status, body) = common::get(&app, "/people").await;

    assert_eq!(status, StatusCode::OK);
    let people = body.as_array().expect("expected a JSON array");
    assert_eq!(people.len(), 3);
    assert_eq!(people[0]["name"], "Han");
    assert_eq!(people[1]["name"], "Lando");
    assert_eq!(people[2]["name"], "Wedge");
}
