#![allow(dead_code)]

use std::str::FromStr;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use starwars_backend::{AppState, config::Config, db, routes};

/// Single-connection pool: every new connection to `sqlite::memory:`
/// would otherwise see its own empty database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("invalid connection string")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    db::init_schema(&pool).await.expect("failed to apply schema");
    pool
}

pub fn app_with_pool(pool: SqlitePool) -> Router {
    let state = AppState {
        pool,
        config: Config {
            database_url: "sqlite::memory:".to_string(),
            server_port: 0,
        },
    };

    routes::router().with_state(state)
}

pub async fn test_app() -> Router {
    app_with_pool(test_pool().await)
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };

    (status, body)
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app.clone(), req).await
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app.clone(), req).await
}

pub async fn post_empty(app: &Router, path: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app.clone(), req).await
}

pub async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app.clone(), req).await
}
