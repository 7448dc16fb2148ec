use axum::Json;
use serde::Serialize;

/// Every route the service exposes, in mount order. `router()` and the
/// surface tests are kept in sync against this table.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("GET", "/user/favorites"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{id}"),
    ("POST", "/favorites/people/{id}"),
    ("DELETE", "/favorites/people/{id}"),
    ("POST", "/favorites/planets/{id}"),
    ("DELETE", "/favorites/planets/{id}"),
];

#[derive(Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Serialize)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
}

#[axum::debug_handler]
pub async fn sitemap() -> Json<Sitemap> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|&(method, path)| Endpoint { method, path })
        .collect();

    Json(Sitemap { endpoints })
}
