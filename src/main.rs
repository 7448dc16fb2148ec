use std::net::SocketAddr;

use axum::{ServiceExt, extract::Request};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starwars_backend::{AppState, config::Config, db, middleware::log_errors, routes};

#[tokio::main]
async fn main() {
    // Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration
    let config = Config::from_env();

    // Database pool and schema
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open database");

    let state = AppState {
        pool,
        config: config.clone(),
    };

    let router = routes::router()
        .layer(axum::middleware::from_fn(log_errors))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    // Trailing slashes are insignificant, so strip them before routing.
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        ServiceExt::<Request>::into_make_service(app),
    )
    .await
    .expect("Failed to start server");
}
