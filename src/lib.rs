use config::Config;
use sqlx::SqlitePool;

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}
