use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Startup schema, applied in table-dependency order. Statements are
/// idempotent so re-running against an existing store is a no-op.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS user (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT,
        last_name TEXT,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS people (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        birth_year TEXT,
        eye_color TEXT,
        hair_color TEXT,
        height TEXT,
        mass TEXT,
        skin_color TEXT
    )",
    "CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        climate TEXT NOT NULL,
        terrain TEXT NOT NULL,
        population INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_user INTEGER NOT NULL REFERENCES user(id),
        id_people INTEGER REFERENCES people(id),
        id_planets INTEGER REFERENCES planets(id),
        CHECK ((id_people IS NULL) <> (id_planets IS NULL))
    )",
];

/// Opens the pool and brings the schema up to date. The database file is
/// created on first use.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("Database schema is up to date");
    Ok(())
}
