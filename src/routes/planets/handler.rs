use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError};

use super::model::{CreatePlanetRequest, Planet};

#[axum::debug_handler]
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, AppError> {
    let planets = Planet::list(&state.pool).await?;

    Ok(Json(planets))
}

#[axum::debug_handler]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<Json<Planet>, AppError> {
    let planet = Planet::find_by_id(&state.pool, planet_id).await?;

    Ok(Json(planet))
}

#[axum::debug_handler]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(req): Json<CreatePlanetRequest>,
) -> Result<Json<Planet>, AppError> {
    let planet = Planet::create(&state.pool, req).await?;

    Ok(Json(planet))
}
