use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use crate::{AppState, error::AppError};

use super::model::{CreateFavoriteRequest, DeleteFavoriteResponse, Favorite, FavoriteTarget};

// The acting user comes from the request body until real authentication
// exists; an absent or unreadable body counts as a missing field.
fn acting_user(body: &Bytes) -> Result<i64, AppError> {
    serde_json::from_slice::<CreateFavoriteRequest>(body)
        .ok()
        .and_then(|req| req.id_user)
        .ok_or_else(|| AppError::Validation("id_user is required".to_string()))
}

#[axum::debug_handler]
pub async fn list_favorites(State(state): State<AppState>) -> Result<Json<Vec<Favorite>>, AppError> {
    let favorites = Favorite::list(&state.pool).await?;

    Ok(Json(favorites))
}

#[axum::debug_handler]
pub async fn create_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
    body: Bytes,
) -> Result<Json<Favorite>, AppError> {
    let user_id = acting_user(&body)?;
    let favorite =
        Favorite::create(&state.pool, user_id, FavoriteTarget::People(people_id)).await?;

    Ok(Json(favorite))
}

#[axum::debug_handler]
pub async fn create_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    body: Bytes,
) -> Result<Json<Favorite>, AppError> {
    let user_id = acting_user(&body)?;
    let favorite =
        Favorite::create(&state.pool, user_id, FavoriteTarget::Planet(planet_id)).await?;

    Ok(Json(favorite))
}

#[axum::debug_handler]
pub async fn delete_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<Json<DeleteFavoriteResponse>, AppError> {
    Favorite::delete_first(&state.pool, FavoriteTarget::People(people_id)).await?;

    Ok(Json(DeleteFavoriteResponse {
        message: "Favorite deleted successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<Json<DeleteFavoriteResponse>, AppError> {
    Favorite::delete_first(&state.pool, FavoriteTarget::Planet(planet_id)).await?;

    Ok(Json(DeleteFavoriteResponse {
        message: "Favorite deleted successfully".to_string(),
    }))
}
