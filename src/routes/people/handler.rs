use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError};

use super::model::{CreatePersonRequest, Person};

#[axum::debug_handler]
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let people = Person::list(&state.pool).await?;

    Ok(Json(people))
}

#[axum::debug_handler]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<Json<Person>, AppError> {
    let person = Person::find_by_id(&state.pool, people_id).await?;

    Ok(Json(person))
}

#[axum::debug_handler]
pub async fn create_person(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<Json<Person>, AppError> {
    let person = Person::create(&state.pool, req).await?;

    Ok(Json(person))
}
