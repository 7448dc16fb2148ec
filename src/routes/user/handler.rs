use axum::{Json, extract::State};

use crate::{AppState, error::AppError};

use super::model::{CreateUserRequest, User};

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = User::list(&state.pool).await?;

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let user = User::create(&state.pool, req).await?;

    Ok(Json(user))
}
