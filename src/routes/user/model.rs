use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

impl User {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, is_active
             FROM user
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Self, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, is_active
             FROM user
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn create(pool: &SqlitePool, req: CreateUserRequest) -> Result<Self, AppError> {
        let email = req
            .email
            .ok_or_else(|| AppError::Validation("email is required".to_string()))?;
        let password = req
            .password
            .ok_or_else(|| AppError::Validation("password is required".to_string()))?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO user (first_name, last_name, email, password, is_active)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, first_name, last_name, email, password, is_active",
        )
        .bind(req.first_name)
        .bind(req.last_name)
        .bind(email)
        .bind(password)
        .bind(req.is_active.unwrap_or(false))
        .fetch_one(pool)
        .await
        .map_err(|err| match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Validation("email already exists".to_string())
            }
            _ => AppError::Database(err),
        })?;

        tracing::info!("Created user: {}", user.email);
        Ok(user)
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM user WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
