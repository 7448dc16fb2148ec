use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

/// A person record. Apart from the id every column is free text and
/// optional, matching the source data set.
#[derive(Debug, Serialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
}

impl Person {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, AppError> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT id, name, birth_year, eye_color, hair_color, height, mass, skin_color
             FROM people
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(people)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Self, AppError> {
        sqlx::query_as::<_, Person>(
            "SELECT id, name, birth_year, eye_color, hair_color, height, mass, skin_color
             FROM people
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("People not found".to_string()))
    }

    pub async fn create(pool: &SqlitePool, req: CreatePersonRequest) -> Result<Self, AppError> {
        let person = sqlx::query_as::<_, Person>(
            "INSERT INTO people (name, birth_year, eye_color, hair_color, height, mass, skin_color)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id, name, birth_year, eye_color, hair_color, height, mass, skin_color",
        )
        .bind(req.name)
        .bind(req.birth_year)
        .bind(req.eye_color)
        .bind(req.hair_color)
        .bind(req.height)
        .bind(req.mass)
        .bind(req.skin_color)
        .fetch_one(pool)
        .await?;

        Ok(person)
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("People not found".to_string()));
        }

        Ok(())
    }
}
