use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

#[derive(Debug, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

impl Planet {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, AppError> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, climate, terrain, population
             FROM planets
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(planets)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Self, AppError> {
        sqlx::query_as::<_, Planet>(
            "SELECT id, name, climate, terrain, population
             FROM planets
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    pub async fn create(pool: &SqlitePool, req: CreatePlanetRequest) -> Result<Self, AppError> {
        let name = req
            .name
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;
        let climate = req
            .climate
            .ok_or_else(|| AppError::Validation("climate is required".to_string()))?;
        let terrain = req
            .terrain
            .ok_or_else(|| AppError::Validation("terrain is required".to_string()))?;
        let population = req
            .population
            .ok_or_else(|| AppError::Validation("population is required".to_string()))?;

        let planet = sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name, climate, terrain, population)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, climate, terrain, population",
        )
        .bind(name)
        .bind(climate)
        .bind(terrain)
        .bind(population)
        .fetch_one(pool)
        .await?;

        Ok(planet)
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        Ok(())
    }
}
