use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;
use crate::routes::{people::Person, planets::Planet, user::User};

/// Join row linking a user to a person or a planet. Exactly one of
/// `id_people` / `id_planets` is set, backed by a CHECK constraint.
#[derive(Debug, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub id_user: i64,
    pub id_people: Option<i64>,
    pub id_planets: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateFavoriteRequest {
    pub id_user: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFavoriteResponse {
    pub message: String,
}

/// Which entity a favorite points at.
#[derive(Debug, Clone, Copy)]
pub enum FavoriteTarget {
    People(i64),
    Planet(i64),
}

impl Favorite {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, AppError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT id, id_user, id_people, id_planets
             FROM favorites
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(favorites)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Self, AppError> {
        sqlx::query_as::<_, Favorite>(
            "SELECT id, id_user, id_people, id_planets
             FROM favorites
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))
    }

    /// Creates a favorite after confirming the target and the acting user
    /// exist. The target may still vanish before the insert; the foreign
    /// key constraint is the backstop for that race.
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Self, AppError> {
        let (id_people, id_planets) = match target {
            FavoriteTarget::People(people_id) => {
                Person::find_by_id(pool, people_id).await?;
                (Some(people_id), None)
            }
            FavoriteTarget::Planet(planet_id) => {
                Planet::find_by_id(pool, planet_id)
                    .await
                    .map_err(|err| match err {
                        AppError::NotFound(_) => {
                            AppError::NotFound("Planets not found".to_string())
                        }
                        other => other,
                    })?;
                (None, Some(planet_id))
            }
        };

        User::find_by_id(pool, user_id).await?;

        let favorite = sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (id_user, id_people, id_planets)
             VALUES (?, ?, ?)
             RETURNING id, id_user, id_people, id_planets",
        )
        .bind(user_id)
        .bind(id_people)
        .bind(id_planets)
        .fetch_one(pool)
        .await?;

        tracing::info!("User {} favorited {:?}", user_id, target);
        Ok(favorite)
    }

    /// Deletes the first (lowest id) favorite referencing the target.
    /// Other favorites for the same target are left in place.
    pub async fn delete_first(pool: &SqlitePool, target: FavoriteTarget) -> Result<(), AppError> {
        let (query, target_id) = match target {
            FavoriteTarget::People(people_id) => (
                "SELECT id FROM favorites WHERE id_people = ? ORDER BY id LIMIT 1",
                people_id,
            ),
            FavoriteTarget::Planet(planet_id) => (
                "SELECT id FROM favorites WHERE id_planets = ? ORDER BY id LIMIT 1",
                planet_id,
            ),
        };

        let favorite_id: Option<i64> = sqlx::query_scalar(query)
            .bind(target_id)
            .fetch_optional(pool)
            .await?;

        let Some(favorite_id) = favorite_id else {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        };

        sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(favorite_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }
}
