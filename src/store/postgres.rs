//! PostgreSQL implementation of the persistence layer.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{Achievement, AchievementGrant, GrantRow, User};
use crate::error::ApiError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the three entity tables if they do not already exist.
    ///
    /// Run once at startup. Referential integrity on grants is enforced
    /// by the foreign keys, not by application logic.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (\
                 id BIGSERIAL PRIMARY KEY, \
                 username TEXT NOT NULL UNIQUE, \
                 language TEXT NOT NULL\
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS achievements (\
                 id BIGSERIAL PRIMARY KEY, \
                 name TEXT NOT NULL, \
                 points BIGINT NOT NULL, \
                 description TEXT NOT NULL\
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS user_achievements (\
                 id BIGSERIAL PRIMARY KEY, \
                 user_id BIGINT NOT NULL REFERENCES users(id), \
                 achievement_id BIGINT NOT NULL REFERENCES achievements(id), \
                 earned_at TIMESTAMPTZ NOT NULL DEFAULT now()\
             )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateUsername`] if the username is already
    /// taken, or [`ApiError::Database`] on any other database failure.
    pub async fn create_user(&self, username: &str, language: &str) -> Result<User, ApiError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "INSERT INTO users (username, language) VALUES ($1, $2) \
             RETURNING id, username, language",
        )
        .bind(username)
        .bind(language)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                ApiError::DuplicateUsername(username.to_string())
            } else {
                ApiError::Database(e.to_string())
            }
        })?;

        let (id, username, language) = row;
        Ok(User {
            id,
            username,
            language,
        })
    }

    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, username, language FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, username, language)| User {
                id,
                username,
                language,
            })
            .collect())
    }

    /// Inserts a new achievement definition.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn create_achievement(
        &self,
        name: &str,
        points: i64,
        description: &str,
    ) -> Result<Achievement, ApiError> {
        let (id, name, points, description) = sqlx::query_as::<_, (i64, String, i64, String)>(
            "INSERT INTO achievements (name, points, description) VALUES ($1, $2, $3) \
             RETURNING id, name, points, description",
        )
        .bind(name)
        .bind(points)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(Achievement {
            id,
            name,
            points,
            description,
        })
    }

    /// Lists all achievement definitions in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn list_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        let rows = sqlx::query_as::<_, (i64, String, i64, String)>(
            "SELECT id, name, points, description FROM achievements ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, points, description)| Achievement {
                id,
                name,
                points,
                description,
            })
            .collect())
    }

    /// Inserts a grant of an achievement to a user.
    ///
    /// When `earned_at` is `None` the timestamp defaults to the current
    /// time. The referenced IDs are not validated here; a dangling ID is
    /// rejected by the foreign key constraints.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure, including
    /// foreign key violations.
    pub async fn create_grant(
        &self,
        user_id: i64,
        achievement_id: i64,
        earned_at: Option<DateTime<Utc>>,
    ) -> Result<AchievementGrant, ApiError> {
        let (id, user_id, achievement_id, earned_at) =
            sqlx::query_as::<_, (i64, i64, i64, DateTime<Utc>)>(
                "INSERT INTO user_achievements (user_id, achievement_id, earned_at) \
                 VALUES ($1, $2, COALESCE($3, now())) \
                 RETURNING id, user_id, achievement_id, earned_at",
            )
            .bind(user_id)
            .bind(achievement_id)
            .bind(earned_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(AchievementGrant {
            id,
            user_id,
            achievement_id,
            earned_at,
        })
    }

    /// Lists all grants for the given user.
    ///
    /// An unknown user ID yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn grants_for_user(&self, user_id: i64) -> Result<Vec<AchievementGrant>, ApiError> {
        let rows = sqlx::query_as::<_, (i64, i64, i64, DateTime<Utc>)>(
            "SELECT id, user_id, achievement_id, earned_at FROM user_achievements \
             WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, user_id, achievement_id, earned_at)| AchievementGrant {
                id,
                user_id,
                achievement_id,
                earned_at,
            })
            .collect())
    }

    /// Fetches the full grants ⋈ users ⋈ achievements join.
    ///
    /// This is the single read feeding every statistics computation.
    /// Storage order is not meaningful; callers sort as needed.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn grant_rows(&self) -> Result<Vec<GrantRow>, ApiError> {
        let rows = sqlx::query_as::<_, (String, i64, DateTime<Utc>)>(
            "SELECT u.username, a.points, ua.earned_at \
             FROM user_achievements ua \
             JOIN users u ON u.id = ua.user_id \
             JOIN achievements a ON a.id = ua.achievement_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(username, points, earned_at)| GrantRow {
                username,
                points,
                earned_at,
            })
            .collect())
    }
}
