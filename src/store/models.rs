//! Database row models for the three entity tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user row from the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Auto-increment row ID.
    pub id: i64,
    /// Unique username.
    pub username: String,
    /// Free-text language tag supplied by the client.
    pub language: String,
}

/// An achievement definition row from the `achievements` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    /// Auto-increment row ID.
    pub id: i64,
    /// Achievement name.
    pub name: String,
    /// Point value; may be zero or negative.
    pub points: i64,
    /// Human-readable description.
    pub description: String,
}

/// A grant row from the `user_achievements` table: "user earned
/// achievement at time T". The same achievement may be granted to the
/// same user any number of times.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementGrant {
    /// Auto-increment row ID.
    pub id: i64,
    /// Owning user ID.
    pub user_id: i64,
    /// Granted achievement ID.
    pub achievement_id: i64,
    /// When the achievement was earned.
    pub earned_at: DateTime<Utc>,
}

/// One row of the full grants ⋈ users ⋈ achievements join, the input to
/// every statistics computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRow {
    /// Username of the user who earned the achievement.
    pub username: String,
    /// Point value of the earned achievement.
    pub points: i64,
    /// When the achievement was earned.
    pub earned_at: DateTime<Utc>,
}
