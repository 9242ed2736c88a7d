//! Grant request DTOs. Responses reuse
//! [`crate::store::AchievementGrant`] directly.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /user-achievements`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGrantRequest {
    /// ID of the user earning the achievement.
    pub user_id: i64,
    /// ID of the earned achievement.
    pub achievement_id: i64,
    /// When the achievement was earned; defaults to the current time.
    #[serde(default)]
    pub earned_at: Option<DateTime<Utc>>,
}
