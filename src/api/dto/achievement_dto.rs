//! Achievement request DTOs. Responses reuse
//! [`crate::store::Achievement`] directly.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /achievements`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAchievementRequest {
    /// Achievement name.
    pub name: String,
    /// Point value; zero and negative values are allowed.
    pub points: i64,
    /// Human-readable description.
    pub description: String,
}
