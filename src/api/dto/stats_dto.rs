//! Response DTOs for the statistics endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `GET /statistics/max-achievements`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaxAchievementsResponse {
    /// User holding the most grants.
    pub username: String,
    /// Number of grants that user holds.
    pub achievement_count: u64,
}

/// Response body for `GET /statistics/max-points`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaxPointsResponse {
    /// User holding the highest point total.
    pub username: String,
    /// That user's point total.
    pub total_points: i64,
}

/// Response body for the point-difference endpoints.
///
/// For max-point-difference the pair is `[max_user, min_user]`; for
/// min-point-difference it is the two lowest totals ascending.
#[derive(Debug, Serialize, ToSchema)]
pub struct PointDifferenceResponse {
    /// The two usernames.
    pub users: [String; 2],
    /// Point difference between the pair's totals.
    pub point_difference: i64,
}

/// Response body for `GET /statistics/consistent-achievements`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConsistentAchieversResponse {
    /// Users whose opening grants form a daily streak.
    pub consistent_users: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_serializes_users_as_array() {
        let body = PointDifferenceResponse {
            users: ["bob".to_string(), "alice".to_string()],
            point_difference: 15,
        };
        let Ok(json) = serde_json::to_value(&body) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"users": ["bob", "alice"], "point_difference": 15})
        );
    }

    #[test]
    fn max_achievements_shape() {
        let body = MaxAchievementsResponse {
            username: "alice".to_string(),
            achievement_count: 3,
        };
        let Ok(json) = serde_json::to_value(&body) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"username": "alice", "achievement_count": 3})
        );
    }
}
