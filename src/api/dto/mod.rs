//! Request and response DTOs, one module per resource.

pub mod achievement_dto;
pub mod common_dto;
pub mod grant_dto;
pub mod stats_dto;
pub mod user_dto;

pub use achievement_dto::CreateAchievementRequest;
pub use common_dto::PageParams;
pub use grant_dto::CreateGrantRequest;
pub use stats_dto::{
    ConsistentAchieversResponse, MaxAchievementsResponse, MaxPointsResponse,
    PointDifferenceResponse,
};
pub use user_dto::CreateUserRequest;
