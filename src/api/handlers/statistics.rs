//! Statistics handlers: leaderboards, point spreads, and streak
//! detection.
//!
//! Every endpoint maps the aggregator's no-data signal to a 404 with a
//! descriptive message rather than an empty body.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    ConsistentAchieversResponse, MaxAchievementsResponse, MaxPointsResponse,
    PointDifferenceResponse,
};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /statistics/max-achievements` — User with the most grants.
///
/// # Errors
///
/// Returns [`ApiError::NoStatistics`] when no grants exist.
#[utoipa::path(
    get,
    path = "/api/v1/statistics/max-achievements",
    tag = "Statistics",
    summary = "User with the most achievements",
    responses(
        (status = 200, description = "Top achiever", body = MaxAchievementsResponse),
        (status = 404, description = "No grants recorded", body = ErrorResponse),
    )
)]
pub async fn max_achievements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let (username, achievement_count) = state
        .stats
        .top_achiever()
        .await?
        .ok_or(ApiError::NoStatistics("no user found"))?;

    Ok(Json(MaxAchievementsResponse {
        username,
        achievement_count,
    }))
}

/// `GET /statistics/max-points` — User with the highest point total.
///
/// # Errors
///
/// Returns [`ApiError::NoStatistics`] when no grants exist.
#[utoipa::path(
    get,
    path = "/api/v1/statistics/max-points",
    tag = "Statistics",
    summary = "User with the most points",
    responses(
        (status = 200, description = "Top scorer", body = MaxPointsResponse),
        (status = 404, description = "No grants recorded", body = ErrorResponse),
    )
)]
pub async fn max_points(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let (username, total_points) = state
        .stats
        .top_scorer()
        .await?
        .ok_or(ApiError::NoStatistics("no user found"))?;

    Ok(Json(MaxPointsResponse {
        username,
        total_points,
    }))
}

/// `GET /statistics/max-point-difference` — Widest gap between any two
/// users' point totals.
///
/// # Errors
///
/// Returns [`ApiError::NoStatistics`] when no grants exist.
#[utoipa::path(
    get,
    path = "/api/v1/statistics/max-point-difference",
    tag = "Statistics",
    summary = "Widest point spread between users",
    responses(
        (status = 200, description = "Max and min holders with their difference", body = PointDifferenceResponse),
        (status = 404, description = "No grants recorded", body = ErrorResponse),
    )
)]
pub async fn max_point_difference(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let spread = state
        .stats
        .widest_point_spread()
        .await?
        .ok_or(ApiError::NoStatistics("no users found"))?;

    let (max_user, min_user) = spread.users;
    Ok(Json(PointDifferenceResponse {
        users: [max_user, min_user],
        point_difference: spread.difference,
    }))
}

/// `GET /statistics/min-point-difference` — Gap between the two lowest
/// point totals.
///
/// # Errors
///
/// Returns [`ApiError::NoStatistics`] when fewer than two users have
/// grants.
#[utoipa::path(
    get,
    path = "/api/v1/statistics/min-point-difference",
    tag = "Statistics",
    summary = "Narrowest point spread between users",
    responses(
        (status = 200, description = "The two lowest totals with their difference", body = PointDifferenceResponse),
        (status = 404, description = "Fewer than two users with grants", body = ErrorResponse),
    )
)]
pub async fn min_point_difference(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let spread = state
        .stats
        .narrowest_point_spread()
        .await?
        .ok_or(ApiError::NoStatistics(
            "fewer than two users with achievements",
        ))?;

    let (low_user, next_user) = spread.users;
    Ok(Json(PointDifferenceResponse {
        users: [low_user, next_user],
        point_difference: spread.difference,
    }))
}

/// `GET /statistics/consistent-achievements` — Users whose opening
/// grants form a daily streak.
///
/// # Errors
///
/// Returns [`ApiError::NoStatistics`] when no user qualifies.
#[utoipa::path(
    get,
    path = "/api/v1/statistics/consistent-achievements",
    tag = "Statistics",
    summary = "Users with a daily achievement streak",
    responses(
        (status = 200, description = "Qualifying users", body = ConsistentAchieversResponse),
        (status = 404, description = "No qualifying users", body = ErrorResponse),
    )
)]
pub async fn consistent_achievements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let consistent_users = state.stats.consistent_achievers().await?;
    if consistent_users.is_empty() {
        return Err(ApiError::NoStatistics("no consistent users found"));
    }

    Ok(Json(ConsistentAchieversResponse { consistent_users }))
}

/// Statistics routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statistics/max-achievements", get(max_achievements))
        .route("/statistics/max-points", get(max_points))
        .route(
            "/statistics/max-point-difference",
            get(max_point_difference),
        )
        .route(
            "/statistics/min-point-difference",
            get(min_point_difference),
        )
        .route(
            "/statistics/consistent-achievements",
            get(consistent_achievements),
        )
}
