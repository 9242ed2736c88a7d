//! Achievement definition handlers: create and list.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreateAchievementRequest, PageParams};
use crate::app_state::AppState;
use crate::error::ApiError;
use crate::store::Achievement;

/// `POST /achievements` — Create a new achievement definition.
///
/// # Errors
///
/// Returns an [`ApiError`] on storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/achievements",
    tag = "Achievements",
    summary = "Create a new achievement",
    request_body = CreateAchievementRequest,
    responses(
        (status = 201, description = "Achievement created", body = Achievement),
    )
)]
pub async fn create_achievement(
    State(state): State<AppState>,
    Json(req): Json<CreateAchievementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let achievement = state
        .store
        .create_achievement(&req.name, req.points, &req.description)
        .await?;
    tracing::info!(
        achievement_id = achievement.id,
        name = %achievement.name,
        points = achievement.points,
        "achievement created"
    );
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// `GET /achievements` — List all achievement definitions.
///
/// # Errors
///
/// Returns an [`ApiError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/achievements",
    tag = "Achievements",
    summary = "List achievements",
    params(PageParams),
    responses(
        (status = 200, description = "All achievements", body = [Achievement]),
    )
)]
pub async fn list_achievements(
    State(state): State<AppState>,
    Query(_params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let achievements = state.store.list_achievements().await?;
    Ok(Json(achievements))
}

/// Achievement routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/achievements",
        post(create_achievement).get(list_achievements),
    )
}
