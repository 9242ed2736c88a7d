//! Grant handlers: assign an achievement to a user and list a user's
//! grants.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::CreateGrantRequest;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};
use crate::store::AchievementGrant;

/// `POST /user-achievements` — Grant an achievement to a user.
///
/// The timestamp defaults to the current time when `earned_at` is
/// omitted. The same achievement may be granted repeatedly.
///
/// # Errors
///
/// Returns an [`ApiError`] on storage failure, including dangling
/// user or achievement IDs rejected by the foreign keys.
#[utoipa::path(
    post,
    path = "/api/v1/user-achievements",
    tag = "User Achievements",
    summary = "Grant an achievement to a user",
    request_body = CreateGrantRequest,
    responses(
        (status = 201, description = "Grant created", body = AchievementGrant),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_grant(
    State(state): State<AppState>,
    Json(req): Json<CreateGrantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let grant = state
        .store
        .create_grant(req.user_id, req.achievement_id, req.earned_at)
        .await?;
    tracing::info!(
        user_id = grant.user_id,
        achievement_id = grant.achievement_id,
        "achievement granted"
    );
    Ok((StatusCode::CREATED, Json(grant)))
}

/// `GET /users/:id/achievements` — List a user's grants.
///
/// An unknown user ID yields an empty list.
///
/// # Errors
///
/// Returns an [`ApiError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/achievements",
    tag = "User Achievements",
    summary = "List a user's grants",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "The user's grants", body = [AchievementGrant]),
    )
)]
pub async fn list_user_grants(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let grants = state.store.grants_for_user(user_id).await?;
    Ok(Json(grants))
}

/// Grant routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user-achievements", post(create_grant))
        .route("/users/{id}/achievements", get(list_user_grants))
}
