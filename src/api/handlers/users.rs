//! User handlers: create and list.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreateUserRequest, PageParams};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};
use crate::store::User;

/// `POST /users` — Create a new user.
///
/// # Errors
///
/// Returns [`ApiError::DuplicateUsername`] if the username is taken.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Create a new user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Username already taken", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.store.create_user(&req.username, &req.language).await?;
    tracing::info!(user_id = user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users` — List all users.
///
/// # Errors
///
/// Returns an [`ApiError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    summary = "List users",
    params(PageParams),
    responses(
        (status = 200, description = "All users", body = [User]),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(_params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}
