//! User request DTOs. Responses reuse [`crate::store::User`] directly.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Unique username.
    pub username: String,
    /// Free-text language tag (e.g. a locale or programming language).
    pub language: String,
}
