//! Persistence layer: PostgreSQL storage for users, achievements, and
//! achievement grants.
//!
//! Durable CRUD only; no cross-entity computation lives here. The concrete
//! implementation uses `sqlx::PgPool` for async PostgreSQL access.

pub mod models;
pub mod postgres;

pub use models::{Achievement, AchievementGrant, GrantRow, User};
pub use postgres::PostgresStore;
