//! # achievements-api
//!
//! REST backend tracking users, achievements, and achievement grants,
//! with aggregate statistics (leaderboards, point spreads, daily-streak
//! detection) over the grant history.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── StatsService (stats/)   read-only aggregation core
//!     │
//!     └── PostgresStore (store/)  durable CRUD over sqlx::PgPool
//! ```
//!
//! Control flow is one way per request: handlers delegate to the store
//! for writes and simple reads, or to the statistics service for
//! aggregate queries, then format the result. No background tasks and
//! no shared mutable state outside the connection pool.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod stats;
pub mod store;
