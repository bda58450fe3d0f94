//! The outbound logic for resolving entitlements

/// Contains the repository implementations backed by sqlx::PgPool
pub mod pgpool;
