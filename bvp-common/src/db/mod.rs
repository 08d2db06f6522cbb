//! Database access layer for BVP
//!
//! The property store is PostgreSQL; all services share this connect helper.

use crate::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod models;

/// Connect to the property database
///
/// Verifies the connection with a round-trip before returning the pool, so
/// startup fails immediately on a bad URL instead of on the first request.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::debug!("Property database connection verified");

    Ok(pool)
}
