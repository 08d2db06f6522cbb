//! bvp-vs library - Valuation Service module
//!
//! Exposes the building price-estimation pipeline over HTTP: building lookup
//! by management number and transaction-price estimation against the
//! external prediction model.

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

pub mod api;
pub mod error;
pub mod services;
pub mod valuation;

use valuation::Valuator;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Property store connection pool
    pub db: PgPool,
    /// Price estimator over the configured prediction model
    pub valuator: Arc<Valuator>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: PgPool, valuator: Arc<Valuator>) -> Self {
        Self { db, valuator }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/api/building/:mngt_number", get(api::get_building))
        .route("/api/estimate/:mngt_number", get(api::estimate_price))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
