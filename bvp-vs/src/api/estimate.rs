//! Price estimation endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bvp_common::db::models::BuildingRecord;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters of an estimation request
#[derive(Debug, Deserialize)]
pub struct EstimateParams {
    /// Target transaction year
    pub year: i32,
}

/// Estimation response
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub mngt_number: String,
    pub transaction_year: i32,
    /// Estimated transaction price in 원, unrounded
    pub estimated_price: f64,
}

/// GET /api/estimate/:mngt_number?year=YYYY
///
/// Runs the full estimation pipeline for one building. Any pipeline failure
/// aborts the request; there is no partial or fallback estimate.
pub async fn estimate_price(
    State(state): State<AppState>,
    Path(mngt_number): Path<String>,
    Query(params): Query<EstimateParams>,
) -> ApiResult<Json<EstimateResponse>> {
    let building = BuildingRecord::find_by_mngt_number(&state.db, &mngt_number)
        .await
        .map_err(ApiError::Common)?
        .ok_or_else(|| ApiError::NotFound(format!("building {}", mngt_number)))?;

    let estimated_price = state.valuator.estimate(&building, params.year).await?;

    tracing::info!(
        mngt_number = %mngt_number,
        transaction_year = params.year,
        estimated_price,
        "Estimation served"
    );

    Ok(Json(EstimateResponse {
        mngt_number,
        transaction_year: params.year,
        estimated_price,
    }))
}
