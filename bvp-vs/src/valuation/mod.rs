//! Building transaction-price estimation pipeline
//!
//! One pass per request: derive a feature record from the building row,
//! obtain the model's per-m² prediction, and combine it with the land term.
//! Stateless aside from the read-only district table, so any number of
//! estimations may run concurrently.

use bvp_common::db::models::BuildingRecord;
use std::sync::Arc;

pub mod address;
pub mod districts;
pub mod error;
pub mod features;

pub use error::EstimateError;
pub use features::FeatureRecord;

use crate::services::PricePredictor;

/// Transaction-price estimator over a prediction model
pub struct Valuator {
    predictor: Arc<dyn PricePredictor>,
}

impl Valuator {
    pub fn new(predictor: Arc<dyn PricePredictor>) -> Self {
        Self { predictor }
    }

    /// Estimate the transaction price of a building in a given year.
    ///
    /// The valuation formula is additive: the land term is the public-record
    /// total land price taken directly from the feature record, and the
    /// structure term scales the model's per-m² prediction by total floor
    /// area. No rounding or currency conversion is applied here; presentation
    /// belongs to the caller.
    pub async fn estimate(
        &self,
        building: &BuildingRecord,
        transaction_year: i32,
    ) -> Result<f64, EstimateError> {
        let features = features::build(building, transaction_year)?;
        let unit_price = self.predictor.predict(&features).await?;

        let price = features.total_land_price + features.total_floor_area * unit_price;

        tracing::debug!(
            mngt_number = %building.building_mngt_number,
            transaction_year,
            unit_price,
            price,
            "Estimated transaction price"
        );

        Ok(price)
    }
}
