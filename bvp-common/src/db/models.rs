//! Database models

use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A building row from the property store.
///
/// The management number is the stable external key (its first 19 digits are
/// the parcel PNU). The record is read-only input to the valuation pipeline:
/// the address and structural fields are denormalized strings exactly as
/// ingested from the public building register.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BuildingRecord {
    pub building_mngt_number: String,
    /// Street address, "<city> <district> <street> (<dong-name>)"
    pub street_addr: String,
    pub lat: Option<String>,
    pub lon: Option<String>,

    /// Per-category store counts, serialized JSON
    pub store_type_count: Option<String>,

    /// "<year>-<month>-<day>" as ingested
    pub year_built: String,
    pub tot_area: f64,
    pub main_structure: String,
    pub main_usage: String,
    pub detailed_usage: String,
    pub roof: Option<String>,
    pub floors_b: i32,
    pub floors_g: i32,
    pub building_coverage: Option<f64>,
    pub volume_to_lot_ratio: Option<f64>,
    pub outdoor_parking_lot: Option<String>,
    pub indoor_parking_lot: Option<String>,
    pub passenger_elevator: Option<String>,
    pub emergency_elevator: Option<String>,

    pub land_category: Option<String>,
    pub land_use_sit: Option<String>,
    /// Land-use zoning class, ends in the "지역" suffix
    pub use_area: String,
    pub land_area: f64,
    pub road_side: Option<String>,
    pub topology: Option<String>,
    pub land_angle: Option<String>,
    /// Public per-m² land valuation (원)
    pub public_price: i64,

    pub last_updated: DateTime<Utc>,
}

impl BuildingRecord {
    /// Look up a building by its management number
    pub async fn find_by_mngt_number(pool: &PgPool, mngt_number: &str) -> Result<Option<Self>> {
        let record = sqlx::query_as::<_, BuildingRecord>(
            "SELECT * FROM buildings WHERE building_mngt_number = $1",
        )
        .bind(mngt_number)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
