//! Feature vector construction
//!
//! Derives the prediction model's input record from a building row and the
//! target transaction year. A record is only ever returned fully populated;
//! any unresolvable field aborts the whole build.

use bvp_common::db::models::BuildingRecord;
use serde::{Deserialize, Serialize};

use crate::valuation::error::EstimateError;
use crate::valuation::{address, districts};

/// Zoning-class suffix stripped before the value is used as a feature
/// ("일반상업지역" → "일반상업")
const LAND_USE_SUFFIX: &str = "지역";

/// Input record of the price-prediction model.
///
/// Field names are the model's feature names; the serialized form of this
/// struct is the wire payload of a prediction call. Ephemeral: built per
/// estimation request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub total_floor_area: f64,
    pub total_floors: i32,
    pub floors_aboveground: i32,
    pub floors_underground: i32,
    /// public_price × land_area; doubles as the land term of the final price
    pub total_land_price: f64,
    pub structure: String,
    pub building_main_use: String,
    pub specific_use: String,
    pub land_use: String,
    pub gu_code: i64,
    pub dong_name: String,
    pub construction_year: String,
    pub transaction_year: String,
}

/// Build a feature record for one building and transaction year.
///
/// Pure: reads the building row and the static district table, nothing else.
/// Every field is validated or resolved; the first failure aborts the build
/// so no partial record can reach the model.
pub fn build(
    building: &BuildingRecord,
    transaction_year: i32,
) -> Result<FeatureRecord, EstimateError> {
    if building.floors_g < 0 || building.floors_b < 0 {
        return Err(EstimateError::InvalidFloorCount {
            above: building.floors_g,
            below: building.floors_b,
        });
    }

    if building.public_price < 0 || building.land_area < 0.0 || !building.land_area.is_finite() {
        return Err(EstimateError::InvalidLandValue {
            public_price: building.public_price,
            land_area: building.land_area,
        });
    }
    let total_land_price = building.public_price as f64 * building.land_area;

    // Suffix removal is best-effort: a zoning class without the suffix
    // passes through unchanged
    let land_use = building
        .use_area
        .strip_suffix(LAND_USE_SUFFIX)
        .unwrap_or(&building.use_area)
        .to_string();

    let gu_code = districts::resolve(&building.street_addr)?;
    let dong_name = address::extract_dong(&building.street_addr)?;
    let construction_year = address::extract_construction_year(&building.year_built)?;

    Ok(FeatureRecord {
        total_floor_area: building.tot_area,
        total_floors: building.floors_g + building.floors_b,
        floors_aboveground: building.floors_g,
        floors_underground: building.floors_b,
        total_land_price,
        structure: building.main_structure.clone(),
        building_main_use: building.main_usage.clone(),
        specific_use: building.detailed_usage.clone(),
        land_use,
        gu_code,
        dong_name,
        construction_year,
        transaction_year: transaction_year.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::test_support::sample_building;

    #[test]
    fn builds_fully_populated_record() {
        let building = sample_building();
        let features = build(&building, 2026).unwrap();

        assert_eq!(features.total_floor_area, 1000.0);
        assert_eq!(features.total_floors, 12);
        assert_eq!(features.floors_aboveground, 10);
        assert_eq!(features.floors_underground, 2);
        assert_eq!(features.total_land_price, 100_000.0);
        assert_eq!(features.structure, "철근콘크리트구조");
        assert_eq!(features.building_main_use, "업무시설");
        assert_eq!(features.specific_use, "사무소");
        assert_eq!(features.gu_code, 11680);
        assert_eq!(features.dong_name, "역삼동");
        assert_eq!(features.construction_year, "1998");
        assert_eq!(features.transaction_year, "2026");
    }

    #[test]
    fn total_land_price_is_price_times_area() {
        let mut building = sample_building();
        building.public_price = 500;
        building.land_area = 100.0;

        let features = build(&building, 2026).unwrap();
        assert_eq!(features.total_land_price, 50_000.0);
    }

    #[test]
    fn land_use_suffix_is_stripped() {
        let mut building = sample_building();
        building.use_area = "일반상업지역".to_string();

        let features = build(&building, 2026).unwrap();
        assert_eq!(features.land_use, "일반상업");
    }

    #[test]
    fn land_use_without_suffix_passes_through() {
        let mut building = sample_building();
        building.use_area = "개발제한구역".to_string();

        let features = build(&building, 2026).unwrap();
        assert_eq!(features.land_use, "개발제한구역");
    }

    #[test]
    fn negative_floor_count_fails() {
        let mut building = sample_building();
        building.floors_b = -1;

        let result = build(&building, 2026);
        assert!(matches!(
            result,
            Err(EstimateError::InvalidFloorCount { above: 10, below: -1 })
        ));
    }

    #[test]
    fn negative_public_price_fails() {
        let mut building = sample_building();
        building.public_price = -500;

        let result = build(&building, 2026);
        assert!(matches!(result, Err(EstimateError::InvalidLandValue { .. })));
    }

    #[test]
    fn nan_land_area_fails() {
        let mut building = sample_building();
        building.land_area = f64::NAN;

        let result = build(&building, 2026);
        assert!(matches!(result, Err(EstimateError::InvalidLandValue { .. })));
    }

    #[test]
    fn unknown_district_propagates() {
        let mut building = sample_building();
        building.street_addr = "인천광역시 연수구 송도대로 1 (송도동)".to_string();

        let result = build(&building, 2026);
        assert!(matches!(result, Err(EstimateError::UnknownDistrict(_))));
    }

    #[test]
    fn missing_dong_propagates() {
        let mut building = sample_building();
        building.street_addr = "서울특별시 강남구 테헤란로 1".to_string();

        let result = build(&building, 2026);
        assert!(matches!(result, Err(EstimateError::MissingDongToken(_))));
    }

    #[test]
    fn malformed_year_built_propagates() {
        let mut building = sample_building();
        building.year_built = "".to_string();

        let result = build(&building, 2026);
        assert!(matches!(result, Err(EstimateError::MalformedYearBuilt(_))));
    }

    #[test]
    fn serializes_with_model_feature_names() {
        let features = build(&sample_building(), 2026).unwrap();
        let json = serde_json::to_value(&features).unwrap();

        assert_eq!(json["total_floor_area"], 1000.0);
        assert_eq!(json["gu_code"], 11680);
        assert_eq!(json["transaction_year"], "2026");
        assert_eq!(json.as_object().unwrap().len(), 13);
    }
}
