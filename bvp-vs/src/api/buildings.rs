//! Building detail endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use bvp_common::db::models::BuildingRecord;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/building/:mngt_number
///
/// Returns the building record grouped into address, structure, land, and
/// store sections, mirroring the register's own grouping.
pub async fn get_building(
    State(state): State<AppState>,
    Path(mngt_number): Path<String>,
) -> ApiResult<Json<Value>> {
    let building = BuildingRecord::find_by_mngt_number(&state.db, &mngt_number)
        .await
        .map_err(ApiError::Common)?
        .ok_or_else(|| ApiError::NotFound(format!("building {}", mngt_number)))?;

    Ok(Json(building_detail(&building)))
}

/// Group a building row for the detail response
fn building_detail(building: &BuildingRecord) -> Value {
    // store_type_count is ingested as opaque JSON text; unreadable or absent
    // counts surface as null rather than failing the whole lookup
    let stores_info = building
        .store_type_count
        .as_deref()
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .unwrap_or(Value::Null);

    json!({
        "addr_info": {
            "street_addr": building.street_addr,
            "lat": building.lat,
            "lon": building.lon,
            "building_mngt_number": building.building_mngt_number,
        },
        "building_info": {
            "year_built": building.year_built,
            "tot_area": building.tot_area,
            "main_usage": building.main_usage,
            "detailed_usage": building.detailed_usage,
            "main_structure": building.main_structure,
            "roof": building.roof,
            "floors_g": building.floors_g,
            "floors_b": building.floors_b,
            "building_coverage": building.building_coverage,
            "volume_to_lot_ratio": building.volume_to_lot_ratio,
            "outdoor_parking_lot": building.outdoor_parking_lot,
            "indoor_parking_lot": building.indoor_parking_lot,
            "passenger_elevator": building.passenger_elevator,
            "emergency_elevator": building.emergency_elevator,
        },
        "land_info": {
            "land_category": building.land_category,
            "land_use_sit": building.land_use_sit,
            "land_area": building.land_area,
            "road_side": building.road_side,
            "use_area": building.use_area,
            "topology": building.topology,
            "public_price": building.public_price,
            "land_angle": building.land_angle,
        },
        "stores_info": stores_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::test_support::sample_building;

    #[test]
    fn detail_groups_register_sections() {
        let detail = building_detail(&sample_building());

        assert_eq!(
            detail["addr_info"]["building_mngt_number"],
            "1168010100100010000000001"
        );
        assert_eq!(detail["building_info"]["floors_g"], 10);
        assert_eq!(detail["land_info"]["public_price"], 500);
        assert_eq!(detail["stores_info"], Value::Null);
    }

    #[test]
    fn store_counts_parse_when_present() {
        let mut building = sample_building();
        building.store_type_count = Some(r#"{"cafe": 3, "restaurant": 1}"#.to_string());

        let detail = building_detail(&building);
        assert_eq!(detail["stores_info"]["cafe"], 3);
    }

    #[test]
    fn unreadable_store_counts_become_null() {
        let mut building = sample_building();
        building.store_type_count = Some("not json".to_string());

        let detail = building_detail(&building);
        assert_eq!(detail["stores_info"], Value::Null);
    }
}
