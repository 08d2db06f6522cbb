//! Administrative district code table and resolver
//!
//! Maps the 25 Seoul gu names to their five-digit administrative codes. The
//! table is static reference data, initialized once and never mutated; the
//! codes are the official ones used as categorical model features.

use crate::valuation::error::EstimateError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// District name → administrative code, process-wide immutable
static DISTRICT_CODES: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("종로구", 11110),
        ("중구", 11140),
        ("용산구", 11170),
        ("성동구", 11200),
        ("광진구", 11215),
        ("동대문구", 11230),
        ("중랑구", 11260),
        ("성북구", 11290),
        ("강북구", 11305),
        ("도봉구", 11320),
        ("노원구", 11350),
        ("은평구", 11380),
        ("서대문구", 11410),
        ("마포구", 11440),
        ("양천구", 11470),
        ("강서구", 11500),
        ("구로구", 11530),
        ("금천구", 11545),
        ("영등포구", 11560),
        ("동작구", 11590),
        ("관악구", 11620),
        ("서초구", 11650),
        ("강남구", 11680),
        ("송파구", 11710),
        ("강동구", 11740),
    ])
});

/// Resolve a street address to its district's administrative code.
///
/// The address schema always places the district name as the second
/// whitespace-delimited token ("서울특별시 강남구 ..."). Addresses that
/// don't follow that schema must be rejected, never misparsed: a missing or
/// unrecognized token fails with `UnknownDistrict`.
pub fn resolve(address: &str) -> Result<i64, EstimateError> {
    let district = address
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| EstimateError::UnknownDistrict(address.to_string()))?;

    DISTRICT_CODES
        .get(district)
        .copied()
        .ok_or_else(|| EstimateError::UnknownDistrict(district.to_string()))
}
