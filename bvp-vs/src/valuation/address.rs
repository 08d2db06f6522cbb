//! Address and date field extraction
//!
//! The register's denormalized strings embed two fields the model needs: the
//! dong name, parenthesized at the end of the street address, and the
//! construction year, leading the "YYYY-MM-DD" year-built string. Both are
//! extracted here as standalone functions so malformed input fails with a
//! named error instead of producing a silently wrong feature.

use crate::valuation::error::EstimateError;

/// Extract the dong (neighborhood) name from a street address.
///
/// Returns the interior of the last parenthesized group; some addresses
/// carry an earlier parenthesized building name, so only the last group is
/// the dong. Fails with `MissingDongToken` when no group exists.
pub fn extract_dong(address: &str) -> Result<String, EstimateError> {
    let mut last = None;
    let mut rest = address;

    while let Some(open) = rest.find('(') {
        let after_open = &rest[open + 1..];
        match after_open.find(')') {
            Some(close) => {
                last = Some(&after_open[..close]);
                rest = &after_open[close + 1..];
            }
            None => break,
        }
    }

    last.map(str::to_string)
        .ok_or_else(|| EstimateError::MissingDongToken(address.to_string()))
}

/// Extract the construction year from a year-built string.
///
/// The register stores "YYYY-MM-DD"; the year is everything before the first
/// `-`. An empty string fails with `MalformedYearBuilt`.
pub fn extract_construction_year(year_built: &str) -> Result<String, EstimateError> {
    let year = year_built.split('-').next().unwrap_or("");
    if year.is_empty() {
        return Err(EstimateError::MalformedYearBuilt(year_built.to_string()));
    }
    Ok(year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dong_is_last_parenthesized_group() {
        assert_eq!(
            extract_dong("서울 강남구 테헤란로 1 (역삼동)").unwrap(),
            "역삼동"
        );
        // Building name in an earlier group must be skipped
        assert_eq!(
            extract_dong("서울 중구 세종대로 (남산타워) 110 (태평로1가)").unwrap(),
            "태평로1가"
        );
    }

    #[test]
    fn missing_dong_fails() {
        let result = extract_dong("서울 강남구 테헤란로 1");
        assert!(matches!(result, Err(EstimateError::MissingDongToken(_))));
    }

    #[test]
    fn unclosed_paren_is_not_a_dong() {
        let result = extract_dong("서울 강남구 테헤란로 1 (역삼동");
        assert!(matches!(result, Err(EstimateError::MissingDongToken(_))));
    }

    #[test]
    fn empty_group_is_extracted_verbatim() {
        assert_eq!(extract_dong("서울 강남구 () ").unwrap(), "");
    }

    #[test]
    fn construction_year_is_leading_segment() {
        assert_eq!(extract_construction_year("1998-03-21").unwrap(), "1998");
        // Year-only input passes through
        assert_eq!(extract_construction_year("2004").unwrap(), "2004");
    }

    #[test]
    fn empty_year_built_fails() {
        let result = extract_construction_year("");
        assert!(matches!(result, Err(EstimateError::MalformedYearBuilt(_))));
    }

    #[test]
    fn leading_dash_fails() {
        let result = extract_construction_year("-03-21");
        assert!(matches!(result, Err(EstimateError::MalformedYearBuilt(_))));
    }
}
