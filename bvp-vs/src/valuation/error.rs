//! Estimation pipeline failure kinds
//!
//! Every failure is terminal for the request that raised it: nothing in the
//! pipeline retries, defaults, or substitutes a guessed value.

use thiserror::Error;

/// Failure kinds of a single price estimation
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The address's district token is not in the administrative code table
    /// (or the address has fewer than two whitespace tokens)
    #[error("Unknown district in address: {0}")]
    UnknownDistrict(String),

    /// The address contains no parenthesized dong name
    #[error("No dong token in address: {0}")]
    MissingDongToken(String),

    /// The year-built string has no year segment
    #[error("Malformed year-built string: {0:?}")]
    MalformedYearBuilt(String),

    /// A floor count is negative
    #[error("Invalid floor count: above={above}, below={below}")]
    InvalidFloorCount { above: i32, below: i32 },

    /// Public land price or land area is negative or non-finite
    #[error("Invalid land value: public_price={public_price}, land_area={land_area}")]
    InvalidLandValue { public_price: i64, land_area: f64 },

    /// The prediction model could not be reached (includes timeouts)
    #[error("Prediction model unavailable: {0}")]
    PredictionUnavailable(String),

    /// The prediction model rejected the feature record
    #[error("Prediction model rejected input: {0}")]
    PredictionRejectedInput(String),
}
