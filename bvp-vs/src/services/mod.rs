//! External service clients

pub mod prediction;

pub use prediction::{HttpPredictionClient, PricePredictor};
