//! Price-prediction model client
//!
//! The trained per-unit-area price model runs as a separate service; this is
//! the only place the platform crosses into it. The `PricePredictor` trait is
//! the narrow seam that lets the valuation core run against a deterministic
//! stub in tests.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::valuation::error::EstimateError;
use crate::valuation::features::FeatureRecord;

/// Capability interface of the prediction model: one call, feature record in,
/// price per m² of floor area out.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(&self, features: &FeatureRecord) -> Result<f64, EstimateError>;
}

/// Response body of the model service
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    unit_price: f64,
}

/// HTTP client for the model service
pub struct HttpPredictionClient {
    http_client: reqwest::Client,
    predict_url: String,
}

impl HttpPredictionClient {
    /// Create a client for the model service at `base_url`.
    ///
    /// `timeout` bounds each prediction call end to end; an elapsed timeout
    /// surfaces as `PredictionUnavailable`, the same as any other transport
    /// failure. No retries here: a failed call is reported upward immediately
    /// and retry policy stays with the caller's configuration.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EstimateError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EstimateError::PredictionUnavailable(e.to_string()))?;

        Ok(Self {
            http_client,
            predict_url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl PricePredictor for HttpPredictionClient {
    async fn predict(&self, features: &FeatureRecord) -> Result<f64, EstimateError> {
        tracing::debug!(
            gu_code = features.gu_code,
            transaction_year = %features.transaction_year,
            "Querying prediction model"
        );

        let response = self
            .http_client
            .post(&self.predict_url)
            .json(features)
            .send()
            .await
            .map_err(|e| EstimateError::PredictionUnavailable(e.to_string()))?;

        let status = response.status();

        // The model validates feature ranges and categories itself; a 4xx is
        // its verdict on this record, not a transport problem
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(EstimateError::PredictionRejectedInput(format!(
                "{}: {}",
                status, body
            )));
        }

        if !status.is_success() {
            return Err(EstimateError::PredictionUnavailable(format!(
                "model service returned {}",
                status
            )));
        }

        let prediction: PredictionResponse = response
            .json()
            .await
            .map_err(|e| EstimateError::PredictionUnavailable(e.to_string()))?;

        tracing::debug!(unit_price = prediction.unit_price, "Prediction received");

        Ok(prediction.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = HttpPredictionClient::new("http://127.0.0.1:5310", Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn predict_url_joins_cleanly() {
        let client =
            HttpPredictionClient::new("http://models.internal:9000/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(client.predict_url, "http://models.internal:9000/predict");
    }
}
