//! bvp-vs (Valuation Service) - Building price estimation over the property store
//!
//! Serves building lookups and transaction-price estimates; the trained
//! prediction model is reached over HTTP and treated as an opaque
//! collaborator.

use anyhow::Result;
use bvp_common::config::ServiceConfig;
use bvp_vs::services::HttpPredictionClient;
use bvp_vs::valuation::Valuator;
use bvp_vs::{build_router, AppState};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bvp-vs", about = "BVP valuation service")]
struct Cli {
    /// Path to config file (overrides BVP_CONFIG and default locations)
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting BVP Valuation Service (bvp-vs) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();
    let config = ServiceConfig::load(cli.config.as_deref())?;

    let pool = bvp_common::db::connect(&config.database_url).await?;
    info!("✓ Connected to property database");

    let predictor = HttpPredictionClient::new(
        &config.model_url,
        Duration::from_secs(config.model_timeout_secs),
    )?;
    info!("Prediction model endpoint: {}", config.model_url);

    let state = AppState::new(pool, Arc::new(Valuator::new(Arc::new(predictor))));
    let app = build_router(state);

    let bind_addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("bvp-vs listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
