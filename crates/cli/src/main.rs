//! Fire one prediction request at the local service and log the result.
//!
//! Builds the canonical sample record, POSTs it to the prediction
//! service, and logs either the returned `prediction` or the error. No
//! retries and no exit-code signaling; the process exits 0 either way.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fundcast_client::{ClientConfig, PredictionApi, PredictionApiError};
use fundcast_core::record::StartupRecord;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fundcast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Sending prediction request");

    let api = PredictionApi::new(config.api_url, config.origin);
    let record = StartupRecord::sample();

    match api.predict(&record).await {
        Ok(response) => {
            tracing::info!("Prediction: {}", response.prediction);
        }
        Err(PredictionApiError::Api { status, body }) => {
            tracing::error!(status, "Error: {body}");
        }
        Err(PredictionApiError::Request(e)) => {
            tracing::error!("Error: {e}");
        }
    }
}
