//! REST API client for the prediction service HTTP endpoints.
//!
//! Wraps the service's HTTP API (prediction, category mappings) using
//! [`reqwest`].

use std::collections::HashMap;

use reqwest::header::ORIGIN;
use serde::Deserialize;

use fundcast_core::record::StartupRecord;

/// HTTP client for a single prediction service instance.
pub struct PredictionApi {
    client: reqwest::Client,
    api_url: String,
    origin: String,
}

/// Response returned by the `/predict` endpoint.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// The model's verdict. The service returns a human-readable label
    /// ("Success (Acquired)" / "Failure (Closed)"), but the contract only
    /// promises that the field exists, so the raw JSON value is kept.
    pub prediction: serde_json::Value,
}

/// Response returned by the `/categories` endpoint: the label-encoder
/// mappings the service applies to the categorical inputs.
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    /// State name to encoded `state_code` value.
    #[serde(default)]
    pub state_codes: HashMap<String, i64>,
    /// Category name to encoded `category_code` value.
    #[serde(default)]
    pub categories: HashMap<String, i64>,
    /// Outcome label to encoded status value.
    #[serde(default)]
    pub status_labels: HashMap<String, i64>,
}

/// Errors from the prediction service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum PredictionApiError {
    /// The HTTP request itself failed (connection refused, DNS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("prediction service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, usually the service's JSON error payload.
        body: String,
    },
}

impl PredictionApi {
    /// Create a new API client for a prediction service instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://127.0.0.1:8000`.
    /// * `origin`  - Value sent in the `Origin` header; the service's CORS
    ///   allow-list only admits its known frontend origins.
    pub fn new(api_url: String, origin: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            origin,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across callers).
    pub fn with_client(client: reqwest::Client, api_url: String, origin: String) -> Self {
        Self {
            client,
            api_url,
            origin,
        }
    }

    /// Request a prediction for one startup record.
    ///
    /// Sends a `POST /predict` with the record as the JSON body. The
    /// `Content-Type: application/json` header is set by the JSON body
    /// encoder; the configured `Origin` is attached explicitly.
    pub async fn predict(
        &self,
        record: &StartupRecord,
    ) -> Result<PredictResponse, PredictionApiError> {
        tracing::debug!(api_url = %self.api_url, "Submitting prediction request");

        let response = self
            .client
            .post(format!("{}/predict", self.api_url))
            .header(ORIGIN, &self.origin)
            .json(record)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Retrieve the service's categorical encoding tables.
    ///
    /// Sends a `GET /categories` request. Useful for building a record
    /// from raw state/category names instead of pre-encoded codes.
    pub async fn categories(&self) -> Result<CategoriesResponse, PredictionApiError> {
        let response = self
            .client
            .get(format!("{}/categories", self.api_url))
            .header(ORIGIN, &self.origin)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`PredictionApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PredictionApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PredictionApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PredictionApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
