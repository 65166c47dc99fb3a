//! Client configuration loaded from environment variables.

/// Connection settings for the prediction service.
///
/// Defaults match the local development setup: the service listening on
/// `127.0.0.1:8000` and a frontend served from `http://localhost:3000`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base HTTP URL of the prediction service.
    pub api_url: String,
    /// Value sent in the `Origin` header.
    pub origin: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                  |
    /// |-------------------|--------------------------|
    /// | `PREDICT_API_URL` | `http://127.0.0.1:8000`  |
    /// | `PREDICT_ORIGIN`  | `http://localhost:3000`  |
    pub fn from_env() -> Self {
        let api_url = std::env::var("PREDICT_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".into());

        let origin =
            std::env::var("PREDICT_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());

        // A trailing slash would produce `//predict` when endpoint paths
        // are appended.
        let api_url = api_url.trim_end_matches('/').to_string();

        Self { api_url, origin }
    }
}
