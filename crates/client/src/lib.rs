//! HTTP client for the startup prediction service.
//!
//! Wraps the service's REST endpoints (`/predict`, `/categories`) using
//! [`reqwest`], with configuration loaded from the environment.

pub mod api;
pub mod config;

pub use api::{PredictionApi, PredictionApiError};
pub use config::ClientConfig;
