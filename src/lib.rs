//! Retail demand forecast - daily demand prediction for a store chain
//!
//! This library provides:
//! - Loading of the pretrained one-hot encoder, standard scaler and ONNX model
//! - Feature assembly from a store/product request row
//! - A forecast service shared by the HTTP API and the CLI
//!
//! # Example
//!
//! ```no_run
//! use demand_forecast::data::ArtifactPaths;
//! use demand_forecast::predictor::ForecastService;
//!
//! let service = ForecastService::load(&ArtifactPaths::in_dir("artifacts")).unwrap();
//! println!("{:?}", service.health());
//! ```

pub mod config;
pub mod data;
pub mod models;
pub mod predictor;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;
#[cfg(feature = "api")]
pub mod handlers;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use data::{ArtifactPaths, OneHotEncoder, StandardScaler};
pub use models::{ForecastRequest, ForecastResponse, HealthResponse, HealthStatus};
pub use predictor::{ForecastService, OnnxRegressor, Regressor};
