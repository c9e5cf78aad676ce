use actix_web::{error::JsonPayloadError, http::StatusCode, HttpResponse, ResponseError};
use std::fmt;
use tracing::{error, warn};

use crate::data::FeatureError;
use crate::models::ErrorResponse;
use crate::predictor::ForecastError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Malformed request body or schema violation
    ValidationError(String),
    /// Categorical value outside the fitted vocabulary
    EncodingError(String),
    /// A preprocessing artifact is not loaded
    Unavailable(String),
    /// Model or prediction error
    PredictionError(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            AppError::Unavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AppError::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EncodingError(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::PredictionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::ValidationError(msg) => ("validation_error", msg.clone()),
            AppError::EncodingError(msg) => ("encoding_error", msg.clone()),
            AppError::Unavailable(msg) => ("service_unavailable", msg.clone()),
            AppError::PredictionError(msg) => ("prediction_error", msg.clone()),
            AppError::InternalError(msg) => ("internal_error", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::Feature(FeatureError::UnknownCategory { .. }) => {
                warn!("Rejected request: {}", err);
                AppError::EncodingError(err.to_string())
            }
            ForecastError::Feature(_) => {
                error!("Artifact layout mismatch: {}", err);
                AppError::InternalError(err.to_string())
            }
            ForecastError::ArtifactMissing(_) => AppError::Unavailable(err.to_string()),
            ForecastError::Model(_) | ForecastError::NonFinite(_) => {
                error!("Prediction failed: {}", err);
                AppError::PredictionError(err.to_string())
            }
        }
    }
}

impl From<&JsonPayloadError> for AppError {
    fn from(err: &JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) => AppError::ValidationError(e.to_string()),
            JsonPayloadError::ContentType => AppError::ValidationError(
                "Content-Type must be application/json".to_string(),
            ),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}
