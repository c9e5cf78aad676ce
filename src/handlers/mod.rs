//! HTTP handlers

pub mod docs;
pub mod health;
pub mod predict;

use actix_web::web;

use crate::error::AppError;
use crate::predictor::ForecastService;

/// Application state shared across handlers
pub struct AppState {
    pub service: ForecastService,
}

/// JSON extractor config: body errors become 422 validation errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::from(&err).into())
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .route("/predict", web::post().to(predict::demand_forecast))
        .route("/openapi.json", web::get().to(docs::openapi_json));
}
