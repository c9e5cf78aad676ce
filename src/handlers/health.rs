use actix_web::{web, HttpResponse, Responder};

use super::AppState;
use crate::models::{HealthResponse, RootResponse};

/// Liveness endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "API is running", body = RootResponse))
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Retail Demand Forecasting API".to_string(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "API health check",
    description = "Check if all model artifacts are loaded and API is ready",
    responses((status = 200, description = "Artifact readiness", body = HealthResponse))
)]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.service.health())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::configure;
    use crate::models::HealthStatus;
    use crate::predictor::ForecastService;
    use crate::testing::{sample_encoder, sample_service, SumRegressor};
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_root() {
        let state = web::Data::new(AppState {
            service: sample_service(),
        });
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp: RootResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.message, "Retail Demand Forecasting API");
    }

    #[actix_web::test]
    async fn test_health_healthy() {
        let state = web::Data::new(AppState {
            service: sample_service(),
        });
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, HealthStatus::Healthy);
        assert!(body.encoders_loaded);
        assert!(body.scalers_loaded);
    }

    #[actix_web::test]
    async fn test_health_degraded_without_scaler() {
        let state = web::Data::new(AppState {
            service: ForecastService::from_parts(Some(sample_encoder()), None, Box::new(SumRegressor)),
        });
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, HealthStatus::Degraded);
        assert!(body.encoders_loaded);
        assert!(!body.scalers_loaded);
    }
}
