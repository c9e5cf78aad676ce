use actix_web::{HttpResponse, Responder};
use utoipa::OpenApi;

use super::{health, predict};
use crate::models::{
    ErrorResponse, ForecastRequest, ForecastResponse, HealthResponse, HealthStatus, RootResponse,
};

/// OpenAPI document for the forecast API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demand Forecast for Retail Stores Chain",
        version = "1.0",
        description = "Enter required information to get daily demand forecast for list of products/stores based on developed deep learning model."
    ),
    paths(health::root, health::health_check, predict::demand_forecast),
    components(schemas(
        ForecastRequest,
        ForecastResponse,
        HealthResponse,
        HealthStatus,
        RootResponse,
        ErrorResponse
    )),
    tags(
        (name = "forecast", description = "Demand forecasting"),
        (name = "health", description = "Liveness and readiness")
    )
)]
pub struct ApiDoc;

/// OpenAPI document endpoint
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{configure, AppState};
    use crate::testing::sample_service;
    use actix_web::{http::StatusCode, test, web, App};

    #[actix_web::test]
    async fn test_openapi_document() {
        let state = web::Data::new(AppState {
            service: sample_service(),
        });
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/openapi.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let doc: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(doc["info"]["title"], "Demand Forecast for Retail Stores Chain");
        assert_eq!(doc["info"]["version"], "1.0");

        let predict = &doc["paths"]["/predict"]["post"];
        assert!(predict.is_object());
        assert!(predict["responses"]["422"].is_object());
        assert_eq!(
            doc["paths"]["/health"]["get"]["summary"],
            "API health check"
        );
    }

    #[::std::prelude::v1::test]
    fn test_request_schema_fields() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let request = &doc["components"]["schemas"]["ForecastRequest"];

        let properties = request["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 14);
        assert!(properties.contains_key("Store_ID"));
        assert!(properties.contains_key("Competitor_Pricing"));
        assert_eq!(
            properties["Region"]["description"],
            "Store region : East, North, South, West"
        );
        assert_eq!(request["required"].as_array().unwrap().len(), 14);
    }
}
