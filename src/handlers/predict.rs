use actix_web::{web, HttpResponse};

use super::AppState;
use crate::error::AppError;
use crate::models::{ErrorResponse, ForecastRequest, ForecastResponse};

/// Forecast daily demand for one store/product row
#[utoipa::path(
    post,
    path = "/predict",
    tag = "forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Demand forecast", body = ForecastResponse),
        (status = 400, description = "Category outside the trained vocabulary", body = ErrorResponse),
        (status = 422, description = "Request schema violation", body = ErrorResponse),
        (status = 503, description = "Preprocessing artifact not loaded", body = ErrorResponse),
        (status = 500, description = "Model failure", body = ErrorResponse)
    )
)]
pub async fn demand_forecast(
    state: web::Data<AppState>,
    req: web::Json<ForecastRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.service.predict(&req)?;
    Ok(HttpResponse::Ok().json(response))
}
