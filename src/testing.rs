//! Shared test fixtures

use crate::data::{OneHotEncoder, StandardScaler};
use crate::models::ForecastRequest;
use crate::predictor::{ForecastService, ModelError, Regressor};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Linear stand-in for the trained network: weighted sum of the scaled row
pub struct SumRegressor;

impl Regressor for SumRegressor {
    fn predict(&self, row: &[f32]) -> Result<f32, ModelError> {
        Ok(row
            .iter()
            .enumerate()
            .map(|(i, x)| x * (1.0 + i as f32 / 10.0))
            .sum::<f32>()
            + 120.0)
    }
}

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn sample_encoder() -> OneHotEncoder {
    serde_json::from_str(include_str!("../tests/fixtures/onehot_encoder.json")).unwrap()
}

pub fn sample_scaler() -> StandardScaler {
    serde_json::from_str(include_str!("../tests/fixtures/standard_scaler.json")).unwrap()
}

pub fn sample_service() -> ForecastService {
    ForecastService::new(sample_encoder(), sample_scaler(), Box::new(SumRegressor)).unwrap()
}

pub fn sample_request() -> ForecastRequest {
    ForecastRequest {
        date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        store_id: "S001".to_string(),
        product_id: "P0001".to_string(),
        category: "Groceries".to_string(),
        region: "North".to_string(),
        inventory_level: 231,
        units_sold: 127,
        units_ordered: 55,
        price: 33.5,
        discount: 20,
        weather_condition: "Rainy".to_string(),
        holiday_promotion: 0,
        competitor_pricing: 29.69,
        seasonality: "Autumn".to_string(),
    }
}
