use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of store/product features to forecast demand for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastRequest {
    /// Date in YYYY-MM-DD format
    #[serde(rename = "Date")]
    #[schema(value_type = String, format = Date, example = "2024-03-04")]
    pub date: NaiveDate,
    /// Store code : S001, S002, S003, S004, S005
    #[serde(rename = "Store_ID")]
    #[schema(example = "S001")]
    pub store_id: String,
    /// Product code : P0001, P0002, ... P0020
    #[serde(rename = "Product_ID")]
    #[schema(example = "P0001")]
    pub product_id: String,
    /// Product category : Clothing, Electronics, Furniture, Groceries, Toys
    #[serde(rename = "Category")]
    #[schema(example = "Groceries")]
    pub category: String,
    /// Store region : East, North, South, West
    #[serde(rename = "Region")]
    #[schema(example = "North")]
    pub region: String,
    #[serde(rename = "Inventory_Level")]
    pub inventory_level: i64,
    #[serde(rename = "Units_Sold")]
    pub units_sold: i64,
    #[serde(rename = "Units_Ordered")]
    pub units_ordered: i64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Discount")]
    pub discount: i64,
    /// Weather condition : Cloudy, Rainy, Snowy, Sunny
    #[serde(rename = "Weather_Condition")]
    #[schema(example = "Rainy")]
    pub weather_condition: String,
    #[serde(rename = "Holiday_Promotion")]
    pub holiday_promotion: i64,
    #[serde(rename = "Competitor_Pricing")]
    pub competitor_pricing: f64,
    /// Season : Autumn, Spring, Summer, Winter
    #[serde(rename = "Seasonality")]
    #[schema(example = "Autumn")]
    pub seasonality: String,
}

/// Forecast response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    /// Forecast demand, rounded to 2 decimals
    pub prediction: f64,
}

/// Artifact readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub encoders_loaded: bool,
    pub scalers_loaded: bool,
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
