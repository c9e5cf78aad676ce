//! Feature Engineering
//!
//! Assemble the model input row from a forecast request.
//!
//! Column order matches the fitted scaler and model:
//! Numeric (7) + One-hot categorical (encoder width) + Day-of-week (2)

use crate::data::encoder::OneHotEncoder;
use crate::models::ForecastRequest;
use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;
use thiserror::Error;

/// Number of numeric columns at the front of the row
pub const NUM_NUMERIC: usize = 7;
/// Number of categorical columns fed to the encoder
pub const NUM_CATEGORICAL: usize = 6;
/// Number of derived date columns at the end of the row
pub const NUM_DATE: usize = 2;

/// Numeric column names, in model order
pub const NUMERIC_FEATURES: [&str; NUM_NUMERIC] = [
    "Inventory_Level",
    "Units_Sold",
    "Units_Ordered",
    "Price",
    "Discount",
    "Holiday_Promotion",
    "Competitor_Pricing",
];

/// Categorical column names, in encoder order
pub const CATEGORICAL_FEATURES: [&str; NUM_CATEGORICAL] = [
    "Store_ID",
    "Product_ID",
    "Category",
    "Region",
    "Weather_Condition",
    "Seasonality",
];

/// Derived date column names
pub const DATE_FEATURES: [&str; NUM_DATE] = ["dayofweek_sin", "dayofweek_cos"];

/// Errors raised while turning a request into a model row
#[derive(Debug, Error, PartialEq)]
pub enum FeatureError {
    #[error("Found unknown category '{value}' in column '{feature}' during transform")]
    UnknownCategory { feature: String, value: String },

    #[error("Encoder expects {expected} categorical values, got {actual}")]
    CategoricalArity { expected: usize, actual: usize },

    #[error("Scaler expects {expected} columns, got {actual}")]
    RowWidth { expected: usize, actual: usize },
}

/// Numeric features in model order
pub fn numeric_values(req: &ForecastRequest) -> [f64; NUM_NUMERIC] {
    [
        req.inventory_level as f64,
        req.units_sold as f64,
        req.units_ordered as f64,
        req.price,
        req.discount as f64,
        req.holiday_promotion as f64,
        req.competitor_pricing,
    ]
}

/// Categorical features in encoder order
pub fn categorical_values(req: &ForecastRequest) -> [&str; NUM_CATEGORICAL] {
    [
        req.store_id.as_str(),
        req.product_id.as_str(),
        req.category.as_str(),
        req.region.as_str(),
        req.weather_condition.as_str(),
        req.seasonality.as_str(),
    ]
}

/// Day of week, Monday = 0 .. Sunday = 6
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Cyclic (sin, cos) encoding of the day of week with period 7
pub fn day_of_week_cyclic(date: NaiveDate) -> (f64, f64) {
    let angle = 2.0 * PI * day_of_week(date) as f64 / 7.0;
    (angle.sin(), angle.cos())
}

/// Build the unscaled model row: numeric ++ one-hot ++ [sin, cos]
pub fn assemble_row(
    req: &ForecastRequest,
    encoder: &OneHotEncoder,
) -> Result<Vec<f64>, FeatureError> {
    let one_hot = encoder.transform(&categorical_values(req))?;
    let (dow_sin, dow_cos) = day_of_week_cyclic(req.date);

    let mut row = Vec::with_capacity(NUM_NUMERIC + one_hot.len() + NUM_DATE);
    row.extend(numeric_values(req));
    row.extend(one_hot);
    row.push(dow_sin);
    row.push(dow_cos);

    Ok(row)
}

/// Width of the assembled row for a given encoder
pub fn row_width(encoder: &OneHotEncoder) -> usize {
    NUM_NUMERIC + encoder.output_width() + NUM_DATE
}

/// Column names of the assembled row, in order
pub fn get_all_feature_names(encoder: &OneHotEncoder) -> Vec<String> {
    let mut names: Vec<String> = NUMERIC_FEATURES.iter().map(|s| s.to_string()).collect();
    names.extend(encoder.output_feature_names());
    names.extend(DATE_FEATURES.iter().map(|s| s.to_string()));
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_encoder, sample_request};

    #[test]
    fn test_day_of_week_monday_is_zero() {
        // 2024-03-04 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(day_of_week(monday), 0);
        assert_eq!(day_of_week(monday + chrono::Days::new(6)), 6);

        let (s, c) = day_of_week_cyclic(monday);
        assert!(s.abs() < 1e-12);
        assert!((c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_day_of_week_cyclic_period_seven() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
        for offset in 0..7 {
            let date = start + chrono::Days::new(offset);
            let week_later = date + chrono::Days::new(7);
            assert_eq!(day_of_week_cyclic(date), day_of_week_cyclic(week_later));
        }
    }

    #[test]
    fn test_numeric_values_order() {
        let req = sample_request();
        assert_eq!(
            numeric_values(&req),
            [231.0, 127.0, 55.0, 33.5, 20.0, 0.0, 29.69]
        );
    }

    #[test]
    fn test_categorical_values_order() {
        let req = sample_request();
        assert_eq!(
            categorical_values(&req),
            ["S001", "P0001", "Groceries", "North", "Rainy", "Autumn"]
        );
    }

    #[test]
    fn test_assemble_row_layout() {
        let encoder = sample_encoder();
        let req = sample_request();
        let row = assemble_row(&req, &encoder).unwrap();

        assert_eq!(row.len(), row_width(&encoder));
        assert_eq!(&row[..NUM_NUMERIC], &numeric_values(&req));

        let one_hot = &row[NUM_NUMERIC..row.len() - NUM_DATE];
        assert_eq!(one_hot.iter().filter(|&&x| x == 1.0).count(), NUM_CATEGORICAL);
        assert_eq!(one_hot.iter().filter(|&&x| x == 0.0).count(), one_hot.len() - NUM_CATEGORICAL);

        let (s, c) = day_of_week_cyclic(req.date);
        assert_eq!(row[row.len() - 2], s);
        assert_eq!(row[row.len() - 1], c);
    }

    #[test]
    fn test_assemble_row_unknown_region() {
        let encoder = sample_encoder();
        let mut req = sample_request();
        req.region = "Atlantis".to_string();

        let err = assemble_row(&req, &encoder).unwrap_err();
        assert_eq!(
            err,
            FeatureError::UnknownCategory {
                feature: "Region".to_string(),
                value: "Atlantis".to_string(),
            }
        );
    }

    #[test]
    fn test_feature_names_match_row() {
        let encoder = sample_encoder();
        let names = get_all_feature_names(&encoder);

        assert_eq!(names.len(), row_width(&encoder));
        assert_eq!(names[0], "Inventory_Level");
        assert_eq!(names[NUM_NUMERIC], "Store_ID_S001");
        assert_eq!(names[names.len() - 1], "dayofweek_cos");
    }
}
