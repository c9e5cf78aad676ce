//! One-hot encoder with a fitted category vocabulary

use crate::data::features::FeatureError;
use serde::{Deserialize, Serialize};

/// Fitted one-hot encoder
///
/// `categories[i]` is the vocabulary of input column `i`, in output order.
/// Values outside the vocabulary are rejected; nothing is imputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub categories: Vec<Vec<String>>,
}

impl OneHotEncoder {
    pub fn new(feature_names: Vec<String>, categories: Vec<Vec<String>>) -> Self {
        Self {
            feature_names,
            categories,
        }
    }

    /// Number of input columns
    pub fn n_features_in(&self) -> usize {
        self.categories.len()
    }

    /// Number of one-hot output columns
    pub fn output_width(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Output column names as `<feature>_<category>`
    pub fn output_feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(i, cats)| {
                let feature = self.feature_name(i);
                cats.iter().map(move |c| format!("{}_{}", feature, c))
            })
            .collect()
    }

    fn feature_name(&self, index: usize) -> String {
        self.feature_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("x{}", index))
    }

    /// Encode one row of categorical values
    pub fn transform(&self, values: &[&str]) -> Result<Vec<f64>, FeatureError> {
        if values.len() != self.categories.len() {
            return Err(FeatureError::CategoricalArity {
                expected: self.categories.len(),
                actual: values.len(),
            });
        }

        let mut encoded = vec![0.0; self.output_width()];
        let mut offset = 0;

        for (i, (value, cats)) in values.iter().zip(&self.categories).enumerate() {
            let position = cats.iter().position(|c| c == value).ok_or_else(|| {
                FeatureError::UnknownCategory {
                    feature: self.feature_name(i),
                    value: value.to_string(),
                }
            })?;
            encoded[offset + position] = 1.0;
            offset += cats.len();
        }

        Ok(encoded)
    }
}
