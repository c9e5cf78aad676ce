//! Pretrained artifact loading
//!
//! The training pipeline exports the fitted encoder and scaler as JSON and
//! the regression network as ONNX. All three are read once at startup.

use crate::data::encoder::OneHotEncoder;
use crate::data::features::{row_width, NUM_CATEGORICAL};
use crate::data::scaler::StandardScaler;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Default artifact file names
pub const ENCODER_FILE: &str = "onehot_encoder.json";
pub const SCALER_FILE: &str = "standard_scaler.json";
pub const MODEL_FILE: &str = "DL_model_tf.onnx";

/// Artifact loading errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load model {path:?}: {message}")]
    Model { path: PathBuf, message: String },

    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

/// Locations of the three artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub encoder: PathBuf,
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside a directory
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            encoder: dir.join(ENCODER_FILE),
            scaler: dir.join(SCALER_FILE),
            model: dir.join(MODEL_FILE),
        }
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the fitted one-hot encoder
pub fn load_encoder<P: AsRef<Path>>(path: P) -> Result<OneHotEncoder, ArtifactError> {
    let path = path.as_ref();
    info!("Loading encoder: {:?}", path);

    let encoder: OneHotEncoder = load_json(path)?;

    if encoder.categories.iter().any(Vec::is_empty) {
        return Err(ArtifactError::Invalid(
            "encoder has a column with no categories".to_string(),
        ));
    }
    if !encoder.feature_names.is_empty()
        && encoder.feature_names.len() != encoder.categories.len()
    {
        return Err(ArtifactError::Invalid(format!(
            "encoder has {} feature names for {} columns",
            encoder.feature_names.len(),
            encoder.categories.len()
        )));
    }

    info!(
        "Loaded encoder: {} columns, {} one-hot outputs",
        encoder.n_features_in(),
        encoder.output_width()
    );
    Ok(encoder)
}

/// Load the fitted standard scaler
pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<StandardScaler, ArtifactError> {
    let path = path.as_ref();
    info!("Loading scaler: {:?}", path);

    let scaler: StandardScaler = load_json(path)?;

    if scaler.mean.len() != scaler.scale.len() {
        return Err(ArtifactError::Invalid(format!(
            "scaler has {} means but {} scales",
            scaler.mean.len(),
            scaler.scale.len()
        )));
    }
    if scaler.mean.iter().chain(&scaler.scale).any(|v| !v.is_finite()) {
        return Err(ArtifactError::Invalid(
            "scaler parameters must be finite".to_string(),
        ));
    }

    info!("Loaded scaler: {} columns", scaler.n_features());
    Ok(scaler)
}

/// Check that encoder and scaler agree on the row layout
pub fn check_compatible(
    encoder: &OneHotEncoder,
    scaler: &StandardScaler,
) -> Result<(), ArtifactError> {
    if encoder.n_features_in() != NUM_CATEGORICAL {
        return Err(ArtifactError::Invalid(format!(
            "encoder covers {} columns, expected {}",
            encoder.n_features_in(),
            NUM_CATEGORICAL
        )));
    }

    let expected = row_width(encoder);
    if scaler.n_features() != expected {
        return Err(ArtifactError::Invalid(format!(
            "scaler fitted on {} columns, feature row has {}",
            scaler.n_features(),
            expected
        )));
    }

    Ok(())
}
