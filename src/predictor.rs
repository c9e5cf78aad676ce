use crate::data::artifacts::{check_compatible, load_encoder, load_scaler};
use crate::data::features::{assemble_row, get_all_feature_names, FeatureError};
use crate::data::{ArtifactError, ArtifactPaths, OneHotEncoder, StandardScaler};
use crate::models::{ForecastRequest, ForecastResponse, HealthResponse, HealthStatus};
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

/// Regression model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned no output")]
    EmptyOutput,

    #[error("Model session lock poisoned")]
    Poisoned,
}

/// Errors from a single forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("{0} artifact is not loaded")]
    ArtifactMissing(&'static str),

    #[error("Model produced a non-finite prediction: {0}")]
    NonFinite(f64),
}

/// A trained regression model taking one scaled row and returning one value
pub trait Regressor: Send + Sync {
    fn predict(&self, row: &[f32]) -> Result<f32, ModelError>;
}

/// ONNX-based regression model
pub struct OnnxRegressor {
    session: Mutex<Session>,
    input_name: String,
}

impl OnnxRegressor {
    /// Load an ONNX model from file
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, ArtifactError> {
        let model_path = model_path.as_ref();
        info!("Loading model: {:?}", model_path);

        let session = Session::builder()
            .map_err(|e| model_error(model_path, e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| model_error(model_path, e))?
            .commit_from_file(model_path)
            .map_err(|e| model_error(model_path, e))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| model_error(model_path, "model declares no inputs"))?;

        info!("Loaded ONNX model, input '{}'", input_name);
        Ok(Self {
            session: Mutex::new(session),
            input_name,
        })
    }
}

fn model_error(path: &Path, e: impl std::fmt::Display) -> ArtifactError {
    ArtifactError::Model {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, row: &[f32]) -> Result<f32, ModelError> {
        let input_tensor = Tensor::from_array(([1usize, row.len()], row.to_vec()))
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let mut session = self.session.lock().map_err(|_| ModelError::Poisoned)?;
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let (_, output_data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        output_data.first().copied().ok_or(ModelError::EmptyOutput)
    }
}

/// Round to 2 decimals the way `{:.2}` formats
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Demand forecaster holding the three pretrained artifacts
///
/// Artifacts are read-only after construction, so one instance can serve
/// concurrent requests.
pub struct ForecastService {
    encoder: Option<OneHotEncoder>,
    scaler: Option<StandardScaler>,
    model: Box<dyn Regressor>,
}

impl ForecastService {
    /// Load encoder, scaler and model, in that order
    ///
    /// Any failure is returned before the next artifact is touched.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let encoder = load_encoder(&paths.encoder)?;
        let scaler = load_scaler(&paths.scaler)?;
        let model = OnnxRegressor::load(&paths.model)?;
        Self::new(encoder, scaler, Box::new(model))
    }

    /// Build from loaded artifacts, checking that their layouts agree
    pub fn new(
        encoder: OneHotEncoder,
        scaler: StandardScaler,
        model: Box<dyn Regressor>,
    ) -> Result<Self, ArtifactError> {
        check_compatible(&encoder, &scaler)?;
        Ok(Self {
            encoder: Some(encoder),
            scaler: Some(scaler),
            model,
        })
    }

    /// Build without compatibility checks; missing artifacts leave the
    /// service degraded
    pub fn from_parts(
        encoder: Option<OneHotEncoder>,
        scaler: Option<StandardScaler>,
        model: Box<dyn Regressor>,
    ) -> Self {
        Self {
            encoder,
            scaler,
            model,
        }
    }

    pub fn encoder(&self) -> Option<&OneHotEncoder> {
        self.encoder.as_ref()
    }

    pub fn scaler(&self) -> Option<&StandardScaler> {
        self.scaler.as_ref()
    }

    /// Readiness of the preprocessing artifacts
    ///
    /// The model is not inspected.
    pub fn health(&self) -> HealthResponse {
        let encoders_loaded = self.encoder.is_some();
        let scalers_loaded = self.scaler.is_some();
        let status = if encoders_loaded && scalers_loaded {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };

        HealthResponse {
            status,
            encoders_loaded,
            scalers_loaded,
        }
    }

    /// Column names of the model row
    pub fn feature_names(&self) -> Result<Vec<String>, ForecastError> {
        let encoder = self
            .encoder
            .as_ref()
            .ok_or(ForecastError::ArtifactMissing("encoder"))?;
        Ok(get_all_feature_names(encoder))
    }

    /// Unscaled model row
    pub fn raw_features(&self, req: &ForecastRequest) -> Result<Vec<f64>, ForecastError> {
        let encoder = self
            .encoder
            .as_ref()
            .ok_or(ForecastError::ArtifactMissing("encoder"))?;
        Ok(assemble_row(req, encoder)?)
    }

    /// Scaled model row
    pub fn featurize(&self, req: &ForecastRequest) -> Result<Vec<f64>, ForecastError> {
        let row = self.raw_features(req)?;
        let scaler = self
            .scaler
            .as_ref()
            .ok_or(ForecastError::ArtifactMissing("scaler"))?;
        Ok(scaler.transform(&row)?)
    }

    /// Forecast demand for one request
    pub fn predict(&self, req: &ForecastRequest) -> Result<ForecastResponse, ForecastError> {
        let scaled = self.featurize(req)?;
        let input: Vec<f32> = scaled.iter().map(|&x| x as f32).collect();

        let raw = self.model.predict(&input)? as f64;
        if !raw.is_finite() {
            return Err(ForecastError::NonFinite(raw));
        }

        Ok(ForecastResponse {
            prediction: round_to_cents(raw),
        })
    }
}
