//! Pretrained preprocessing artifacts and feature engineering

pub mod artifacts;
pub mod encoder;
pub mod features;
pub mod scaler;

// Re-export commonly used types
pub use artifacts::{check_compatible, load_encoder, load_scaler, ArtifactError, ArtifactPaths};
pub use encoder::OneHotEncoder;
pub use features::{assemble_row, get_all_feature_names, FeatureError};
pub use scaler::StandardScaler;
