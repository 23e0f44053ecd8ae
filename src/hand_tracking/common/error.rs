use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Converted frame size mismatch: expected {expected} bytes, got {actual}")]
    ConversionSizeMismatch { expected: usize, actual: usize },

    #[error("Texture upload size mismatch: expected {expected} bytes, got {actual}")]
    TextureSizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Landmark buffer holds {actual} entries, expected {expected}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("Unsupported landmark stride: {0} floats per entry")]
    LandmarkStride(usize),

    #[error("Calibration value for {key} must be finite, got {value}")]
    NonFiniteCalibration { key: &'static str, value: f32 },

    #[error("Estimator failure: {0}")]
    Estimator(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
