use thiserror::Error;

/// Errors raised by the segmentation and classification core.
/// All of them are caller-input problems; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivergenceError {
    #[error("Invalid MACD preset '{value}'. Please choose one of the following options: {valid}")]
    InvalidPreset { value: String, valid: String },

    #[error("Input column '{0}' not found")]
    MissingColumn(String),

    #[error("Input series is empty")]
    EmptySeries,

    #[error("Malformed input series: {0}")]
    MalformedSeries(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, DivergenceError>;
