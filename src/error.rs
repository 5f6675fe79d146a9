//! Error types.
//!
//! - `ForecastError`: failures of the regression core and the data source.
//! - `AppError`: what the `fxp` binary reports, carrying a process exit code.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Failures produced by fitting, evaluation, prediction and data loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Not enough data points: need at least {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Degenerate regression input: {0}")]
    DegenerateInput(String),

    #[error("Cannot evaluate an empty dataset")]
    EmptyDataset,

    #[error("Data source error: {0}")]
    DataSource(String),
}

impl ForecastError {
    /// Process exit code used when this error terminates the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            ForecastError::InsufficientData { .. }
            | ForecastError::DegenerateInput(_)
            | ForecastError::EmptyDataset => 3,
            ForecastError::DataSource(_) => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Usage or configuration problem (bad flags, invalid dates, missing env).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        Self::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
