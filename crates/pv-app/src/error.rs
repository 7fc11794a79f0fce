//! Error types for the pv-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Sweep aborted at combination {index} ({combination}): {source}")]
    CombinationFailed {
        index: usize,
        combination: String,
        source: pv_engine::EngineError,
    },

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for pv-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pv_project::ProjectError> for AppError {
    fn from(err: pv_project::ProjectError) -> Self {
        match err {
            pv_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Config(other.to_string()),
        }
    }
}

impl From<pv_project::ValidationError> for AppError {
    fn from(err: pv_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<pv_engine::EngineError> for AppError {
    fn from(err: pv_engine::EngineError) -> Self {
        AppError::Engine(err.to_string())
    }
}

impl From<pv_results::ResultsError> for AppError {
    fn from(err: pv_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<pv_core::PvError> for AppError {
    fn from(err: pv_core::PvError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
