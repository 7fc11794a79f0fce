//! Shared application service layer for pavesweep.
//!
//! This crate centralizes configuration handling and the sweep controller so
//! the CLI stays a thin front-end.

pub mod config_service;
pub mod error;
pub mod progress;
pub mod sweep_service;

// Re-export key types for convenience
pub use config_service::{load_config, save_config, validate_config};
pub use error::{AppError, AppResult};
pub use progress::{SweepProgressEvent, SweepStage};
pub use sweep_service::{
    build_row, decode_file, encode_combination, execute_sweep, persist_report, run_sweep,
    run_sweep_with_progress, SweepResponse,
};
