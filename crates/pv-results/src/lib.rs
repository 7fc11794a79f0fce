//! pv-results: per-group report tables and their persisted artifacts.

pub mod book;
pub mod hash;
pub mod manifest;
pub mod types;
pub mod xlsx;

pub use book::ReportBook;
pub use hash::compute_sweep_id;
pub use manifest::{SweepManifest, TableSummary};
pub use types::*;
pub use xlsx::{save_artifacts, xlsx_bytes};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
