//! JSON summary written beside the report artifact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ResultsResult;
use crate::book::ReportBook;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepManifest {
    pub sweep_id: String,
    pub name: String,
    pub timestamp: String,
    pub engine: String,
    pub artifact: PathBuf,
    pub combinations: usize,
    pub missing_cells: usize,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSummary {
    pub title: String,
    pub base_modulus: f64,
    pub rows: usize,
}

impl SweepManifest {
    pub fn from_book(
        sweep_id: String,
        name: String,
        engine: String,
        artifact: &Path,
        book: &ReportBook,
    ) -> Self {
        Self {
            sweep_id,
            name,
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine,
            artifact: artifact.to_path_buf(),
            combinations: book.row_count(),
            missing_cells: book.missing_cells(),
            tables: book
                .tables()
                .iter()
                .map(|t| TableSummary {
                    title: t.title().to_string(),
                    base_modulus: t.base_modulus(),
                    rows: t.rows().len(),
                })
                .collect(),
        }
    }

    /// `results.xlsx` -> `results.manifest.json`
    pub fn path_for(artifact: &Path) -> PathBuf {
        artifact.with_extension("manifest.json")
    }

    pub fn to_json(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> ResultsResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> ResultsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
