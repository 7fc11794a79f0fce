//! Sweep configuration loading, saving, and validation.

use std::path::Path;

use pv_project::{ProjectError, SweepConfig};

use crate::error::{AppError, AppResult};

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a config from YAML, or JSON when the extension says so.
pub fn load_config(path: &Path) -> AppResult<SweepConfig> {
    let loaded = if is_json(path) {
        pv_project::load_json(path)
    } else {
        pv_project::load_yaml(path)
    };
    loaded.map_err(|e| match e {
        ProjectError::Io(source) => AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Save a config, format chosen by extension.
pub fn save_config(path: &Path, config: &SweepConfig) -> AppResult<()> {
    let saved = if is_json(path) {
        pv_project::save_json(path, config)
    } else {
        pv_project::save_yaml(path, config)
    };
    saved.map_err(|e| match e {
        ProjectError::Io(source) => AppError::ConfigFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

pub fn validate_config(config: &SweepConfig) -> AppResult<()> {
    pv_project::validate_config(config)?;
    Ok(())
}
