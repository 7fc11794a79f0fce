//! Sweep configuration validation.

use crate::schema::{
    EngineDef, LayerConstants, MAX_TABLE_TITLE_LEN, ParameterGrid, SweepConfig, table_title,
};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Empty set: {field}")]
    EmptySet { field: String },

    #[error("Duplicate value: {value} in {field}")]
    DuplicateValue { field: String, value: f64 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Table title too long: {title} (max {max} characters)")]
    TableTitleTooLong { title: String, max: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &SweepConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    validate_grid(&config.grid)?;
    validate_constants(&config.constants)?;
    validate_engine(&config.engine)?;

    if config.report.path.as_os_str().is_empty() {
        return Err(invalid("report.path", "", "must not be empty"));
    }

    Ok(())
}

fn validate_grid(grid: &ParameterGrid) -> Result<(), ValidationError> {
    validate_set("grid.surface_moduli", &grid.surface_moduli)?;
    validate_set("grid.base_moduli", &grid.base_moduli)?;
    validate_set("grid.surface_thicknesses", &grid.surface_thicknesses)?;

    // Each base modulus names a worksheet; catch bad names before any engine run.
    for &base in &grid.base_moduli {
        let title = table_title(base);
        if title.chars().count() > MAX_TABLE_TITLE_LEN {
            return Err(ValidationError::TableTitleTooLong {
                title,
                max: MAX_TABLE_TITLE_LEN,
            });
        }
    }
    Ok(())
}

/// Non-empty, strictly positive, finite and free of duplicates.
fn validate_set(field: &str, values: &[f64]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptySet {
            field: field.to_string(),
        });
    }

    for (i, &value) in values.iter().enumerate() {
        validate_positive(field, value)?;
        if values[..i].contains(&value) {
            return Err(ValidationError::DuplicateValue {
                field: field.to_string(),
                value,
            });
        }
    }

    Ok(())
}

fn validate_constants(constants: &LayerConstants) -> Result<(), ValidationError> {
    validate_positive("constants.granular_modulus", constants.granular_modulus)?;
    validate_positive("constants.subgrade_modulus", constants.subgrade_modulus)?;
    validate_positive("constants.granular_thickness", constants.granular_thickness)?;
    validate_positive("constants.base_thickness", constants.base_thickness)?;
    validate_positive("constants.axle_load", constants.axle_load)?;
    validate_positive(
        "constants.tyre_contact_radius",
        constants.tyre_contact_radius,
    )?;

    let nu = constants.poisson_ratio;
    if !(nu.is_finite() && nu > 0.0 && nu < 0.5) {
        return Err(invalid(
            "constants.poisson_ratio",
            nu,
            "must be in the open interval (0, 0.5)",
        ));
    }

    Ok(())
}

fn validate_engine(engine: &EngineDef) -> Result<(), ValidationError> {
    if engine.executable.as_os_str().is_empty() {
        return Err(invalid("engine.executable", "", "must not be empty"));
    }
    if engine.input_file.trim().is_empty() {
        return Err(invalid("engine.input_file", "", "must not be empty"));
    }
    if engine.output_file.trim().is_empty() {
        return Err(invalid("engine.output_file", "", "must not be empty"));
    }
    if engine.input_file == engine.output_file {
        return Err(invalid(
            "engine.output_file",
            &engine.output_file,
            "must differ from engine.input_file",
        ));
    }
    Ok(())
}

fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    pv_core::ensure_finite(value, "config value")
        .map_err(|_| invalid(field, value, "must be finite"))?;
    if value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
