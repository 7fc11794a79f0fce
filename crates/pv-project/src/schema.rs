//! Sweep configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::grid::Combinations;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepConfig {
    pub version: u32,
    pub name: String,
    pub grid: ParameterGrid,
    pub constants: LayerConstants,
    #[serde(default)]
    pub engine: EngineDef,
    #[serde(default)]
    pub report: ReportDef,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "IITPAVE four-layer sweep".to_string(),
            grid: ParameterGrid::default(),
            constants: LayerConstants::default(),
            engine: EngineDef::default(),
            report: ReportDef::default(),
        }
    }
}

/// The three swept sets. Enumeration order is base (outer), surface, thickness (inner).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterGrid {
    pub surface_moduli: Vec<f64>,
    pub base_moduli: Vec<f64>,
    pub surface_thicknesses: Vec<f64>,
}

impl ParameterGrid {
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(self)
    }

    pub fn combination_count(&self) -> usize {
        self.surface_moduli.len() * self.base_moduli.len() * self.surface_thicknesses.len()
    }
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            surface_moduli: vec![2000.0, 2500.0, 3000.0, 3500.0, 4000.0],
            base_moduli: vec![
                300.0, 500.0, 1000.0, 1500.0, 2000.0, 2500.0, 3000.0, 3500.0, 4000.0, 4500.0,
                5000.0,
            ],
            surface_thicknesses: (4..16).map(|t| f64::from(t) * 10.0).collect(),
        }
    }
}

/// Longest report table title a spreadsheet sheet name can hold.
pub const MAX_TABLE_TITLE_LEN: usize = 31;

/// Title of the report table holding rows for one base modulus.
pub fn table_title(base_modulus: f64) -> String {
    format!("Base_{base_modulus}")
}

/// Values held fixed across the whole sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayerConstants {
    pub granular_modulus: f64,
    pub subgrade_modulus: f64,
    pub granular_thickness: f64,
    pub base_thickness: f64,
    pub poisson_ratio: f64,
    pub axle_load: f64,
    pub tyre_contact_radius: f64,
}

impl Default for LayerConstants {
    fn default() -> Self {
        Self {
            granular_modulus: 240.2,
            subgrade_modulus: 76.8,
            granular_thickness: 450.0,
            base_thickness: 100.0,
            poisson_ratio: 0.35,
            axle_load: 20000.0,
            tyre_contact_radius: 0.56,
        }
    }
}

/// File contract of the external response engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineDef {
    pub executable: PathBuf,
    pub input_file: String,
    pub output_file: String,
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,
}

impl Default for EngineDef {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("IITPFILE.exe"),
            input_file: "IITPAVE.in".to_string(),
            output_file: "iitpave.out".to_string(),
            working_dir: default_working_dir(),
        }
    }
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDef {
    pub path: PathBuf,
    #[serde(default = "default_write_manifest")]
    pub manifest: bool,
}

impl Default for ReportDef {
    fn default() -> Self {
        Self {
            path: PathBuf::from("IITPAVE_Results_Tabular.xlsx"),
            manifest: default_write_manifest(),
        }
    }
}

fn default_write_manifest() -> bool {
    true
}
