//! Best-effort extraction of query-depth responses from engine output text.
//!
//! The output is free-form; the only contract relied upon is that a line with
//! at least ten floating point tokens is a data record laid out as
//! `depth, radial offset, σz, σt, σr, τ, deflection, εz, εt, εr`.

use std::path::Path;
use std::sync::LazyLock;

use pv_core::{DEPTH_TOLERANCE, within_abs};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::quantity::{Quantity, QueryPoint, ResponseSet, RunResult};

/// Tokens a line needs before it counts as a data record.
pub const MIN_RECORD_TOKENS: usize = 10;

/// Decimal numbers with a fractional part and optional exponent.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?\d*\.\d+(?:[Ee][-+]?\d+)?").expect("number pattern is valid")
});

const STRESSES: [Quantity; 4] = [
    Quantity::VerticalStress,
    Quantity::TangentialStress,
    Quantity::RadialStress,
    Quantity::ShearStress,
];

const STRAINS: [Quantity; 3] = [
    Quantity::VerticalStrain,
    Quantity::TangentialStrain,
    Quantity::RadialStrain,
];

/// One data row of the engine output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineRecord {
    pub depth: f64,
    pub radial_offset: f64,
    pub stresses: [f64; 4],
    pub deflection: f64,
    pub strains: [f64; 3],
}

impl EngineRecord {
    /// Which query point this record answers, if any. Full wins over half.
    pub fn query_point(&self, surface_thickness: f64) -> Option<QueryPoint> {
        QueryPoint::ALL
            .into_iter()
            .find(|p| within_abs(self.depth, p.depth(surface_thickness), DEPTH_TOLERANCE))
    }

    pub fn is_on_axis(&self) -> bool {
        self.radial_offset == 0.0
    }

    /// Deflection is not collected.
    pub fn responses(&self) -> ResponseSet {
        let mut set = ResponseSet::default();
        for (q, v) in STRESSES.iter().zip(self.stresses) {
            set.set(*q, v);
        }
        for (q, v) in STRAINS.iter().zip(self.strains) {
            set.set(*q, v);
        }
        set
    }
}

/// Parse one line; `None` for anything that is not a complete data record.
pub fn parse_record(line: &str) -> Option<EngineRecord> {
    let mut v = [0.0f64; MIN_RECORD_TOKENS];
    let mut found = 0;
    for (slot, m) in v.iter_mut().zip(NUMBER.find_iter(line)) {
        let value: f64 = m.as_str().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
        found += 1;
    }
    if found < MIN_RECORD_TOKENS {
        return None;
    }

    Some(EngineRecord {
        depth: v[0],
        radial_offset: v[1],
        stresses: [v[2], v[3], v[4], v[5]],
        deflection: v[6],
        strains: [v[7], v[8], v[9]],
    })
}

/// Scan output text for on-axis records at the full and half depths.
///
/// When several records match the same depth the last one wins; the engine
/// repeats interface depths for the layer below.
pub fn decode_output(text: &str, surface_thickness: f64) -> RunResult {
    let mut result = RunResult::default();

    for record in text.lines().filter_map(parse_record) {
        if !record.is_on_axis() {
            continue;
        }
        if let Some(point) = record.query_point(surface_thickness) {
            *result.at_mut(point) = record.responses();
        }
    }

    result
}

/// Remove a previous run's output so a silent engine cannot leave stale data behind.
pub fn discard_output(path: &Path) -> EngineResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(EngineError::OutputClear {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and decode the engine output file. Missing depths are logged, not errors.
pub fn read_output(path: &Path, surface_thickness: f64) -> EngineResult<RunResult> {
    let bytes = std::fs::read(path).map_err(|source| EngineError::OutputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let result = decode_output(&text, surface_thickness);

    for point in QueryPoint::ALL {
        if result.at(point).is_empty() {
            warn!(
                depth = point.depth(surface_thickness),
                point = point.label(),
                path = %path.display(),
                "no engine record at query depth"
            );
        }
    }
    debug!(missing = result.missing_count(), "decoded engine output");

    Ok(result)
}
