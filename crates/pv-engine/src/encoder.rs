//! Renders a [`RunSpec`] into the engine's line-oriented input file.

use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::quantity::QueryPoint;
use crate::spec::RunSpec;

/// Number of layers in the structure (surface, base, granular, subgrade).
const LAYER_COUNT: u32 = 4;
/// Number of (depth, radial offset) query points.
const QUERY_COUNT: u32 = 2;
/// Closes the query block.
const TRAILER: u32 = 2;

/// Input file contents for one run.
///
/// Numbers use default formatting, not fixed width. The subgrade is
/// semi-infinite and has no thickness entry.
pub fn render_input(spec: &RunSpec) -> String {
    let c = spec.constants();
    let nu = c.poisson_ratio;
    let thk = spec.surface_thickness();

    let mut out = format!("{LAYER_COUNT}\n");
    out.push_str(&format!(
        "{} {} {} {}\n",
        spec.surface_modulus(),
        spec.base_modulus(),
        c.granular_modulus,
        c.subgrade_modulus
    ));
    out.push_str(&format!("{nu} {nu} {nu} {nu}\n"));
    out.push_str(&format!(
        "{} {} {}\n",
        thk, c.base_thickness, c.granular_thickness
    ));
    out.push_str(&format!("{} {}\n", c.axle_load, c.tyre_contact_radius));
    out.push_str(&format!("{QUERY_COUNT}\n"));
    for point in QueryPoint::ALL {
        out.push_str(&format!("{} 0\n", point.depth(thk)));
    }
    out.push_str(&format!("{TRAILER}\n"));
    out
}

/// Write the input file, fully closed before returning.
pub fn write_input(spec: &RunSpec, path: &Path) -> EngineResult<()> {
    let content = render_input(spec);
    std::fs::write(path, content).map_err(|source| EngineError::EncodeIo {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote engine input");
    Ok(())
}
