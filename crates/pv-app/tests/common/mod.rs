//! In-process stand-in for the response engine.

use std::cell::Cell;
use std::path::Path;

use pv_engine::{Engine, EngineError, EngineResult};
use pv_project::{ParameterGrid, SweepConfig};

/// Reads the input file and answers both query depths with values derived from it:
/// σz = -surface/base, εz = -thickness * 1e-5, everything else a fixed pattern.
pub struct ScriptedEngine {
    pub calls: Cell<usize>,
    pub fail_on_call: Option<usize>,
    pub omit_half: bool,
    pub write_once: bool,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
            fail_on_call: None,
            omit_half: false,
            write_once: false,
        }
    }
}

fn record(depth: f64, sigz: f64, epz: f64) -> String {
    format!(
        "{depth:10.4} {:8.4} {sigz:.6E} 0.1250E+00 0.2500E+00 0.0500E+00 0.7000E+00 {epz:.6E} 0.1100E-03 0.1200E-03\n",
        0.0
    )
}

impl Engine for ScriptedEngine {
    fn program(&self) -> String {
        "scripted".to_string()
    }

    fn run(&self, working_dir: &Path) -> EngineResult<()> {
        let call = self.calls.get();
        self.calls.set(call + 1);

        if self.fail_on_call == Some(call) {
            return Err(EngineError::Spawn {
                program: self.program(),
                source: std::io::Error::other("scripted failure"),
            });
        }
        if self.write_once && call > 0 {
            return Ok(());
        }

        let input = std::fs::read_to_string(working_dir.join("IITPAVE.in")).unwrap();
        let lines: Vec<&str> = input.lines().collect();
        let moduli: Vec<f64> = lines[1]
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        let thk: f64 = lines[3].split_whitespace().next().unwrap().parse().unwrap();

        let mut out = String::from(" IITPAVE results\n   Z     R    SigmaZ  SigmaT  SigmaR  TaoRZ  DispZ  epZ  epT  epR\n");
        out.push_str(&record(thk, -moduli[0] / moduli[1], -thk * 1e-5));
        // Interface depth repeated off axis; must be ignored.
        out.push_str(&format!("{thk:10.4} {:8.4} 9.9 9.9 9.9 9.9 9.9 9.9 9.9 9.9\n", 300.0));
        if !self.omit_half {
            out.push_str(&record(thk / 2.0, -2.0 * moduli[0] / moduli[1], -thk * 5e-6));
        }
        std::fs::write(working_dir.join("iitpave.out"), out).unwrap();
        Ok(())
    }
}

pub fn config_in(dir: &Path, grid: ParameterGrid) -> SweepConfig {
    let mut config = SweepConfig {
        grid,
        ..SweepConfig::default()
    };
    config.engine.working_dir = dir.to_path_buf();
    config.report.path = dir.join("results.xlsx");
    config
}
