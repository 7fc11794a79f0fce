#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use pv_app::{SweepStage, execute_sweep};
use pv_project::{ParameterGrid, SweepConfig};
use pv_results::SweepManifest;

/// Answers both query depths listed in the input file.
const ENGINE: &str = r#"#!/bin/sh
test -f IITPAVE.in || exit 4
awk 'NR == 7 || NR == 8 { printf "%10.4f  0.0000 -0.4000E+00 0.2000E+00 0.2000E+00 0.1000E-01 0.6900E+00 -0.2000E-03 0.1500E-03 0.1500E-03\n", $1 }' IITPAVE.in > iitpave.out
"#;

#[test]
fn process_engine_sweep_persists_workbook_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("engine.sh");
    std::fs::write(&exe, ENGINE).unwrap();
    let mut perms = std::fs::metadata(&exe).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&exe, perms).unwrap();

    let mut config = SweepConfig {
        grid: ParameterGrid {
            surface_moduli: vec![2000.0, 4000.0],
            base_moduli: vec![500.0, 2000.0],
            surface_thicknesses: vec![40.0, 45.0],
        },
        ..SweepConfig::default()
    };
    config.engine.executable = "engine.sh".into();
    config.engine.working_dir = dir.path().to_path_buf();
    config.report.path = dir.path().join("out").join("results.xlsx");

    let mut saw_save = false;
    let response = execute_sweep(
        &config,
        Some(&mut |event| {
            if event.stage == SweepStage::SavingReport {
                saw_save = true;
            }
        }),
    )
    .unwrap();

    assert!(saw_save);
    assert_eq!(response.combinations, 8);
    assert_eq!(response.tables, 2);
    assert_eq!(response.missing_cells, 0);
    assert!(response.artifact.exists());

    let manifest = SweepManifest::load(&response.manifest_path.unwrap()).unwrap();
    assert_eq!(manifest.sweep_id, response.sweep_id);
    let titles: Vec<&str> = manifest.tables.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Base_500", "Base_2000"]);
    assert!(manifest.engine.ends_with("engine.sh"));
}
