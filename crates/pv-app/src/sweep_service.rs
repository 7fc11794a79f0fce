//! Sweep execution: grid enumeration, per-run engine round trip, report assembly.

use std::path::{Path, PathBuf};
use std::time::Instant;

use pv_engine::{Engine, ProcessEngine, Quantity, ResponseSet, RunResult, RunSpec};
use pv_project::{Combination, SweepConfig};
use pv_results::{ReportBook, ReportRow, SweepManifest};
use tracing::{debug, info};

use crate::config_service;
use crate::error::{AppError, AppResult};
use crate::progress::{SweepProgressEvent, SweepStage};

/// Outcome of a persisted sweep.
#[derive(Debug, Clone)]
pub struct SweepResponse {
    pub sweep_id: String,
    pub artifact: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub combinations: usize,
    pub tables: usize,
    pub missing_cells: usize,
    pub elapsed_s: f64,
}

struct Progress<'a> {
    cb: Option<&'a mut dyn FnMut(SweepProgressEvent)>,
    started: Instant,
    total: usize,
}

impl Progress<'_> {
    fn emit(
        &mut self,
        stage: SweepStage,
        completed: usize,
        combination: Option<Combination>,
        message: Option<String>,
    ) {
        if let Some(cb) = self.cb.as_deref_mut() {
            cb(SweepProgressEvent {
                stage,
                completed,
                total: self.total,
                combination,
                elapsed_wall_s: self.started.elapsed().as_secs_f64(),
                message,
            });
        }
    }
}

fn describe(combo: &Combination) -> String {
    format!(
        "surface={} base={} thickness={}",
        combo.surface_modulus, combo.base_modulus, combo.surface_thickness
    )
}

fn combination_failed(combo: &Combination, err: pv_engine::EngineError) -> AppError {
    AppError::CombinationFailed {
        index: combo.index,
        combination: describe(combo),
        source: err,
    }
}

fn quantities(set: &ResponseSet) -> [Option<f64>; 7] {
    Quantity::ALL.map(|q| set.get(q))
}

/// Report row for one finished run. Absent quantities become empty cells.
pub fn build_row(spec: &RunSpec, result: &RunResult) -> AppResult<ReportRow> {
    let ratio = pv_core::modulus_ratio(spec.surface_modulus(), spec.base_modulus())?;
    Ok(ReportRow::new(
        spec.surface_modulus(),
        ratio,
        spec.surface_thickness(),
        quantities(&result.full),
        quantities(&result.half),
    ))
}

/// Run every grid combination through `engine`, strictly one at a time.
///
/// The first encoding or engine failure aborts the sweep; nothing is returned
/// for rows gathered before it.
pub fn run_sweep<E: Engine + ?Sized>(config: &SweepConfig, engine: &E) -> AppResult<ReportBook> {
    run_sweep_with_progress(config, engine, None)
}

/// [`run_sweep`] with progress events.
pub fn run_sweep_with_progress<E: Engine + ?Sized>(
    config: &SweepConfig,
    engine: &E,
    progress_cb: Option<&mut dyn FnMut(SweepProgressEvent)>,
) -> AppResult<ReportBook> {
    let total = config.grid.combination_count();
    let mut progress = Progress {
        cb: progress_cb,
        started: Instant::now(),
        total,
    };

    let working_dir = config.engine.working_dir.as_path();
    let input_path = working_dir.join(&config.engine.input_file);
    let output_path = working_dir.join(&config.engine.output_file);

    info!(
        total,
        engine = %engine.program(),
        dir = %working_dir.display(),
        "starting sweep"
    );
    progress.emit(SweepStage::Starting, 0, None, None);

    let mut book = ReportBook::new();
    for combo in config.grid.combinations() {
        book.ensure_table(combo.base_modulus);
        let spec = RunSpec::new(&combo, &config.constants);
        debug!(index = combo.index, "{}", describe(&combo));

        progress.emit(SweepStage::EncodingInput, combo.index, Some(combo), None);
        pv_engine::write_input(&spec, &input_path).map_err(|e| combination_failed(&combo, e))?;
        pv_engine::discard_output(&output_path).map_err(|e| combination_failed(&combo, e))?;

        progress.emit(SweepStage::RunningEngine, combo.index, Some(combo), None);
        engine
            .run(working_dir)
            .map_err(|e| combination_failed(&combo, e))?;

        progress.emit(SweepStage::DecodingOutput, combo.index, Some(combo), None);
        let result = pv_engine::read_output(&output_path, spec.surface_thickness())
            .map_err(|e| combination_failed(&combo, e))?;

        book.append(combo.base_modulus, build_row(&spec, &result)?);
        progress.emit(SweepStage::RowAppended, combo.index + 1, Some(combo), None);
    }

    info!(
        rows = book.row_count(),
        tables = book.tables().len(),
        missing_cells = book.missing_cells(),
        "sweep finished"
    );
    progress.emit(SweepStage::Completed, total, None, None);

    Ok(book)
}

/// Save the workbook and, if configured, the manifest. Returns the manifest path.
pub fn persist_report(
    config: &SweepConfig,
    book: &ReportBook,
    engine_program: &str,
) -> AppResult<Option<PathBuf>> {
    let artifact = config.report.path.as_path();
    let manifest = config.report.manifest.then(|| {
        SweepManifest::from_book(
            pv_results::compute_sweep_id(config),
            config.name.clone(),
            engine_program.to_string(),
            artifact,
            book,
        )
    });

    let manifest_path = pv_results::save_artifacts(book, artifact, manifest.as_ref())?;
    if let Some(path) = &manifest_path {
        debug!(path = %path.display(), "saved sweep manifest");
    }
    Ok(manifest_path)
}

/// Full sweep against the configured engine executable, persisted once at the end.
pub fn execute_sweep(
    config: &SweepConfig,
    mut progress_cb: Option<&mut dyn FnMut(SweepProgressEvent)>,
) -> AppResult<SweepResponse> {
    let started = Instant::now();
    config_service::validate_config(config)?;

    let engine = ProcessEngine::locate(&config.engine.executable, &config.engine.working_dir);
    let book = match progress_cb.as_mut() {
        Some(cb) => run_sweep_with_progress(config, &engine, Some(&mut **cb))?,
        None => run_sweep(config, &engine)?,
    };

    if let Some(cb) = progress_cb.as_deref_mut() {
        let total = config.grid.combination_count();
        cb(SweepProgressEvent {
            stage: SweepStage::SavingReport,
            completed: total,
            total,
            combination: None,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message: Some(config.report.path.display().to_string()),
        });
    }
    let manifest_path = persist_report(config, &book, &engine.program())?;

    Ok(SweepResponse {
        sweep_id: pv_results::compute_sweep_id(config),
        artifact: config.report.path.clone(),
        manifest_path,
        combinations: book.row_count(),
        tables: book.tables().len(),
        missing_cells: book.missing_cells(),
        elapsed_s: started.elapsed().as_secs_f64(),
    })
}

/// Write the input file for a single combination without running the engine.
pub fn encode_combination(
    config: &SweepConfig,
    surface_modulus: f64,
    base_modulus: f64,
    surface_thickness: f64,
    dest: &Path,
) -> AppResult<RunSpec> {
    if base_modulus == 0.0 {
        return Err(AppError::InvalidInput(
            "base modulus must be non-zero".to_string(),
        ));
    }
    let combo = Combination {
        index: 0,
        base_modulus,
        surface_modulus,
        surface_thickness,
    };
    let spec = RunSpec::new(&combo, &config.constants);
    pv_engine::write_input(&spec, dest)?;
    Ok(spec)
}

/// Decode an existing engine output file.
pub fn decode_file(path: &Path, surface_thickness: f64) -> AppResult<RunResult> {
    if !(surface_thickness.is_finite() && surface_thickness > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "surface thickness must be positive, got {}",
            surface_thickness
        )));
    }
    Ok(pv_engine::read_output(path, surface_thickness)?)
}
