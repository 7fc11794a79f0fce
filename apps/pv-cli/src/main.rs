use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use pv_app::{AppResult, SweepProgressEvent, SweepStage, config_service, sweep_service};
use pv_engine::{QueryPoint, RunResult};
use pv_project::SweepConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(about = "pavesweep - parameter sweeps over an external pavement-response engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full sweep and write the report workbook
    Run {
        /// Sweep config (YAML or JSON); built-in grid when omitted
        config_path: Option<PathBuf>,
        /// Override the report workbook path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a sweep config file
    Validate {
        /// Path to the config file
        config_path: PathBuf,
    },
    /// Write the built-in sweep config to a file
    Init {
        /// Destination (YAML, or JSON by extension)
        config_path: PathBuf,
    },
    /// Write the engine input file for one combination without running the engine
    Encode {
        /// Sweep config supplying the fixed constants; built-in when omitted
        config_path: Option<PathBuf>,
        #[arg(long)]
        surface_modulus: f64,
        #[arg(long)]
        base_modulus: f64,
        #[arg(long)]
        thickness: f64,
        /// Destination file (defaults to the configured input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode an existing engine output file
    Decode {
        /// Path to the engine output file
        output_path: PathBuf,
        /// Surface thickness the run was made with
        #[arg(long)]
        thickness: f64,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_run(None, None),
        Some(Commands::Run {
            config_path,
            output,
        }) => cmd_run(config_path.as_deref(), output),
        Some(Commands::Validate { config_path }) => cmd_validate(&config_path),
        Some(Commands::Init { config_path }) => cmd_init(&config_path),
        Some(Commands::Encode {
            config_path,
            surface_modulus,
            base_modulus,
            thickness,
            output,
        }) => cmd_encode(
            config_path.as_deref(),
            surface_modulus,
            base_modulus,
            thickness,
            output.as_deref(),
        ),
        Some(Commands::Decode {
            output_path,
            thickness,
        }) => cmd_decode(&output_path, thickness),
    }
}

fn load_or_default(config_path: Option<&Path>) -> AppResult<SweepConfig> {
    match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading sweep config");
            config_service::load_config(path)
        }
        None => Ok(SweepConfig::default()),
    }
}

fn cmd_run(config_path: Option<&Path>, output: Option<PathBuf>) -> AppResult<()> {
    let mut config = load_or_default(config_path)?;
    if let Some(path) = output {
        config.report.path = path;
    }

    println!(
        "Running sweep '{}': {} combinations",
        config.name,
        config.grid.combination_count()
    );

    let mut last_emit = Instant::now();
    let response = sweep_service::execute_sweep(
        &config,
        Some(&mut |event| {
            let boundary = matches!(
                event.stage,
                SweepStage::Starting | SweepStage::SavingReport | SweepStage::Completed
            );
            if boundary || last_emit.elapsed().as_millis() >= 100 {
                render_cli_progress(&event);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Sweep completed: {}", response.sweep_id);
    println!("  Combinations:  {}", response.combinations);
    println!("  Tables:        {}", response.tables);
    println!("  Empty cells:   {}", response.missing_cells);
    println!("  Wall time:     {:.2}s", response.elapsed_s);
    println!("  Report:        {}", response.artifact.display());
    if let Some(manifest) = &response.manifest_path {
        println!("  Manifest:      {}", manifest.display());
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(120));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &SweepProgressEvent) {
    let width = 28usize;
    let fraction = event.fraction_complete();
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    let mut line = format!(
        "\r[{}] {:>4}/{:<4} phase={:<8} elapsed={:.1}s",
        bar,
        event.completed,
        event.total,
        event.stage.label(),
        event.elapsed_wall_s
    );
    if let Some(c) = &event.combination {
        line.push_str(&format!(
            "  E1={} E2={} h1={}",
            c.surface_modulus, c.base_modulus, c.surface_thickness
        ));
    }
    if let Some(msg) = &event.message {
        line.push_str(&format!("  {}", msg));
    }
    print!("{}", line);
    let _ = io::stdout().flush();
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = config_service::load_config(config_path)?;
    println!("✓ Config is valid");
    println!(
        "  {} surface moduli x {} base moduli x {} thicknesses = {} runs",
        config.grid.surface_moduli.len(),
        config.grid.base_moduli.len(),
        config.grid.surface_thicknesses.len(),
        config.grid.combination_count()
    );
    Ok(())
}

fn cmd_init(config_path: &Path) -> AppResult<()> {
    config_service::save_config(config_path, &SweepConfig::default())?;
    println!("✓ Wrote default config to {}", config_path.display());
    Ok(())
}

fn cmd_encode(
    config_path: Option<&Path>,
    surface_modulus: f64,
    base_modulus: f64,
    thickness: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let config = load_or_default(config_path)?;
    let dest = match output {
        Some(path) => path.to_path_buf(),
        None => config.engine.working_dir.join(&config.engine.input_file),
    };
    sweep_service::encode_combination(&config, surface_modulus, base_modulus, thickness, &dest)?;
    println!("✓ Wrote engine input to {}", dest.display());
    Ok(())
}

fn cmd_decode(output_path: &Path, thickness: f64) -> AppResult<()> {
    let result = sweep_service::decode_file(output_path, thickness)?;
    print_result(&result, thickness);
    Ok(())
}

fn print_result(result: &RunResult, thickness: f64) {
    for point in QueryPoint::ALL {
        println!("{} depth (z = {}):", point.label(), point.depth(thickness));
        for (quantity, value) in result.at(point).iter() {
            match value {
                Some(v) => println!("  {:<3} {:>14.6e}", quantity.symbol(), v),
                None => println!("  {:<3} {:>14}", quantity.symbol(), "-"),
            }
        }
    }
}
