mod logging;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use litmerge_core::{AppConfig, ExitCode, LitmergeError};
use litmerge_linkage::{LinkageError, MergePipeline};

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "litmerge",
    about = "Merge literary award, catalog and bestseller datasets into one book collection",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format.
    /// Also enabled by setting LITMERGE_JSON=1.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the standard location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the source JSON files.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Directory the merged dataset is written to.
    #[arg(long, global = true)]
    output_dir: Option<String>,

    /// Title and author similarity both must reach this value (0.0-1.0).
    #[arg(long, global = true)]
    threshold: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge all sources and write the dataset, unmatched lists and report.
    Merge {
        /// Overwrite previous outputs without backing them up.
        #[arg(long)]
        no_backup: bool,
    },

    /// Merge all sources and print the report without writing anything.
    Report,

    /// Print the effective configuration.
    Config,
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err) as i32);
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();
    let json_output = cli.json || std::env::var("LITMERGE_JSON").as_deref() == Ok("1");

    let config = load_config(&cli)?;
    let level = if cli.verbose { "debug" } else { config.log.level.as_str() };
    logging::init(level)?;
    tracing::debug!(config_path = %AppConfig::config_path().display(), "parsed cli");

    match cli.command {
        // ── Merge ──────────────────────────────────────────────────────────
        Commands::Merge { no_backup } => {
            let mut config = config;
            if no_backup {
                config.output.backup_existing = false;
            }
            let pipeline = MergePipeline::new(config);
            let run = pipeline.run()?;
            let written = pipeline.write_outputs(&run)?;
            let dur = start.elapsed().as_millis();

            if json_output {
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": { "report": run.report, "written": written },
                    "meta": { "duration_ms": dur }
                }))?;
            } else {
                println!("{}", run.report.render_table());
                println!(
                    "Output files saved to: {}/",
                    pipeline.config().output_dir().display()
                );
                for path in &written {
                    if let Some(name) = path.file_name() {
                        println!("  - {}", name.to_string_lossy());
                    }
                }
            }
        }

        // ── Report ─────────────────────────────────────────────────────────
        Commands::Report => {
            let run = MergePipeline::new(config).run()?;
            let dur = start.elapsed().as_millis();

            if json_output {
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": run.report,
                    "meta": { "duration_ms": dur }
                }))?;
            } else {
                print!("{}", run.report.render_table());
            }
        }

        // ── Config ─────────────────────────────────────────────────────────
        Commands::Config => {
            if json_output {
                print_json(&serde_json::json!({"status": "ok", "data": config}))?;
            } else {
                print!("{}", toml::to_string_pretty(&config).context("serialize config")?);
            }
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

/// Config file, then command-line overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => AppConfig::load().context("load config")?,
    };

    if let Some(dir) = &cli.data_dir {
        config.paths.data_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.paths.output_dir = dir.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.matching.fuzzy_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    if let Some(err) = err.downcast_ref::<LinkageError>() {
        return err.exit_code();
    }
    if let Some(err) = err.downcast_ref::<LitmergeError>() {
        return err.exit_code();
    }
    ExitCode::GeneralError
}

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
