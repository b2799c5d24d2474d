// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Arguments are parsed by
// `clap`; all business logic is delegated to Layer 2.
//
// Two commands are supported:
//   1. `run`      — load, split, train, evaluate, predict examples
//   2. `validate` — load and validate the CSV only
//
// This layer owns stdout. Progress goes through `tracing` (stderr),
// so the report printed here stays machine-readable.

pub mod commands;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, RunArgs, ValidateArgs};

use crate::application::pipeline_use_case::{PipelineConfig, PipelineUseCase};
use crate::application::validate_use_case::ValidateUseCase;
use crate::data::loader::CsvLoader;
use crate::domain::error::{DatasetError, ErrorKind, ModelError, PipelineError};
use crate::infra::metrics::MetricsLogger;
use crate::ml::BurnTextClassifier;

/// The main CLI struct. clap generates the argument parsing
/// code from the fields via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "spam-classifier",
    version,
    about = "Train a spam classifier on a labelled CSV, report its metrics and classify example emails."
)]
pub struct Cli {
    /// The subcommand to run (run or validate)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. This layer only routes
    /// and prints; it never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args)      => run_pipeline(args),
            Commands::Validate(args) => run_validate(args),
        }
    }
}

/// Handles the `run` subcommand.
fn run_pipeline(args: RunArgs) -> Result<()> {
    let json = args.json;
    let config = PipelineConfig::try_from(args)?;
    config.validate()?;

    tracing::info!("Reading dataset from '{}'", config.data_path.display());

    let mut classifier = BurnTextClassifier::new(config.trainer.clone(), config.seed);
    if let Some(path) = &config.metrics_csv {
        let logger = MetricsLogger::new(path)
            .with_context(|| format!("Cannot create metrics log '{}'", path.display()))?;
        classifier = classifier.with_metrics_logger(logger);
    }

    let loader = CsvLoader::new(&config.data_path);
    let outcome = PipelineUseCase::new(config, loader, classifier).execute()?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).context("Cannot serialise report")?;
        println!("{rendered}");
    } else {
        print!("{}", report::render_report(&outcome));
    }
    Ok(())
}

/// Handles the `validate` subcommand.
fn run_validate(args: ValidateArgs) -> Result<()> {
    let summary = ValidateUseCase::new(CsvLoader::new(&args.data)).execute()?;
    print!("{}", report::render_summary(&summary));
    Ok(())
}

/// Classify an error for the process exit code by walking its
/// cause chain for the first typed error this crate knows.
pub fn error_kind(err: &anyhow::Error) -> ErrorKind {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PipelineError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<DatasetError>() {
            return e.kind();
        }
        if cause.downcast_ref::<ModelError>().is_some() {
            return ErrorKind::Model;
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorKind::Io;
        }
    }
    ErrorKind::Config
}
