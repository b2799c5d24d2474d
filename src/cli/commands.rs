// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `run` and `validate`, and their
// flags.
//
// Every `run` flag is optional. The effective configuration is
// layered:
//   built-in defaults  ←  --config JSON file  ←  explicit flags
// so a flag always wins, and an absent flag leaves the file's
// (or the default) value untouched.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::pipeline_use_case::PipelineConfig;
use crate::domain::error::PipelineError;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train on a labelled CSV, evaluate on a held-out split and
    /// classify the example texts
    Run(RunArgs),

    /// Parse and validate a labelled CSV without training
    Validate(ValidateArgs),
}

/// All arguments for the `run` command.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Labelled CSV file: header line, then `text,label` rows
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// JSON file with any subset of the configuration fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the train/test shuffle and the epoch shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of records held out for evaluation, in [0, 1)
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// Number of full passes through the training data
    #[arg(long)]
    pub epochs: Option<usize>,

    /// Number of samples per optimiser step
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Adam learning rate
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Largest vocabulary kept, most frequent terms first
    #[arg(long)]
    pub max_vocab: Option<usize>,

    /// Text to classify after evaluation; repeat for several.
    /// Replaces the configured examples when given.
    #[arg(long = "example")]
    pub examples: Vec<String>,

    /// Append per-epoch training loss and accuracy to this CSV file
    #[arg(long)]
    pub metrics_csv: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Resolve the layered configuration.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl TryFrom<RunArgs> for PipelineConfig {
    type Error = PipelineError;

    fn try_from(a: RunArgs) -> Result<Self, Self::Error> {
        let mut cfg = match &a.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(v) = a.data          { cfg.data_path = v; }
        if let Some(v) = a.seed          { cfg.seed = v; }
        if let Some(v) = a.test_fraction { cfg.test_fraction = v; }
        if let Some(v) = a.epochs        { cfg.trainer.epochs = v; }
        if let Some(v) = a.batch_size    { cfg.trainer.batch_size = v; }
        if let Some(v) = a.learning_rate { cfg.trainer.learning_rate = v; }
        if let Some(v) = a.max_vocab     { cfg.trainer.max_vocab = v; }
        if let Some(v) = a.metrics_csv   { cfg.metrics_csv = Some(v); }
        if !a.examples.is_empty()        { cfg.examples = a.examples; }

        Ok(cfg)
    }
}

/// All arguments for the `validate` command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Labelled CSV file to check
    #[arg(long, default_value = "emails.csv")]
    pub data: PathBuf,
}
