// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Typed failures, grouped into the categories a caller (and the
// shell, through the exit code) can branch on:
//
//   Format — a data line is malformed
//   Io     — a file could not be read or written
//   Model  — the ML layer failed while fitting or predicting
//   Config — the run configuration is invalid

use std::path::PathBuf;
use thiserror::Error;

/// Failure category of any error this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Io,
    Model,
    Config,
}

impl ErrorKind {
    /// Process exit code for this category (sysexits.h values).
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Format => 65, // EX_DATAERR
            ErrorKind::Io => 74,     // EX_IOERR
            ErrorKind::Model => 70,  // EX_SOFTWARE
            ErrorKind::Config => 1,
        }
    }
}

/// Errors raised while reading and validating the input dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Invalid format in line {line}: {content}")]
    InvalidFormat { line: usize, content: String },

    #[error("Invalid format in line {line}: unbalanced quotes in {content}")]
    UnbalancedQuotes { line: usize, content: String },

    #[error("Invalid boolean value in line {line}: {value}")]
    InvalidLabel { line: usize, value: String },

    #[error("Cannot read dataset '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatasetError::Io { .. } => ErrorKind::Io,
            _ => ErrorKind::Format,
        }
    }

    /// 1-based line number of the offending line, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            DatasetError::InvalidFormat { line, .. }
            | DatasetError::UnbalancedQuotes { line, .. }
            | DatasetError::InvalidLabel { line, .. } => Some(*line),
            DatasetError::Io { .. } => None,
        }
    }
}

/// Errors surfaced by the ML collaborator.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Cannot train on an empty training set")]
    EmptyTrainingSet,

    #[error("No vocabulary terms found in the training texts")]
    EmptyVocabulary,

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Tensor readback failed: {0}")]
    Tensor(String),
}

/// Top-level error of a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Dataset(e) => e.kind(),
            PipelineError::Model(_) => ErrorKind::Model,
            PipelineError::Config(_) => ErrorKind::Config,
            PipelineError::Io { .. } => ErrorKind::Io,
        }
    }
}
