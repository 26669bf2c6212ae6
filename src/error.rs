//! Error taxonomy for the feature engine and its file-based collaborators.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Feature;

/// Failures raised by the indicator calculator and the signal scorer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("insufficient history: {actual} bars supplied, at least {required} required")]
    InsufficientHistory { required: usize, actual: usize },

    #[error("malformed series: {0}")]
    MalformedSeries(String),

    #[error("missing feature: {0}")]
    MissingFeature(Feature),

    #[error("invalid {indicator} period: {period}")]
    InvalidPeriod {
        indicator: &'static str,
        period: usize,
    },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Failures raised while moving tables between flat files and the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("raw data for {ticker} not found at {}", path.display())]
    RawDataNotFound { ticker: String, path: PathBuf },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
