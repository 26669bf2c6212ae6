//! Batch processing of raw ticker tables into processed feature tables.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::io;
use crate::signals::SignalEngine;

pub const RAW_SUFFIX: &str = "_raw.csv";
pub const PROCESSED_SUFFIX: &str = "_processed.csv";

pub fn raw_path(data_dir: &Path, ticker: &str) -> PathBuf {
    data_dir.join(format!("{}{}", ticker, RAW_SUFFIX))
}

pub fn processed_path(data_dir: &Path, ticker: &str) -> PathBuf {
    data_dir.join(format!("{}{}", ticker, PROCESSED_SUFFIX))
}

/// Read `{ticker}_raw.csv`, enrich and score it, write
/// `{ticker}_processed.csv`. Returns the number of rows written.
pub fn process_ticker(data_dir: &Path, ticker: &str) -> PipelineResult<usize> {
    let raw = raw_path(data_dir, ticker);
    if !raw.exists() {
        return Err(PipelineError::RawDataNotFound {
            ticker: ticker.to_string(),
            path: raw,
        });
    }

    let series = io::read_price_series(&raw)?;
    let rows = SignalEngine::run(&series)?;

    let processed = processed_path(data_dir, ticker);
    io::write_enriched(&processed, &rows)?;

    info!(
        ticker = %ticker,
        input_rows = series.len(),
        output_rows = rows.len(),
        path = %processed.display(),
        "Processed data for {} saved",
        ticker
    );
    Ok(rows.len())
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineReport {
    pub processed: Vec<(String, usize)>,
    pub failed: Vec<(String, String)>,
}

impl PipelineReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Process every configured ticker. A failing ticker is recorded and skipped.
pub fn run_pipeline(config: &Config) -> PipelineReport {
    info!(
        tickers = %config.tickers.join(", "),
        data_dir = %config.data_dir.display(),
        "Starting pipeline"
    );

    let mut report = PipelineReport::default();
    for ticker in &config.tickers {
        match process_ticker(&config.data_dir, ticker) {
            Ok(rows) => report.processed.push((ticker.clone(), rows)),
            Err(e) => {
                error!(ticker = %ticker, error = %e, "Failed to process ticker");
                report.failed.push((ticker.clone(), e.to_string()));
            }
        }
    }

    info!(
        processed = report.processed.len(),
        failed = report.failed.len(),
        "Pipeline execution completed"
    );
    report
}

/// Tickers with a processed table in `data_dir`, sorted. A missing directory
/// yields an empty list.
pub fn processed_tickers(data_dir: &Path) -> std::io::Result<Vec<String>> {
    if !data_dir.exists() {
        return Ok(Vec::new());
    }
    let mut tickers = Vec::new();
    for entry in std::fs::read_dir(data_dir)? {
        let name = entry?.file_name();
        if let Some(ticker) = name.to_str().and_then(|n| n.strip_suffix(PROCESSED_SUFFIX)) {
            if !ticker.is_empty() {
                tickers.push(ticker.to_string());
            }
        }
    }
    tickers.sort();
    Ok(tickers)
}
