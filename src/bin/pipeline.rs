//! Batch pipeline: turn every `{TICKER}_raw.csv` in `DATA_DIR` into a
//! scored `{TICKER}_processed.csv`.
//!
//! Tickers come from the command line when given, otherwise from `TICKERS`.

use dotenvy::dotenv;
use market_intel::config::{parse_tickers, Config};
use market_intel::logging;
use market_intel::pipeline::run_pipeline;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let mut config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        config.tickers = parse_tickers(&args.join(","));
    }

    let report = run_pipeline(&config);
    for (ticker, rows) in &report.processed {
        info!(ticker = %ticker, rows = rows, "ok");
    }
    for (ticker, reason) in &report.failed {
        warn!(ticker = %ticker, reason = %reason, "failed");
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} of {} tickers failed", report.failed.len(), config.tickers.len()).into())
    }
}
