//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_TICKERS: [&str; 6] = ["AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "BTC-USD"];
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_PORT: u16 = 8080;

/// Deployment environment name from `APP_ENV`, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub tickers: Vec<String>,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            tickers: DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Read `DATA_DIR`, `TICKERS` (comma-separated) and `PORT`, falling back
    /// to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = env::var("DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let tickers = env::var("TICKERS")
            .ok()
            .map(|v| parse_tickers(&v))
            .filter(|t| !t.is_empty())
            .unwrap_or(defaults.tickers);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            data_dir,
            tickers,
            port,
        }
    }
}

pub fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect()
}
