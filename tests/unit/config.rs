//! Unit tests for configuration

use market_intel::config::{parse_tickers, Config, DEFAULT_PORT, DEFAULT_TICKERS};
use market_intel::logging::LogFormat;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.tickers.len(), DEFAULT_TICKERS.len());
    assert_eq!(config.tickers[0], "AAPL");
    assert_eq!(config.data_dir.to_str(), Some("data"));
}

#[test]
fn test_parse_tickers() {
    assert_eq!(parse_tickers("aapl, msft ,,BTC-USD"), vec!["AAPL", "MSFT", "BTC-USD"]);
    assert!(parse_tickers(" , ").is_empty());
}

#[test]
fn test_log_format_for_environment() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("prod"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("sandbox"), LogFormat::Pretty);
}
