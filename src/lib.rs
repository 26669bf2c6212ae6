//! Market intelligence engine: technical indicators, ML-ready features and a
//! heuristic trading signal derived from daily OHLCV series.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod signals;

pub use error::{EngineError, EngineResult, PipelineError};
