//! Shared data models spanning the engine layers.

pub mod bar;
pub mod features;
pub mod signal;

pub use bar::{format_timestamp, Bar, PriceSeries};
pub use features::{EnrichedSeries, Feature, FeatureRow};
pub use signal::{ScoredRow, SignalLabel, SignalResult};
