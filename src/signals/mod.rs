//! Signal evaluation: rules, scoring, labelling.

pub mod engine;
pub mod rules;
pub mod scoring;
pub mod summary;

pub use engine::SignalEngine;
pub use rules::Rule;
pub use scoring::*;
pub use summary::MarketSummary;
