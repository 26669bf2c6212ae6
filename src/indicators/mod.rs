//! Technical indicators and the feature calculator built from them.

pub mod calculator;
pub mod window;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use calculator::*;
pub use window::RollingWindow;

pub use ta::Next;
