//! Momentum indicators: RSI, MACD, returns and lags

pub mod change;
pub mod macd;
pub mod rsi;

pub use change::*;
pub use macd::*;
pub use rsi::*;
