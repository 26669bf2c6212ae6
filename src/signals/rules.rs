//! Individual scoring rules. Each returns a signed contribution.

use crate::error::EngineResult;
use crate::models::{Feature, FeatureRow};

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_LEAN_LOW: f64 = 45.0;
pub const RSI_LEAN_HIGH: f64 = 55.0;

/// Scoring rule families, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RsiMomentum,
    MacdCrossover,
    TrendVsSma50,
    SmaOrdering,
    BollingerExtremity,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::RsiMomentum,
        Rule::MacdCrossover,
        Rule::TrendVsSma50,
        Rule::SmaOrdering,
        Rule::BollingerExtremity,
    ];

    /// Look up this rule's inputs on `row` and evaluate it.
    pub fn evaluate(&self, row: &FeatureRow) -> EngineResult<f64> {
        Ok(match self {
            Rule::RsiMomentum => rsi_momentum(row.require(Feature::Rsi)?),
            Rule::MacdCrossover => macd_crossover(
                row.require(Feature::Macd)?,
                row.require(Feature::MacdSignal)?,
            ),
            Rule::TrendVsSma50 => trend_vs_sma50(row.close(), row.require(Feature::Sma50)?),
            Rule::SmaOrdering => {
                sma_ordering(row.require(Feature::Sma20)?, row.require(Feature::Sma50)?)
            }
            Rule::BollingerExtremity => bollinger_extremity(
                row.close(),
                row.require(Feature::BbLower)?,
                row.require(Feature::BbUpper)?,
            ),
        })
    }
}

/// Exactly one branch fires: <30, >70, <45, >55, else none.
pub fn rsi_momentum(rsi: f64) -> f64 {
    if rsi < RSI_OVERSOLD {
        2.0
    } else if rsi > RSI_OVERBOUGHT {
        -2.0
    } else if rsi < RSI_LEAN_LOW {
        0.5
    } else if rsi > RSI_LEAN_HIGH {
        -0.5
    } else {
        0.0
    }
}

/// Equality counts as bearish.
pub fn macd_crossover(macd: f64, signal: f64) -> f64 {
    if macd > signal {
        1.5
    } else {
        -1.5
    }
}

pub fn trend_vs_sma50(close: f64, sma_50: f64) -> f64 {
    if close > sma_50 {
        1.0
    } else {
        -1.0
    }
}

pub fn sma_ordering(sma_20: f64, sma_50: f64) -> f64 {
    if sma_20 > sma_50 {
        1.0
    } else {
        -1.0
    }
}

/// Band boundaries count as inside.
pub fn bollinger_extremity(close: f64, lower: f64, upper: f64) -> f64 {
    if close < lower {
        2.0
    } else if close > upper {
        -2.0
    } else {
        0.0
    }
}
