//! Single-pass feature calculator over a price series.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::indicators::momentum::{build_macd, Lag, LogReturn, Macd, PctChange, Rsi};
use crate::indicators::trend::Sma;
use crate::indicators::volatility::BollingerBands;
use crate::indicators::Next;
use crate::models::{EnrichedSeries, Feature, FeatureRow, PriceSeries};

/// Fewest bars the calculator accepts.
pub const MIN_ROWS: usize = 50;

pub const SMA_SHORT: usize = 20;
pub const SMA_MEDIUM: usize = 50;
pub const SMA_LONG: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_K: f64 = 2.0;

/// Longest lookback among all features; output starts at this bar.
pub const WARM_UP: usize = SMA_LONG;

/// Per-call indicator state. Lives for one pass over one series.
struct IndicatorState {
    sma_20: Sma,
    sma_50: Sma,
    sma_200: Sma,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    log_return: LogReturn,
    close_lags: [Lag; 3],
    vol_lags: [Lag; 3],
    momentum_1d: PctChange,
    momentum_5d: PctChange,
}

impl IndicatorState {
    fn new() -> EngineResult<Self> {
        Ok(Self {
            sma_20: Sma::new(SMA_SHORT),
            sma_50: Sma::new(SMA_MEDIUM),
            sma_200: Sma::new(SMA_LONG),
            rsi: Rsi::new(RSI_PERIOD),
            macd: build_macd(MACD_FAST, MACD_SLOW, MACD_SIGNAL)?,
            bollinger: BollingerBands::new(BOLLINGER_PERIOD, BOLLINGER_K),
            log_return: LogReturn::new(),
            close_lags: [Lag::new(1), Lag::new(2), Lag::new(3)],
            vol_lags: [Lag::new(1), Lag::new(2), Lag::new(3)],
            momentum_1d: PctChange::new(1),
            momentum_5d: PctChange::new(5),
        })
    }

    fn advance(&mut self, row: &mut FeatureRow) {
        let close = row.bar.close;
        let volume = row.bar.volume;

        row.set(Feature::Sma20, self.sma_20.next(close));
        row.set(Feature::Sma50, self.sma_50.next(close));
        row.set(Feature::Sma200, self.sma_200.next(close));
        row.set(Feature::Rsi, self.rsi.next(close));

        let macd = self.macd.next(close);
        row.set(Feature::Macd, Some(macd.macd));
        row.set(Feature::MacdSignal, Some(macd.signal));

        let bands = self.bollinger.next(close);
        row.set(Feature::BbMiddle, bands.map(|b| b.middle));
        row.set(Feature::BbStd, bands.map(|b| b.std));
        row.set(Feature::BbUpper, bands.map(|b| b.upper));
        row.set(Feature::BbLower, bands.map(|b| b.lower));
        row.set(Feature::Volatility, bands.map(|b| b.std));

        row.set(Feature::LogReturn, self.log_return.next(close));

        let [c1, c2, c3] = &mut self.close_lags;
        row.set(Feature::CloseLag1, c1.next(close));
        row.set(Feature::CloseLag2, c2.next(close));
        row.set(Feature::CloseLag3, c3.next(close));

        let [v1, v2, v3] = &mut self.vol_lags;
        row.set(Feature::VolLag1, v1.next(volume));
        row.set(Feature::VolLag2, v2.next(volume));
        row.set(Feature::VolLag3, v3.next(volume));

        row.set(Feature::Momentum1d, self.momentum_1d.next(close));
        row.set(Feature::Momentum5d, self.momentum_5d.next(close));
    }
}

pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// Compute every feature for every bar, warm-up rows included.
    ///
    /// Rows whose windows have not filled carry `None` for those features.
    pub fn annotate(series: &PriceSeries) -> EngineResult<Vec<FeatureRow>> {
        let mut state = IndicatorState::new()?;
        Ok(series
            .bars()
            .iter()
            .map(|bar| {
                let mut row = FeatureRow::new(*bar);
                state.advance(&mut row);
                row
            })
            .collect())
    }

    /// Compute features and drop every row with an undefined feature.
    pub fn compute(series: &PriceSeries) -> EngineResult<EnrichedSeries> {
        if series.len() < MIN_ROWS {
            return Err(EngineError::InsufficientHistory {
                required: MIN_ROWS,
                actual: series.len(),
            });
        }

        let rows: Vec<FeatureRow> = Self::annotate(series)?
            .into_iter()
            .filter(FeatureRow::is_complete)
            .collect();

        debug!(
            input_rows = series.len(),
            output_rows = rows.len(),
            warm_up = WARM_UP,
            "IndicatorCalculator: enriched series"
        );

        Ok(EnrichedSeries::from_complete_rows(rows))
    }
}
