//! Indicator engine: turns a series into an aligned indicator frame.

use tracing::debug;

use crate::error::AnalysisError;
use crate::services::indicators::{Atr, Indicator, Macd, Rsi, Sma};
use crate::types::{IndicatorFrame, IndicatorRow, Series};

/// Computes RSI, MACD + signal, fast/slow SMA and ATR over one series.
///
/// Indicators run independently over the same candles; the series is only
/// borrowed.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    rsi: Rsi,
    macd: Macd,
    ma_fast: Sma,
    ma_slow: Sma,
    atr: Atr,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            rsi: Rsi::default(),
            macd: Macd::default(),
            ma_fast: Sma::new(20),
            ma_slow: Sma::new(50),
            atr: Atr::default(),
        }
    }
}

impl IndicatorEngine {
    /// Candles needed before every column of the frame is defined.
    pub fn min_periods(&self) -> usize {
        [
            self.rsi.min_periods(),
            self.macd.min_periods(),
            self.ma_fast.min_periods(),
            self.ma_slow.min_periods(),
            self.atr.min_periods(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Compute the frame. Warm-up positions hold `None`; never fails for a
    /// constructed series.
    pub fn compute(&self, series: &Series) -> IndicatorFrame {
        let candles = series.candles();

        let rsi = self.rsi.compute(candles);
        let macd = self.macd.compute(candles);
        let ma_fast = self.ma_fast.compute(candles);
        let ma_slow = self.ma_slow.compute(candles);
        let atr = self.atr.compute(candles);

        let rows: Vec<IndicatorRow> = candles
            .iter()
            .enumerate()
            .map(|(i, candle)| IndicatorRow {
                position: i,
                timestamp: candle.timestamp,
                close: candle.close,
                rsi: rsi[i],
                macd: macd.macd[i],
                macd_signal: macd.signal[i],
                ma_fast: ma_fast[i],
                ma_slow: ma_slow[i],
                atr: atr[i],
            })
            .collect();

        debug!(
            symbol = series.symbol(),
            candles = rows.len(),
            complete = rows.iter().filter(|r| r.is_complete()).count(),
            "Computed indicator frame"
        );

        IndicatorFrame::new(rows)
    }

    /// Like [`compute`](Self::compute), but refuses series shorter than the
    /// longest warm-up.
    pub fn compute_checked(&self, series: &Series) -> Result<IndicatorFrame, AnalysisError> {
        let required = self.min_periods();
        if series.len() < required {
            return Err(AnalysisError::too_short(required, series.len()));
        }
        Ok(self.compute(series))
    }
}
