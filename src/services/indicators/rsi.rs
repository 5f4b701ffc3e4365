//! Relative Strength Index (RSI) indicator.

use super::Indicator;
use crate::types::Candle;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
///
/// Averages are seeded with the mean of the first `period` moves and then
/// follow Wilder's smoothing (factor `1/period`).
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// RSI from smoothed averages.
    ///
    /// No losses saturates at 100. No movement at all (flat market) reads 50.
    fn from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return if avg_gain == 0.0 { 50.0 } else { 100.0 };
        }

        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

impl Indicator for Rsi {
    type Output = Vec<Option<f64>>;

    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> String {
        format!("RSI ({})", self.period)
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<Option<f64>> {
        let mut out = vec![None; candles.len()];
        if self.period == 0 || candles.len() < self.min_periods() {
            return out;
        }

        // changes[k] is the move into candle k + 1
        let changes: Vec<f64> = candles.windows(2).map(|w| w[1].close - w[0].close).collect();
        let period = self.period as f64;

        let mut avg_gain = changes[..self.period]
            .iter()
            .map(|c| c.max(0.0))
            .sum::<f64>()
            / period;
        let mut avg_loss = changes[..self.period]
            .iter()
            .map(|c| (-c).max(0.0))
            .sum::<f64>()
            / period;
        out[self.period] = Some(Self::from_averages(avg_gain, avg_loss));

        for (k, change) in changes.iter().enumerate().skip(self.period) {
            avg_gain = (avg_gain * (period - 1.0) + change.max(0.0)) / period;
            avg_loss = (avg_loss * (period - 1.0) + (-change).max(0.0)) / period;
            out[k + 1] = Some(Self::from_averages(avg_gain, avg_loss));
        }

        out
    }
}
