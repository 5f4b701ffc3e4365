//! Average True Range (ATR) indicator.

use super::Indicator;
use crate::types::Candle;

/// ATR (Average True Range) indicator.
///
/// Measures market volatility by averaging true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
///
/// The first candle has no previous close, so the first `period` true ranges
/// start at position 1. Their mean seeds the average, then Wilder's smoothing
/// takes over.
#[derive(Debug, Clone, Copy)]
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate True Range.
    pub fn true_range(current: &Candle, previous: &Candle) -> f64 {
        let hl = current.high - current.low;
        let hc = (current.high - previous.close).abs();
        let lc = (current.low - previous.close).abs();
        hl.max(hc).max(lc)
    }
}

impl Indicator for Atr {
    type Output = Vec<Option<f64>>;

    fn id(&self) -> &str {
        "atr"
    }

    fn name(&self) -> String {
        format!("ATR ({})", self.period)
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<Option<f64>> {
        let mut out = vec![None; candles.len()];
        if self.period == 0 || candles.len() < self.min_periods() {
            return out;
        }

        // true_ranges[k] belongs to candle k + 1
        let true_ranges: Vec<f64> = candles
            .windows(2)
            .map(|w| Self::true_range(&w[1], &w[0]))
            .collect();
        let period = self.period as f64;

        let mut atr = true_ranges[..self.period].iter().sum::<f64>() / period;
        out[self.period] = Some(atr);

        for (k, tr) in true_ranges.iter().enumerate().skip(self.period) {
            atr = (atr * (period - 1.0) + tr) / period;
            out[k + 1] = Some(atr);
        }

        out
    }
}
