//! Exponential Moving Average (EMA) indicator.

use super::Indicator;
use crate::types::Candle;

/// EMA (Exponential Moving Average) indicator.
///
/// Multiplier `k = 2 / (span + 1)`, seeded with the simple average of the
/// first `span` values. Used on its own and as the building block of MACD.
#[derive(Debug, Clone, Copy)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Smooth an arbitrary value series. Output is aligned to `values`.
    pub fn smooth(&self, values: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; values.len()];
        if self.period == 0 || values.len() < self.period {
            return out;
        }

        let multiplier = 2.0 / (self.period as f64 + 1.0);

        // First EMA is SMA
        let mut ema = values[..self.period].iter().sum::<f64>() / self.period as f64;
        out[self.period - 1] = Some(ema);

        for (i, value) in values.iter().enumerate().skip(self.period) {
            ema = (value - ema) * multiplier + ema;
            out[i] = Some(ema);
        }

        out
    }
}

impl Indicator for Ema {
    type Output = Vec<Option<f64>>;

    fn id(&self) -> &str {
        "ema"
    }

    fn name(&self) -> String {
        format!("EMA ({})", self.period)
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<Option<f64>> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        self.smooth(&closes)
    }
}
