//! Simple Moving Average (SMA) indicator.

use super::Indicator;
use crate::types::Candle;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the closes over a trailing window. The trend reading
/// compares price against a fast (20) and a slow (50) instance.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = Vec<Option<f64>>;

    fn id(&self) -> &str {
        match self.period {
            20 => "sma20",
            50 => "sma50",
            _ => "sma",
        }
    }

    fn name(&self) -> String {
        format!("SMA ({})", self.period)
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<Option<f64>> {
        let mut out = vec![None; candles.len()];
        if self.period == 0 || candles.len() < self.period {
            return out;
        }

        for (i, window) in candles.windows(self.period).enumerate() {
            let sum: f64 = window.iter().map(|c| c.close).sum();
            out[i + self.period - 1] = Some(sum / self.period as f64);
        }

        out
    }
}
