//! MACD (Moving Average Convergence Divergence) indicator.

use super::{Ema, Indicator};
use crate::types::Candle;

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
///
/// The signal EMA is seeded from the first nine defined MACD values, so it
/// starts `signal_period - 1` candles after the MACD line.
#[derive(Debug, Clone, Copy)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

/// MACD and signal line, aligned to the input candles.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast: Ema::new(fast_period),
            slow: Ema::new(slow_period),
            signal: Ema::new(signal_period),
        }
    }
}

impl Indicator for Macd {
    type Output = MacdSeries;

    fn id(&self) -> &str {
        "macd"
    }

    fn name(&self) -> String {
        format!(
            "MACD ({}, {}, {})",
            self.fast.period(),
            self.slow.period(),
            self.signal.period()
        )
    }

    fn min_periods(&self) -> usize {
        self.fast.period().max(self.slow.period()) + self.signal.period() - 1
    }

    fn compute(&self, candles: &[Candle]) -> MacdSeries {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let fast = self.fast.smooth(&closes);
        let slow = self.slow.smooth(&closes);

        let macd: Vec<Option<f64>> = fast
            .iter()
            .zip(slow.iter())
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) => Some(f - s),
                _ => None,
            })
            .collect();

        // Smooth only the defined tail, then re-align.
        let mut signal = vec![None; macd.len()];
        if let Some(start) = macd.iter().position(Option::is_some) {
            let defined: Vec<f64> = macd[start..].iter().flatten().copied().collect();
            for (offset, value) in self.signal.smooth(&defined).into_iter().enumerate() {
                signal[start + offset] = value;
            }
        }

        MacdSeries { macd, signal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::*;

    #[test]
    fn test_macd_id_and_name() {
        let macd = Macd::default();
        assert_eq!(macd.id(), "macd");
        assert_eq!(macd.name(), "MACD (12, 26, 9)");
    }

    #[test]
    fn test_macd_min_periods() {
        assert_eq!(Macd::default().min_periods(), 34);
    }

    #[test]
    fn test_macd_warm_up_offsets() {
        let out = Macd::default().compute(&candles_from_closes(&rising_closes(60)));
        assert!(out.macd[24].is_none());
        assert!(out.macd[25].is_some());
        assert!(out.signal[32].is_none());
        assert!(out.signal[33].is_some());
        assert_eq!(out.macd.len(), 60);
        assert_eq!(out.signal.len(), 60);
    }

    #[test]
    fn test_macd_insufficient_data() {
        let out = Macd::default().compute(&candles_from_closes(&rising_closes(25)));
        assert!(out.macd.iter().all(Option::is_none));
        assert!(out.signal.iter().all(Option::is_none));
    }

    #[test]
    fn test_macd_uptrend_above_signal() {
        let out = Macd::default().compute(&candles_from_closes(&rising_closes(60)));
        let macd = out.macd[59].unwrap();
        let signal = out.signal[59].unwrap();
        assert!(macd > 0.0);
        assert!(macd > signal, "macd {} signal {}", macd, signal);
    }

    #[test]
    fn test_macd_downtrend_below_zero() {
        let out = Macd::default().compute(&candles_from_closes(&falling_closes(60)));
        assert!(out.macd[59].unwrap() < 0.0);
    }

    #[test]
    fn test_macd_flat_is_zero() {
        let out = Macd::default().compute(&candles_from_closes(&[100.0; 40]));
        assert_eq!(out.macd[39], Some(0.0));
        assert_eq!(out.signal[39], Some(0.0));
    }
}
