//! Technical indicator implementations.
//!
//! Every indicator returns values aligned one-to-one with the input candles.
//! Positions inside an indicator's warm-up window are `None`.

pub mod atr;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use atr::Atr;
pub use ema::Ema;
pub use macd::{Macd, MacdSeries};
pub use rsi::Rsi;
pub use sma::Sma;

use crate::types::Candle;

/// Trait for implementing technical indicators.
pub trait Indicator {
    /// What `compute` produces, aligned to the input candles.
    type Output;

    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Human-readable name, including its parameters.
    fn name(&self) -> String;

    /// Number of candles needed before the first defined value.
    fn min_periods(&self) -> usize;

    /// Compute the indicator over the whole candle slice.
    fn compute(&self, candles: &[Candle]) -> Self::Output;
}
