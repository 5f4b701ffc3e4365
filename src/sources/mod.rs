//! Candle sources.

pub mod binance;

pub use binance::BinanceClient;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::types::{CandleInterval, Series};

/// What to fetch: one pair, one interval, one time range (Unix ms, inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleQuery {
    pub symbol: String,
    pub interval: CandleInterval,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl CandleQuery {
    /// Trailing window of `days` ending at `now`.
    pub fn trailing(
        symbol: impl Into<String>,
        interval: CandleInterval,
        days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let start = now - Duration::days(i64::from(days));
        Self {
            symbol: symbol.into(),
            interval,
            start_ms: start.timestamp_millis(),
            end_ms: now.timestamp_millis(),
        }
    }

    /// Candles the window should hold if the exchange has no gaps.
    pub fn expected_len(&self) -> usize {
        let span = (self.end_ms - self.start_ms).max(0);
        (span / self.interval.millis()) as usize
    }
}

/// A source of validated OHLCV series.
#[async_trait]
pub trait CandleSource: Send + Sync {
    async fn fetch_series(&self, query: &CandleQuery) -> Result<Series>;
}
