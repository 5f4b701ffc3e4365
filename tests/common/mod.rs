//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use whale_room::types::{Candle, CandleInterval, Series};

/// Four-hour spacing in milliseconds.
pub const STEP_MS: i64 = 14_400_000;
pub const START_MS: i64 = 1_700_000_000_000;

/// Candles whose high/low sit `spread` (fractional) either side of the close.
pub fn candles_with_spread(closes: &[f64], spread: f64) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle {
            timestamp: START_MS + i as i64 * STEP_MS,
            open: close,
            high: close * (1.0 + spread),
            low: close * (1.0 - spread),
            close,
            volume: 1000.0,
        })
        .collect()
}

pub fn series(closes: &[f64]) -> Series {
    series_with_spread(closes, 0.001)
}

pub fn series_with_spread(closes: &[f64], spread: f64) -> Series {
    Series::new(
        "BTCUSDT",
        CandleInterval::FourHours,
        candles_with_spread(closes, spread),
    )
    .unwrap()
}

/// `count` closes growing 1% per candle from 100.
pub fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 * 1.01f64.powi(i as i32)).collect()
}

/// `count` closes shrinking 1% per candle from 100.
pub fn falling(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 * 0.99f64.powi(i as i32)).collect()
}

pub fn flat(count: usize) -> Vec<f64> {
    vec![100.0; count]
}

/// Oscillating closes for property checks across many rows.
pub fn wave(count: usize, amplitude: f64) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + amplitude * (i as f64 * 0.37).sin() + i as f64 * 0.05)
        .collect()
}

/// Binance kline array for a candle, as the REST API returns it.
pub fn kline_json(candle: &Candle) -> Value {
    json!([
        candle.timestamp,
        format!("{:.8}", candle.open),
        format!("{:.8}", candle.high),
        format!("{:.8}", candle.low),
        format!("{:.8}", candle.close),
        format!("{:.8}", candle.volume),
        candle.timestamp + STEP_MS - 1,
        "0",
        100,
        "0",
        "0",
        "0"
    ])
}
