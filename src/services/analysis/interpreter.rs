//! Discrete readings of the latest candle and indicator row.
//!
//! Comparisons are strict. Equality never counts as bullish: a close equal
//! to its MA reads as ranging, and MACD equal to its signal reads as bearish.

use crate::error::AnalysisError;
use crate::types::{
    Candle, IndicatorRow, Interpretation, MacdCategory, PriceChange, PriceDirection, RsiCategory,
    TrendCategory,
};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Close-to-close change between two consecutive candles.
pub fn price_change(previous: &Candle, current: &Candle) -> PriceChange {
    let pct = (current.close - previous.close) / previous.close * 100.0;
    let direction = if pct > 0.0 {
        PriceDirection::Up
    } else if pct < 0.0 {
        PriceDirection::Down
    } else {
        PriceDirection::Unchanged
    };

    PriceChange {
        direction,
        magnitude_pct: pct.abs(),
    }
}

pub fn trend(close: f64, ma_fast: f64, ma_slow: f64) -> TrendCategory {
    if close > ma_fast && ma_fast > ma_slow {
        TrendCategory::Bullish
    } else if close < ma_fast && ma_fast < ma_slow {
        TrendCategory::Bearish
    } else {
        TrendCategory::Ranging
    }
}

pub fn rsi(value: f64) -> RsiCategory {
    if value > RSI_OVERBOUGHT {
        RsiCategory::Overbought
    } else if value < RSI_OVERSOLD {
        RsiCategory::Oversold
    } else {
        RsiCategory::Neutral(value)
    }
}

pub fn macd(macd: f64, signal: f64) -> MacdCategory {
    if macd > signal {
        MacdCategory::Bullish
    } else {
        MacdCategory::Bearish
    }
}

/// Read the latest two candles and the row aligned with `current`.
pub fn interpret(
    previous: &Candle,
    current: &Candle,
    row: &IndicatorRow,
) -> Result<Interpretation, AnalysisError> {
    Ok(Interpretation {
        price_change: price_change(previous, current),
        trend: trend(row.close, row.ma_fast()?, row.ma_slow()?),
        rsi: rsi(row.rsi()?),
        macd: macd(row.macd()?, row.macd_signal()?),
    })
}
