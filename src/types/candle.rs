use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Candle granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl CandleInterval {
    /// Get the interval from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1h" => Some(CandleInterval::OneHour),
            "4h" => Some(CandleInterval::FourHours),
            "1d" => Some(CandleInterval::OneDay),
            _ => None,
        }
    }

    /// Exchange code for this interval.
    pub fn code(&self) -> &'static str {
        match self {
            CandleInterval::OneHour => "1h",
            CandleInterval::FourHours => "4h",
            CandleInterval::OneDay => "1d",
        }
    }

    /// Nominal candle width in milliseconds.
    pub fn millis(&self) -> i64 {
        match self {
            CandleInterval::OneHour => 3_600_000,
            CandleInterval::FourHours => 14_400_000,
            CandleInterval::OneDay => 86_400_000,
        }
    }

    /// Human-readable span, e.g. "4 hours".
    pub fn label(&self) -> &'static str {
        match self {
            CandleInterval::OneHour => "1 hour",
            CandleInterval::FourHours => "4 hours",
            CandleInterval::OneDay => "24 hours",
        }
    }
}

/// OHLCV candle. `timestamp` is the open time in Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    fn validate(&self, position: usize) -> Result<(), AnalysisError> {
        let prices = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (field, value) in prices {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::invalid(format!(
                    "{} at position {} is not a positive finite price ({})",
                    field, position, value
                )));
            }
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(AnalysisError::invalid(format!(
                "volume at position {} is not a non-negative finite number ({})",
                position, self.volume
            )));
        }
        Ok(())
    }
}

/// Immutable, time-ordered candles for one pair at one interval.
///
/// Construction validates the whole sequence; once built, a `Series` is
/// non-empty with strictly increasing timestamps and sane prices. Gaps in
/// time are tolerated: consumers work positionally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    symbol: String,
    interval: CandleInterval,
    candles: Vec<Candle>,
}

impl Series {
    pub fn new(
        symbol: impl Into<String>,
        interval: CandleInterval,
        candles: Vec<Candle>,
    ) -> Result<Self, AnalysisError> {
        if candles.is_empty() {
            return Err(AnalysisError::invalid("empty series"));
        }

        for (i, candle) in candles.iter().enumerate() {
            candle.validate(i)?;
        }

        if let Some(i) = candles
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(AnalysisError::invalid(format!(
                "timestamps not strictly increasing at position {} ({} then {})",
                i + 1,
                candles[i].timestamp,
                candles[i + 1].timestamp
            )));
        }

        Ok(Self {
            symbol: symbol.into(),
            interval,
            candles,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn interval(&self) -> CandleInterval {
        self.interval
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false for a constructed series; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn latest(&self) -> &Candle {
        &self.candles[self.candles.len() - 1]
    }
}
