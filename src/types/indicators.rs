use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// The indicator columns carried by an [`IndicatorFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    MacdSignal,
    MaFast,
    MaSlow,
    Atr,
}

impl IndicatorKind {
    /// Get display name for this indicator.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::MacdSignal => "MACD signal",
            IndicatorKind::MaFast => "MA fast",
            IndicatorKind::MaSlow => "MA slow",
            IndicatorKind::Atr => "ATR",
        }
    }
}

/// Indicator values at one candle position.
///
/// `None` means the indicator is still warming up at this position. Values
/// are read through the accessors, which turn `None` into
/// [`AnalysisError::InsufficientData`] instead of a default number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRow {
    pub position: usize,
    pub timestamp: i64,
    pub close: f64,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub ma_fast: Option<f64>,
    pub ma_slow: Option<f64>,
    pub atr: Option<f64>,
}

impl IndicatorRow {
    /// Raw optional value for a column.
    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Macd => self.macd,
            IndicatorKind::MacdSignal => self.macd_signal,
            IndicatorKind::MaFast => self.ma_fast,
            IndicatorKind::MaSlow => self.ma_slow,
            IndicatorKind::Atr => self.atr,
        }
    }

    /// Defined value for a column, or `InsufficientData`.
    pub fn require(&self, kind: IndicatorKind) -> Result<f64, AnalysisError> {
        self.get(kind)
            .ok_or_else(|| AnalysisError::undefined(kind, self.position))
    }

    pub fn rsi(&self) -> Result<f64, AnalysisError> {
        self.require(IndicatorKind::Rsi)
    }

    pub fn macd(&self) -> Result<f64, AnalysisError> {
        self.require(IndicatorKind::Macd)
    }

    pub fn macd_signal(&self) -> Result<f64, AnalysisError> {
        self.require(IndicatorKind::MacdSignal)
    }

    pub fn ma_fast(&self) -> Result<f64, AnalysisError> {
        self.require(IndicatorKind::MaFast)
    }

    pub fn ma_slow(&self) -> Result<f64, AnalysisError> {
        self.require(IndicatorKind::MaSlow)
    }

    pub fn atr(&self) -> Result<f64, AnalysisError> {
        self.require(IndicatorKind::Atr)
    }

    /// True when every column is defined.
    pub fn is_complete(&self) -> bool {
        [
            self.rsi,
            self.macd,
            self.macd_signal,
            self.ma_fast,
            self.ma_slow,
            self.atr,
        ]
        .iter()
        .all(Option::is_some)
    }
}

/// Indicator rows aligned one-to-one with the candles of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    pub fn new(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, position: usize) -> Option<&IndicatorRow> {
        self.rows.get(position)
    }

    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// Whole column in position order.
    pub fn column(&self, kind: IndicatorKind) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.get(kind)).collect()
    }
}
