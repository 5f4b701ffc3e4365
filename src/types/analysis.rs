use serde::{Deserialize, Serialize};

use super::CandleInterval;

/// Direction of the last candle-to-candle close move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    Up,
    Down,
    Unchanged,
}

/// Last close-to-close change. `magnitude_pct` is absolute and unrounded;
/// renderers choose the precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub direction: PriceDirection,
    pub magnitude_pct: f64,
}

/// Close relative to the fast and slow moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendCategory {
    Bullish,
    Bearish,
    Ranging,
}

/// RSI band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum RsiCategory {
    Overbought,
    Oversold,
    Neutral(f64),
}

impl RsiCategory {
    pub fn is_overbought(&self) -> bool {
        matches!(self, RsiCategory::Overbought)
    }

    pub fn is_oversold(&self) -> bool {
        matches!(self, RsiCategory::Oversold)
    }
}

/// MACD line relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdCategory {
    Bullish,
    Bearish,
}

/// Discrete reading of the latest candle and indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub price_change: PriceChange,
    pub trend: TrendCategory,
    pub rsi: RsiCategory,
    pub macd: MacdCategory,
}

/// ATR-to-close band that drives the ranging adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityRegime {
    High,
    Normal,
    Low,
}

/// Rising/falling/ranging percentages. Components lie in [0, 100] and sum
/// to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTriple {
    pub rising: f64,
    pub falling: f64,
    pub ranging: f64,
}

impl ProbabilityTriple {
    pub fn total(&self) -> f64 {
        self.rising + self.falling + self.ranging
    }
}

/// Everything the probability scorer derived for one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub trend_score: i8,
    pub momentum_score: i8,
    pub total: i8,
    pub volatility: f64,
    pub regime: VolatilityRegime,
    pub probabilities: ProbabilityTriple,
}

/// Branch chosen by the guidance generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Bullish,
    Bearish,
    Indecisive,
}

/// RSI extreme pointing against the chosen stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCaveat {
    OverboughtPullback,
    OversoldBounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    pub stance: Stance,
    pub caveat: Option<RiskCaveat>,
}

/// Which outcome a probability line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Rising,
    Falling,
    Ranging,
}

/// One line of the report as structured data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReportSegment {
    PriceChange(PriceChange),
    Trend { category: TrendCategory },
    Rsi { category: RsiCategory },
    Macd { category: MacdCategory },
    Probability { outlook: Outlook, percent: f64 },
    Guidance { stance: Stance },
    RiskCaveat { caveat: RiskCaveat },
    Disclaimer,
}

/// Ordered analysis output for one invocation. Built and discarded per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub symbol: String,
    pub interval: CandleInterval,
    /// Open time (Unix ms) of the latest candle analysed.
    pub as_of: i64,
    pub segments: Vec<ReportSegment>,
}
