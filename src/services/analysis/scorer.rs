//! Probability scorer: rising/falling/ranging percentages from one row.

use crate::error::AnalysisError;
use crate::types::{IndicatorRow, ProbabilityTriple, ScoreCard, VolatilityRegime};

/// Percentage points added to `rising` per unit of total score.
pub const POINTS_PER_SCORE: f64 = 12.5;
/// ATR / close above this is the high-volatility regime.
pub const HIGH_VOLATILITY: f64 = 0.03;
/// ATR / close below this is the low-volatility regime.
pub const LOW_VOLATILITY: f64 = 0.01;
/// `ranging` is capped here under high volatility.
pub const HIGH_VOLATILITY_RANGING_CAP: f64 = 20.0;
/// `ranging` is floored here under low volatility.
pub const LOW_VOLATILITY_RANGING_FLOOR: f64 = 60.0;

/// +1 when strictly greater, otherwise -1.
fn vote(greater: bool) -> i8 {
    if greater {
        1
    } else {
        -1
    }
}

pub fn regime(volatility: f64) -> VolatilityRegime {
    if volatility > HIGH_VOLATILITY {
        VolatilityRegime::High
    } else if volatility < LOW_VOLATILITY {
        VolatilityRegime::Low
    } else {
        VolatilityRegime::Normal
    }
}

/// Directional split for a total score in -4..=4, before any volatility
/// adjustment.
pub fn directional(total: i8) -> ProbabilityTriple {
    let shift = f64::from(total) * POINTS_PER_SCORE;
    let rising = (50.0 + shift).clamp(0.0, 100.0);
    let falling = (50.0 - shift).clamp(0.0, 100.0);
    let ranging = (100.0 - rising - falling).max(0.0);
    ProbabilityTriple {
        rising,
        falling,
        ranging,
    }
}

/// Apply the regime's ranging bound. Outside the normal band the remainder
/// is split evenly, dropping any directional skew.
pub fn adjust_for_volatility(
    triple: ProbabilityTriple,
    regime: VolatilityRegime,
) -> ProbabilityTriple {
    let ranging = match regime {
        VolatilityRegime::Normal => return triple,
        VolatilityRegime::High => triple.ranging.min(HIGH_VOLATILITY_RANGING_CAP),
        VolatilityRegime::Low => triple.ranging.max(LOW_VOLATILITY_RANGING_FLOOR),
    };
    let half = (100.0 - ranging) / 2.0;
    ProbabilityTriple {
        rising: half,
        falling: half,
        ranging,
    }
}

/// Score one indicator row.
///
/// Needs every column the votes read plus ATR; any undefined input is
/// `InsufficientData`.
pub fn score(row: &IndicatorRow) -> Result<ScoreCard, AnalysisError> {
    let close = row.close;
    let trend_score = vote(close > row.ma_fast()?) + vote(close > row.ma_slow()?);
    let momentum_score = vote(row.rsi()? > 50.0) + vote(row.macd()? > row.macd_signal()?);
    let total = trend_score + momentum_score;

    let volatility = row.atr()? / close;
    let regime = regime(volatility);
    let probabilities = adjust_for_volatility(directional(total), regime);

    debug_assert!((probabilities.total() - 100.0).abs() < 1e-6);

    Ok(ScoreCard {
        trend_score,
        momentum_score,
        total,
        volatility,
        regime,
        probabilities,
    })
}
