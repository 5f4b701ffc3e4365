//! Qualitative guidance from the probability triple.

use crate::types::{Guidance, ProbabilityTriple, RiskCaveat, RsiCategory, Stance};

/// Pick the stance by strict majority, then attach a caveat when RSI is
/// stretched in the same direction.
pub fn guidance(probabilities: &ProbabilityTriple, rsi: &RsiCategory) -> Guidance {
    let ProbabilityTriple {
        rising,
        falling,
        ranging,
    } = *probabilities;

    let stance = if rising > falling && rising > ranging {
        Stance::Bullish
    } else if falling > rising && falling > ranging {
        Stance::Bearish
    } else {
        Stance::Indecisive
    };

    let caveat = match stance {
        Stance::Bullish if rsi.is_overbought() => Some(RiskCaveat::OverboughtPullback),
        Stance::Bearish if rsi.is_oversold() => Some(RiskCaveat::OversoldBounce),
        _ => None,
    };

    Guidance { stance, caveat }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(rising: f64, falling: f64, ranging: f64) -> ProbabilityTriple {
        ProbabilityTriple {
            rising,
            falling,
            ranging,
        }
    }

    #[test]
    fn test_strict_majority_picks_stance() {
        let neutral = RsiCategory::Neutral(50.0);
        assert_eq!(guidance(&triple(75.0, 25.0, 0.0), &neutral).stance, Stance::Bullish);
        assert_eq!(guidance(&triple(25.0, 75.0, 0.0), &neutral).stance, Stance::Bearish);
        assert_eq!(guidance(&triple(20.0, 20.0, 60.0), &neutral).stance, Stance::Indecisive);
    }

    #[test]
    fn test_ties_are_indecisive() {
        let neutral = RsiCategory::Neutral(50.0);
        assert_eq!(guidance(&triple(50.0, 50.0, 0.0), &neutral).stance, Stance::Indecisive);
        assert_eq!(guidance(&triple(40.0, 20.0, 40.0), &neutral).stance, Stance::Indecisive);
    }

    #[test]
    fn test_overbought_caveat_only_when_bullish() {
        let g = guidance(&triple(100.0, 0.0, 0.0), &RsiCategory::Overbought);
        assert_eq!(g.caveat, Some(RiskCaveat::OverboughtPullback));

        let g = guidance(&triple(0.0, 100.0, 0.0), &RsiCategory::Overbought);
        assert_eq!(g.caveat, None);
    }

    #[test]
    fn test_oversold_caveat_only_when_bearish() {
        let g = guidance(&triple(0.0, 100.0, 0.0), &RsiCategory::Oversold);
        assert_eq!(g.caveat, Some(RiskCaveat::OversoldBounce));

        let g = guidance(&triple(50.0, 50.0, 0.0), &RsiCategory::Oversold);
        assert_eq!(g.caveat, None);
    }

    #[test]
    fn test_neutral_rsi_has_no_caveat() {
        let g = guidance(&triple(100.0, 0.0, 0.0), &RsiCategory::Neutral(65.0));
        assert_eq!(g.caveat, None);
    }
}
