//! Report assembly: stage outputs in fixed order as structured segments.

use crate::types::{
    CandleInterval, Guidance, Interpretation, Outlook, Report, ReportSegment, ScoreCard,
};

pub fn assemble(
    symbol: &str,
    interval: CandleInterval,
    as_of: i64,
    interpretation: &Interpretation,
    score: &ScoreCard,
    guidance: &Guidance,
) -> Report {
    let p = &score.probabilities;
    let mut segments = vec![
        ReportSegment::PriceChange(interpretation.price_change),
        ReportSegment::Trend {
            category: interpretation.trend,
        },
        ReportSegment::Rsi {
            category: interpretation.rsi,
        },
        ReportSegment::Macd {
            category: interpretation.macd,
        },
        ReportSegment::Probability {
            outlook: Outlook::Rising,
            percent: p.rising,
        },
        ReportSegment::Probability {
            outlook: Outlook::Falling,
            percent: p.falling,
        },
        ReportSegment::Probability {
            outlook: Outlook::Ranging,
            percent: p.ranging,
        },
        ReportSegment::Guidance {
            stance: guidance.stance,
        },
    ];

    if let Some(caveat) = guidance.caveat {
        segments.push(ReportSegment::RiskCaveat { caveat });
    }
    segments.push(ReportSegment::Disclaimer);

    Report {
        symbol: symbol.to_string(),
        interval,
        as_of,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn inputs() -> (Interpretation, ScoreCard) {
        let interpretation = Interpretation {
            price_change: PriceChange {
                direction: PriceDirection::Up,
                magnitude_pct: 1.0,
            },
            trend: TrendCategory::Bullish,
            rsi: RsiCategory::Overbought,
            macd: MacdCategory::Bullish,
        };
        let score = ScoreCard {
            trend_score: 2,
            momentum_score: 2,
            total: 4,
            volatility: 0.02,
            regime: VolatilityRegime::Normal,
            probabilities: ProbabilityTriple {
                rising: 100.0,
                falling: 0.0,
                ranging: 0.0,
            },
        };
        (interpretation, score)
    }

    #[test]
    fn test_segment_order_with_caveat() {
        let (interpretation, score) = inputs();
        let guidance = Guidance {
            stance: Stance::Bullish,
            caveat: Some(RiskCaveat::OverboughtPullback),
        };
        let report = assemble("BTCUSDT", CandleInterval::FourHours, 42, &interpretation, &score, &guidance);

        assert_eq!(report.as_of, 42);
        assert_eq!(report.segments.len(), 10);
        assert!(matches!(report.segments[0], ReportSegment::PriceChange(_)));
        assert!(matches!(report.segments[1], ReportSegment::Trend { .. }));
        assert!(matches!(report.segments[2], ReportSegment::Rsi { .. }));
        assert!(matches!(report.segments[3], ReportSegment::Macd { .. }));
        assert_eq!(
            report.segments[4],
            ReportSegment::Probability {
                outlook: Outlook::Rising,
                percent: 100.0
            }
        );
        assert!(matches!(
            report.segments[6],
            ReportSegment::Probability {
                outlook: Outlook::Ranging,
                ..
            }
        ));
        assert!(matches!(report.segments[7], ReportSegment::Guidance { .. }));
        assert!(matches!(report.segments[8], ReportSegment::RiskCaveat { .. }));
        assert_eq!(report.segments[9], ReportSegment::Disclaimer);
    }

    #[test]
    fn test_no_caveat_segment_without_caveat() {
        let (interpretation, score) = inputs();
        let guidance = Guidance {
            stance: Stance::Bullish,
            caveat: None,
        };
        let report = assemble("BTCUSDT", CandleInterval::FourHours, 0, &interpretation, &score, &guidance);
        assert_eq!(report.segments.len(), 9);
        assert_eq!(report.segments.last(), Some(&ReportSegment::Disclaimer));
    }

    #[test]
    fn test_report_serializes_with_kind_tags() {
        let (interpretation, score) = inputs();
        let guidance = Guidance {
            stance: Stance::Bullish,
            caveat: None,
        };
        let report = assemble("BTCUSDT", CandleInterval::FourHours, 0, &interpretation, &score, &guidance);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["interval"], "4h");
        assert_eq!(json["segments"][0]["kind"], "price_change");
        assert_eq!(json["segments"][2]["category"]["state"], "overbought");
        assert_eq!(json["segments"][8]["kind"], "disclaimer");
    }
}
