//! Plain-text rendering of a structured report.

use chrono::{DateTime, Utc};

use crate::types::{
    CandleInterval, MacdCategory, Outlook, PriceDirection, Report, ReportSegment, RiskCaveat,
    RsiCategory, Stance, TrendCategory,
};

/// Renders reports as the channel post: header, one line per segment, footer.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    channel_name: String,
    channel_tag: String,
}

impl TextRenderer {
    pub fn new(channel_name: impl Into<String>, channel_tag: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            channel_tag: channel_tag.into(),
        }
    }

    pub fn render(&self, report: &Report, now: DateTime<Utc>) -> String {
        let body: Vec<String> = report
            .segments
            .iter()
            .map(|segment| render_segment(segment, report.interval))
            .collect();

        format!(
            "{} technical analysis for {} 🚀\n\nAnalysis time: {} UTC\n\n{}\n\n🐳 {}",
            report.symbol,
            self.channel_name,
            now.format("%Y-%m-%d %H:%M:%S"),
            body.join("\n"),
            self.channel_tag
        )
    }
}

/// One line of commentary.
pub fn render_segment(segment: &ReportSegment, interval: CandleInterval) -> String {
    match segment {
        ReportSegment::PriceChange(change) => match change.direction {
            PriceDirection::Up => format!(
                "📊 Price rose over the last {} by {:.2}%.",
                interval.label(),
                change.magnitude_pct
            ),
            PriceDirection::Down => format!(
                "📊 Price fell over the last {} by {:.2}%.",
                interval.label(),
                change.magnitude_pct
            ),
            PriceDirection::Unchanged => {
                format!("📊 Price was unchanged over the last {}.", interval.label())
            }
        },
        ReportSegment::Trend { category } => match category {
            TrendCategory::Bullish => {
                "📈 Price is above MA20 and MA50, indicating a strong uptrend.".to_string()
            }
            TrendCategory::Bearish => {
                "📉 Price is below MA20 and MA50, indicating a strong downtrend.".to_string()
            }
            TrendCategory::Ranging => "↔️ Price is between MA20 and MA50, suggesting a possible trend change or consolidation.".to_string(),
        },
        ReportSegment::Rsi { category } => match category {
            RsiCategory::Overbought => {
                "🔥 RSI is above 70, indicating overbought conditions.".to_string()
            }
            RsiCategory::Oversold => {
                "❄️ RSI is below 30, indicating oversold conditions.".to_string()
            }
            RsiCategory::Neutral(value) => {
                format!("➖ RSI is at {:.2}, indicating neutral momentum.", value)
            }
        },
        ReportSegment::Macd { category } => match category {
            MacdCategory::Bullish => {
                "🐂 MACD is above the signal line, indicating bullish momentum.".to_string()
            }
            MacdCategory::Bearish => {
                "🐻 MACD is below the signal line, indicating bearish momentum.".to_string()
            }
        },
        ReportSegment::Probability { outlook, percent } => match outlook {
            Outlook::Rising => format!("🟢 Probability of rising: {:.1}%", percent),
            Outlook::Falling => format!("🔴 Probability of falling: {:.1}%", percent),
            Outlook::Ranging => format!("⚪ Probability of ranging: {:.1}%", percent),
        },
        ReportSegment::Guidance { stance } => match stance {
            Stance::Bullish => "✅ Outlook: conditions favour further upside.".to_string(),
            Stance::Bearish => "⚠️ Outlook: conditions favour further downside.".to_string(),
            Stance::Indecisive => {
                "⏸️ Outlook: no clear direction, wait for confirmation.".to_string()
            }
        },
        ReportSegment::RiskCaveat { caveat } => match caveat {
            RiskCaveat::OverboughtPullback => {
                "❗ RSI is overbought, so a pullback is possible before continuation.".to_string()
            }
            RiskCaveat::OversoldBounce => {
                "❗ RSI is oversold, so a relief bounce is possible.".to_string()
            }
        },
        ReportSegment::Disclaimer => "ℹ️ This analysis is not financial advice.".to_string(),
    }
}
