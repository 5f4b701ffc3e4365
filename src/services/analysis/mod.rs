//! Market analysis pipeline.
//!
//! Series → indicator frame → interpretation → probability score →
//! guidance → report. Every stage is a pure function of its inputs, so
//! running the pipeline twice on the same series gives identical output.

pub mod guidance;
pub mod interpreter;
pub mod report;
pub mod scorer;

pub use guidance::guidance;
pub use interpreter::interpret;
pub use report::assemble;
pub use scorer::score;

use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;
use crate::services::engine::IndicatorEngine;
use crate::types::{Guidance, IndicatorFrame, Interpretation, Report, ScoreCard, Series};

/// Everything produced for one series. The report is what gets rendered;
/// the other fields are the intermediate readings it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub interpretation: Interpretation,
    pub score: ScoreCard,
    pub guidance: Guidance,
    pub report: Report,
}

/// Analyse an already computed frame. `frame` must belong to `series`.
pub fn analyze_frame(series: &Series, frame: &IndicatorFrame) -> Result<Analysis, AnalysisError> {
    let candles = series.candles();
    if frame.len() != candles.len() {
        return Err(AnalysisError::invalid(format!(
            "indicator frame has {} rows for {} candles",
            frame.len(),
            candles.len()
        )));
    }
    if candles.len() < 2 {
        return Err(AnalysisError::too_short(2, candles.len()));
    }

    let current = &candles[candles.len() - 1];
    let previous = &candles[candles.len() - 2];
    let row = &frame.rows()[frame.len() - 1];

    let interpretation = interpret(previous, current, row)?;
    let score = score(row)?;
    let guidance = guidance(&score.probabilities, &interpretation.rsi);
    let report = assemble(
        series.symbol(),
        series.interval(),
        current.timestamp,
        &interpretation,
        &score,
        &guidance,
    );

    debug!(
        symbol = series.symbol(),
        total = score.total,
        regime = ?score.regime,
        stance = ?guidance.stance,
        "Analysis complete"
    );

    Ok(Analysis {
        interpretation,
        score,
        guidance,
        report,
    })
}

/// Run the whole pipeline with the default indicator settings.
pub fn analyze(series: &Series) -> Result<Analysis, AnalysisError> {
    let engine = IndicatorEngine::default();
    let frame = engine.compute_checked(series)?;
    analyze_frame(series, &frame)
}
