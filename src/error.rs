use std::fmt;

use thiserror::Error;

use crate::types::IndicatorKind;

/// Why an analysis could not be completed with the data at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortfall {
    /// The series is shorter than the longest indicator warm-up.
    SeriesTooShort { required: usize, available: usize },
    /// An indicator value was read at a position still inside its warm-up window.
    Undefined {
        indicator: IndicatorKind,
        position: usize,
    },
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::SeriesTooShort {
                required,
                available,
            } => write!(f, "need {} candles, have {}", required, available),
            Shortfall::Undefined {
                indicator,
                position,
            } => write!(f, "{} undefined at position {}", indicator.name(), position),
        }
    }
}

/// Errors raised by the analysis core. The core never renders failure text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("insufficient data: {0}")]
    InsufficientData(Shortfall),

    #[error("invalid series: {reason}")]
    InvalidSeries { reason: String },
}

impl AnalysisError {
    pub fn undefined(indicator: IndicatorKind, position: usize) -> Self {
        AnalysisError::InsufficientData(Shortfall::Undefined {
            indicator,
            position,
        })
    }

    pub fn too_short(required: usize, available: usize) -> Self {
        AnalysisError::InsufficientData(Shortfall::SeriesTooShort {
            required,
            available,
        })
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidSeries {
            reason: reason.into(),
        }
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Candle source error: {0}")]
    Source(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
