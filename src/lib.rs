//! Whale Room - technical analysis reports for a single trading pair

pub mod config;
pub mod error;
pub mod services;
pub mod sinks;
pub mod sources;
pub mod types;

pub use config::Config;
pub use error::{AnalysisError, AppError, Result};
pub use services::{analyze, Analysis, IndicatorEngine, Runner, TextRenderer};
