pub mod analysis;
pub mod engine;
pub mod indicators;
pub mod render;
pub mod runner;

pub use analysis::{analyze, analyze_frame, Analysis};
pub use engine::IndicatorEngine;
pub use render::TextRenderer;
pub use runner::Runner;
