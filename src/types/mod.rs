pub mod analysis;
pub mod candle;
pub mod indicators;

pub use analysis::*;
pub use candle::*;
pub use indicators::*;
