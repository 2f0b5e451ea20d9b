//! Synthetic daily OHLCV market data.

mod generator;
mod series;

pub use generator::*;
pub use series::*;
