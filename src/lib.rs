//! Simulated hybrid transformer + RL stock predictor.
//!
//! The pipeline is four pure stages, each fed by the previous one:
//! [`market::generate_with`] → [`forecast::with_base_prediction`] →
//! [`forecast::with_refined_prediction`] → [`accuracy::compute_metrics`] over
//! any prefix of the result. Randomness always comes from the caller.

pub use accuracy;
pub use forecast;
pub use market;
pub use sampling;
pub use stats;

pub mod pipeline;

pub use pipeline::{run_pipeline, PipelineParams};
