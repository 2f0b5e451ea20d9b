use forecast::{with_base_prediction_using, with_refined_prediction_using, BaseNoise, RefinementBias};
use market::{generate_with, GeneratorParams, Series};
use sampling::UniformSource;
use serde::{Deserialize, Serialize};

/// Everything needed to build a fully annotated series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub generator: GeneratorParams,
    pub base_noise: BaseNoise,
    pub refinement: RefinementBias,
}

impl PipelineParams {
    pub fn new(days: usize, base_price: f64) -> Self {
        Self {
            generator: GeneratorParams::new(days, base_price),
            ..Self::default()
        }
    }
}

/// Generate a series and run both forecast stages over it, drawing from one source.
pub fn run_pipeline<R: UniformSource + ?Sized>(params: &PipelineParams, rng: &mut R) -> Series {
    let raw = generate_with(&params.generator, rng);
    let predicted = with_base_prediction_using(&raw, &params.base_noise, rng);
    let refined = with_refined_prediction_using(&predicted, &params.refinement, rng);
    tracing::debug!(days = refined.len(), "pipeline complete");
    refined
}
