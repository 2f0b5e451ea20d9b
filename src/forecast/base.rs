use market::Series;
use sampling::UniformSource;
use serde::{Deserialize, Serialize};
use stats::round2;

/// Noise of the base forecaster: `predicted = close + (u - 0.5) * amplitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseNoise {
    pub amplitude: f64,
}

impl Default for BaseNoise {
    fn default() -> Self {
        Self { amplitude: 2.0 }
    }
}

/// Attach a base forecast to every point.
pub fn with_base_prediction<R: UniformSource + ?Sized>(series: &Series, rng: &mut R) -> Series {
    with_base_prediction_using(series, &BaseNoise::default(), rng)
}

pub fn with_base_prediction_using<R: UniformSource + ?Sized>(
    series: &Series,
    noise: &BaseNoise,
    rng: &mut R,
) -> Series {
    let annotated: Series = series
        .iter()
        .map(|point| {
            let predicted = point.close + (rng.next_uniform() - 0.5) * noise.amplitude;
            point.clone().with_predicted(round2(predicted))
        })
        .collect();

    tracing::debug!(points = annotated.len(), amplitude = noise.amplitude, "attached base predictions");
    annotated
}
