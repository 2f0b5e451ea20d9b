use market::PricePoint;
use serde::{Deserialize, Serialize};
use stats::{round_to, ForecastErrors};

/// Accuracy of a forecast over a window of days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Root mean squared error, in price units.
    pub rmse: f64,
    /// Mean absolute percentage error, in percent.
    pub mape: f64,
    /// Share of day-over-day moves whose direction was called correctly, in percent.
    pub directional_accuracy: f64,
}

impl AccuracyMetrics {
    pub fn is_zero(&self) -> bool {
        self.rmse == 0.0 && self.mape == 0.0 && self.directional_accuracy == 0.0
    }
}

/// Which forecast column to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    Base,
    Refined,
}

impl PredictionKind {
    fn value(self, point: &PricePoint) -> Option<f64> {
        match self {
            PredictionKind::Base => point.predicted,
            PredictionKind::Refined => point.refined,
        }
    }
}

/// Base and refined accuracy over the same window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub base: AccuracyMetrics,
    pub refined: AccuracyMetrics,
}

impl ModelComparison {
    /// RMSE reduction of the refined forecast, positive when it helped
    pub fn rmse_improvement(&self) -> f64 {
        round_to(self.base.rmse - self.refined.rmse, 2)
    }
}

/// Score the refined forecast over `points`.
pub fn compute_metrics(points: &[PricePoint]) -> AccuracyMetrics {
    compute_metrics_for(points, PredictionKind::Refined)
}

/// Score one forecast column over `points`.
///
/// Only days carrying that forecast take part, and consecutive pairs of those
/// days are compared. Fewer than two such days gives all zeros. A pair whose
/// close is zero is dropped instead of poisoning the averages.
pub fn compute_metrics_for(points: &[PricePoint], kind: PredictionKind) -> AccuracyMetrics {
    let scored: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|p| kind.value(p).map(|forecast| (p.close, forecast)))
        .collect();

    if scored.len() < 2 {
        return AccuracyMetrics::default();
    }

    let mut errors = ForecastErrors::new();
    for (i, pair) in scored.windows(2).enumerate() {
        let (prev_close, prev_forecast) = pair[0];
        let (close, forecast) = pair[1];
        if !errors.push(prev_close, prev_forecast, close, forecast) {
            tracing::warn!(pair = i + 1, close, forecast, "skipping pair with undefined percentage error");
        }
    }

    if errors.count() == 0 {
        return AccuracyMetrics::default();
    }

    AccuracyMetrics {
        rmse: round_to(errors.rmse(), 2),
        mape: round_to(errors.mape(), 2),
        directional_accuracy: round_to(errors.hit_rate(), 1),
    }
}

/// Score both forecast columns over `points`.
pub fn compare(points: &[PricePoint]) -> ModelComparison {
    ModelComparison {
        base: compute_metrics_for(points, PredictionKind::Base),
        refined: compute_metrics_for(points, PredictionKind::Refined),
    }
}
