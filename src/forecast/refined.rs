use market::Series;
use sampling::UniformSource;
use serde::{Deserialize, Serialize};
use stats::round2;

/// Adjustment applied by the feedback agent:
/// `refined = predicted + (u - center) * scale`.
///
/// With the defaults the adjustment lies in (-0.15, 0.35) and averages +0.1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinementBias {
    pub center: f64,
    pub scale: f64,
}

impl Default for RefinementBias {
    fn default() -> Self {
        Self { center: 0.3, scale: 0.5 }
    }
}

/// Attach a refined forecast to every point that already carries a base one.
pub fn with_refined_prediction<R: UniformSource + ?Sized>(series: &Series, rng: &mut R) -> Series {
    with_refined_prediction_using(series, &RefinementBias::default(), rng)
}

/// Points without a base forecast are passed through and consume no draw.
pub fn with_refined_prediction_using<R: UniformSource + ?Sized>(
    series: &Series,
    bias: &RefinementBias,
    rng: &mut R,
) -> Series {
    let mut skipped = 0usize;
    let annotated: Series = series
        .iter()
        .map(|point| match point.predicted {
            Some(predicted) => {
                let refined = predicted + (rng.next_uniform() - bias.center) * bias.scale;
                point.clone().with_refined(round2(refined))
            }
            None => {
                skipped += 1;
                point.clone()
            }
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, "points without base prediction left unrefined");
    }
    tracing::debug!(points = annotated.len(), "attached refined predictions");
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::with_base_prediction;
    use chrono::NaiveDate;
    use market::{generate, PricePoint};
    use sampling::{ConstantSource, Mwc256, SequenceSource};

    #[test]
    fn test_refined_keeps_prior_fields() {
        let mut rng = Mwc256::with_seed(11);
        let series = generate(150, 150.0, &mut rng);
        let base = with_base_prediction(&series, &mut rng);
        let refined = with_refined_prediction(&base, &mut rng);

        assert_eq!(refined.len(), series.len());
        for (b, r) in base.iter().zip(refined.iter()) {
            assert_eq!(b.close, r.close);
            assert_eq!(b.predicted, r.predicted);
            let adj = r.refined.unwrap() - r.predicted.unwrap();
            // bounds widened by rounding of both values
            assert!(adj > -0.15 - 0.011 && adj < 0.35 + 0.011, "adjustment {adj}");
        }
    }

    #[test]
    fn test_points_without_prediction_pass_through() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let plain = PricePoint::new(date, 10.0, 11.0, 9.0, 10.0, 100);
        let with_pred = PricePoint::new(date.succ_opt().unwrap(), 10.0, 11.0, 9.0, 10.0, 100).with_predicted(10.0);
        let series = Series::from_points(vec![plain.clone(), with_pred]);

        let mut rng = SequenceSource::new(vec![0.3]);
        let refined = with_refined_prediction(&series, &mut rng);

        assert_eq!(refined.points()[0], plain);
        assert_eq!(refined.points()[1].refined, Some(10.0));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_bias_extremes() {
        let series = Series::from_points(vec![
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1.0, 1.0, 1.0, 1.0, 0).with_predicted(100.0),
        ]);
        let low = with_refined_prediction(&series, &mut ConstantSource::new(0.0));
        assert_eq!(low.points()[0].refined, Some(99.85));

        let high = with_refined_prediction(&series, &mut ConstantSource::new(0.98));
        assert_eq!(high.points()[0].refined, Some(100.34));
    }

    #[test]
    fn test_custom_bias() {
        let series = Series::from_points(vec![
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1.0, 1.0, 1.0, 1.0, 0).with_predicted(50.0),
        ]);
        let symmetric = RefinementBias { center: 0.5, scale: 1.0 };
        let out = with_refined_prediction_using(&series, &symmetric, &mut ConstantSource::new(0.5));
        assert_eq!(out.points()[0].refined, Some(50.0));
    }
}
