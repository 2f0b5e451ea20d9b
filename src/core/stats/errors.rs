// ============================================================================
// Forecast error accumulation
// ============================================================================

/// Running sums for comparing a forecast against realised values.
///
/// Each observation is a consecutive pair of (actual, forecast) values. The
/// squared and absolute-percentage errors are taken on the later element of
/// the pair; the direction test compares the up/down move of both series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForecastErrors {
    sum_squared: f64,
    sum_abs_pct: f64,
    direction_hits: usize,
    n: usize,
}

impl ForecastErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one consecutive pair.
    ///
    /// Returns `false` and leaves the sums untouched when the pair cannot
    /// contribute finite terms (zero actual, or non-finite inputs).
    pub fn push(&mut self, prev_actual: f64, prev_forecast: f64, actual: f64, forecast: f64) -> bool {
        if actual == 0.0 {
            return false;
        }
        let err = actual - forecast;
        let squared = err * err;
        let abs_pct = (err / actual).abs();
        if !squared.is_finite() || !abs_pct.is_finite() || !prev_actual.is_finite() || !prev_forecast.is_finite() {
            return false;
        }

        self.sum_squared += squared;
        self.sum_abs_pct += abs_pct;

        // A flat day counts as "not up" on either side
        let actual_up = actual > prev_actual;
        let forecast_up = forecast > prev_forecast;
        if actual_up == forecast_up {
            self.direction_hits += 1;
        }
        self.n += 1;
        true
    }

    /// Number of pairs that contributed
    pub fn count(&self) -> usize {
        self.n
    }

    pub fn direction_hits(&self) -> usize {
        self.direction_hits
    }

    /// Root mean squared error, zero with no observations
    pub fn rmse(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        (self.sum_squared / self.n as f64).sqrt()
    }

    /// Mean absolute percentage error in percent, zero with no observations
    pub fn mape(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.sum_abs_pct / self.n as f64 * 100.0
    }

    /// Share of matching directions in percent, zero with no observations
    pub fn hit_rate(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.direction_hits as f64 / self.n as f64 * 100.0
    }
}
