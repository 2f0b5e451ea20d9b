use chrono::{Days, NaiveDate};
use sampling::UniformSource;
use serde::{Deserialize, Serialize};
use stats::round2;

use crate::{PricePoint, Series};

/// Upper bound on the up-front reservation; longer series grow as they go
const MAX_PREALLOC: usize = 4096;

/// Parameters of the random walk behind [`generate_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Number of trading days to produce
    pub days: usize,
    /// Starting level of the walk
    pub base_price: f64,
    /// Date of the first point
    pub start_date: NaiveDate,
    /// Drift added to every daily return
    pub trend: f64,
    /// Width of the uniform daily return shock
    pub volatility: f64,
    /// Intraday spread as a fraction of the day's price
    pub intraday_range: f64,
    /// Minimum daily volume
    pub volume_base: f64,
    /// Random volume added on top of `volume_base`
    pub volume_span: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            days: 200,
            base_price: 150.0,
            start_date: default_start_date(),
            trend: 0.0002,
            volatility: 0.02,
            intraday_range: 0.015,
            volume_base: 5_000_000.0,
            volume_span: 10_000_000.0,
        }
    }
}

impl GeneratorParams {
    pub fn new(days: usize, base_price: f64) -> Self {
        Self {
            days,
            base_price,
            ..Self::default()
        }
    }
}

/// 2024-01-01
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Generate `days` synthetic OHLCV points starting at `base_price`.
pub fn generate<R: UniformSource + ?Sized>(days: usize, base_price: f64, rng: &mut R) -> Series {
    generate_with(&GeneratorParams::new(days, base_price), rng)
}

/// Random walk with positive drift plus an intraday OHLC envelope.
///
/// Six draws are taken per day, in order: return shock, open, close, high
/// extension, low extension, volume. The walk level itself is carried
/// unrounded; only the emitted prices are rounded to cents.
pub fn generate_with<R: UniformSource + ?Sized>(params: &GeneratorParams, rng: &mut R) -> Series {
    if params.days == 0 {
        return Series::new();
    }
    if !(params.base_price.is_finite() && params.base_price > 0.0) {
        tracing::warn!(base_price = params.base_price, "base price must be positive; generating empty series");
        return Series::new();
    }

    let mut points = Vec::with_capacity(params.days.min(MAX_PREALLOC));
    let mut price = params.base_price;

    for i in 0..params.days {
        let Some(date) = params.start_date.checked_add_days(Days::new(i as u64)) else {
            tracing::warn!(day = i, "date overflow; truncating series");
            break;
        };

        let change = (rng.next_uniform() - 0.5) * params.volatility + params.trend;
        price *= 1.0 + change;

        let daily_volatility = price * params.intraday_range;
        let open = price + (rng.next_uniform() - 0.5) * daily_volatility;
        let close = price + (rng.next_uniform() - 0.5) * daily_volatility;
        let high = open.max(close) + rng.next_uniform() * daily_volatility * 0.5;
        let low = open.min(close) - rng.next_uniform() * daily_volatility * 0.5;
        let (open, high, low, close) = (round2(open), round2(high), round2(low), round2(close));
        if ![price, open, high, low, close].iter().all(|v| v.is_finite()) {
            tracing::warn!(day = i, price, "price walk left the finite range; truncating series");
            break;
        }
        let volume = (params.volume_base + rng.next_uniform() * params.volume_span).floor().max(0.0) as u64;

        points.push(PricePoint::new(date, open, high, low, close, volume));
    }

    tracing::debug!(
        days = points.len(),
        first = points.first().map(|p| p.close),
        last = points.last().map(|p| p.close),
        "generated price series"
    );

    Series::from_points(points)
}
