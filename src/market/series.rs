use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// Base model forecast of `close`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
    /// Forecast after the feedback agent's adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined: Option<f64>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            predicted: None,
            refined: None,
        }
    }

    pub fn with_predicted(self, predicted: f64) -> Self {
        Self {
            predicted: Some(predicted),
            ..self
        }
    }

    pub fn with_refined(self, refined: f64) -> Self {
        Self {
            refined: Some(refined),
            ..self
        }
    }

    /// True when `high`/`low` bracket both `open` and `close`
    pub fn is_consistent(&self) -> bool {
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }
}

/// Ordered daily price history, index = day offset from the first point.
///
/// A `Series` is never edited in place. Every pipeline stage builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// First `n` days, clamped to the series length
    pub fn prefix(&self, n: usize) -> &[PricePoint] {
        &self.points[..n.min(self.points.len())]
    }

    /// Closing prices in day order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

impl FromIterator<PricePoint> for Series {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
