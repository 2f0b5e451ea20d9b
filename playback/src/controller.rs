use std::time::Duration;

use accuracy::{compare, compute_metrics, AccuracyMetrics, ModelComparison};
use market::{PricePoint, Series};

use crate::PlaybackError;

pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 5.0;
pub const SPEED_STEP: f64 = 0.5;
pub const DEFAULT_START_INDEX: usize = 100;

/// Interval between ticks at 1x speed
const BASE_TICK: Duration = Duration::from_millis(1000);

/// Check a speed multiplier against the allowed slider positions
pub fn validate_speed(speed: f64) -> Result<f64, PlaybackError> {
    let steps = speed / SPEED_STEP;
    if !speed.is_finite() || !(MIN_SPEED..=MAX_SPEED).contains(&speed) || steps.fract() != 0.0 {
        return Err(PlaybackError::InvalidSpeed(speed));
    }
    Ok(speed)
}

/// Walks a read index over a precomputed series.
///
/// The series is never touched; the controller only decides how much of it
/// is visible. A reset swaps in a fresh series and rewinds to the start index.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    series: Series,
    index: usize,
    start_index: usize,
    running: bool,
    speed: f64,
}

impl PlaybackController {
    pub fn new(series: Series, start_index: usize) -> Self {
        let index = start_index.min(series.len());
        Self {
            series,
            index,
            start_index,
            running: false,
            speed: 1.0,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Result<Self, PlaybackError> {
        self.set_speed(speed)?;
        Ok(self)
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Number of visible days
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// No further tick can advance the index
    pub fn is_finished(&self) -> bool {
        self.index >= self.series.len().saturating_sub(1)
    }

    /// Start advancing; refused once the end is reached
    pub fn play(&mut self) -> bool {
        self.running = !self.is_finished();
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), PlaybackError> {
        self.speed = validate_speed(speed)?;
        Ok(())
    }

    /// Wall-clock time between ticks at the current speed
    pub fn tick_interval(&self) -> Duration {
        BASE_TICK.div_f64(self.speed)
    }

    /// Advance one day. Returns `true` if the index moved.
    ///
    /// Reaching the last index stops playback.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.is_finished() {
            self.running = false;
            return false;
        }
        self.index += 1;
        true
    }

    /// Replace the series and rewind, paused
    pub fn reset(&mut self, series: Series) {
        self.index = self.start_index.min(series.len());
        self.series = series;
        self.running = false;
        tracing::debug!(index = self.index, days = self.series.len(), "playback reset");
    }

    pub fn visible(&self) -> &[PricePoint] {
        self.series.prefix(self.index)
    }

    /// Refined-forecast accuracy over the visible window
    pub fn metrics(&self) -> AccuracyMetrics {
        compute_metrics(self.visible())
    }

    pub fn comparison(&self) -> ModelComparison {
        compare(self.visible())
    }
}
