use std::fmt;

use accuracy::{hybrid_benchmark, AccuracyMetrics};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stats::{pct_change, round2};

use crate::PlaybackController;

/// Which forecast lines the chart shows. Never affects the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub show_predictions: bool,
    pub show_refined: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            show_predictions: true,
            show_refined: true,
        }
    }
}

/// One chart sample with hidden lines dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refined: Option<f64>,
}

/// Numbers shown on the metric cards.
///
/// A live value of zero (too little data yet) is replaced by the hybrid
/// model's published figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayMetrics {
    pub rmse: f64,
    pub directional_accuracy: f64,
}

impl DisplayMetrics {
    pub fn from_live(live: &AccuracyMetrics) -> Self {
        let published = hybrid_benchmark();
        Self {
            rmse: if live.rmse == 0.0 { published.rmse } else { live.rmse },
            directional_accuracy: if live.directional_accuracy == 0.0 {
                published.directional_accuracy
            } else {
                live.directional_accuracy
            },
        }
    }
}

/// Everything the dashboard shows for the current playback position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub index: usize,
    pub total: usize,
    pub running: bool,
    pub speed: f64,
    pub latest_price: f64,
    pub price_change_pct: f64,
    pub metrics: AccuracyMetrics,
    pub base_metrics: AccuracyMetrics,
    pub display: DisplayMetrics,
    pub chart: Vec<ChartRow>,
}

pub fn snapshot(controller: &PlaybackController, visibility: &Visibility) -> DashboardSnapshot {
    let visible = controller.visible();
    let latest_price = visible.last().map_or(0.0, |p| p.close);
    let price_change_pct = match visible {
        [.., prev, last] => round2(pct_change(prev.close, last.close)),
        _ => 0.0,
    };

    let comparison = controller.comparison();
    let chart = visible
        .iter()
        .map(|p| ChartRow {
            date: p.date,
            close: p.close,
            predicted: p.predicted.filter(|_| visibility.show_predictions),
            refined: p.refined.filter(|_| visibility.show_refined),
        })
        .collect();

    DashboardSnapshot {
        index: controller.index(),
        total: controller.len(),
        running: controller.is_running(),
        speed: controller.speed(),
        latest_price,
        price_change_pct,
        metrics: comparison.refined,
        base_metrics: comparison.base,
        display: DisplayMetrics::from_live(&comparison.refined),
        chart,
    }
}

impl fmt::Display for DashboardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trend = if self.price_change_pct >= 0.0 { "up" } else { "down" };
        writeln!(f, "Current price:        ${:.2} ({} {:.2}%)", self.latest_price, trend, self.price_change_pct)?;
        writeln!(f, "Directional accuracy: {:.1}%", self.display.directional_accuracy)?;
        writeln!(f, "RMSE:                 {:.2}", self.display.rmse)?;
        writeln!(f, "MAPE:                 {:.2}%", self.metrics.mape)?;
        writeln!(
            f,
            "Base model:           RMSE {:.2}, MAPE {:.2}%, direction {:.1}%",
            self.base_metrics.rmse, self.base_metrics.mape, self.base_metrics.directional_accuracy
        )?;
        write!(
            f,
            "Processing:           {} ({}/{} samples, {}x)",
            if self.running { "Active" } else { "Paused" },
            self.index,
            self.total,
            self.speed
        )
    }
}
