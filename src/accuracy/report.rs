use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::path::Path;

use crate::{AccuracyMetrics, BENCHMARKS};

const LIVE_ROW: &str = "Live (refined)";

/// Render the benchmark table as fixed-width text.
///
/// When `live` is given it is appended as a final row so the simulated run
/// can be read against the published numbers.
pub fn render_benchmark_table(live: Option<&AccuracyMetrics>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<16} {:>8} {:>8} {:>8}", "Model", "RMSE", "MAPE %", "Dir %");
    let _ = writeln!(out, "{}", "-".repeat(43));
    for row in &BENCHMARKS {
        let _ = writeln!(
            out,
            "{:<16} {:>8.2} {:>8.2} {:>8.1}",
            row.name, row.rmse, row.mape, row.directional_accuracy
        );
    }
    if let Some(m) = live {
        let _ = writeln!(out, "{}", "-".repeat(43));
        let _ = writeln!(
            out,
            "{:<16} {:>8.2} {:>8.2} {:>8.1}",
            LIVE_ROW, m.rmse, m.mape, m.directional_accuracy
        );
    }

    out
}

/// Write `value` as pretty JSON, creating parent directories as needed.
pub fn write_json_report<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    tracing::info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
