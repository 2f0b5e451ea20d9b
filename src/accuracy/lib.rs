pub mod benchmarks;
pub mod metrics;
pub mod report;

pub use benchmarks::{hybrid_benchmark, BenchmarkRow, BENCHMARKS};
pub use metrics::{compare, compute_metrics, compute_metrics_for, AccuracyMetrics, ModelComparison, PredictionKind};
pub use report::{render_benchmark_table, write_json_report};
