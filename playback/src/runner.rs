use anyhow::Result;
use hybrid_predictor::run_pipeline;
use sampling::{Mwc256, RandSource, UniformSource};

use crate::{snapshot, Config, DashboardSnapshot, PlaybackController};

/// Ticks between progress lines at info level
const PROGRESS_EVERY: usize = 25;

fn make_rng(seed: Option<u32>) -> Box<dyn UniformSource> {
    match seed {
        Some(seed) => Box::new(Mwc256::with_seed(seed)),
        None => Box::new(RandSource::from_entropy()),
    }
}

/// Build the series, play it back and return the final dashboard state.
pub fn run(config: &Config) -> Result<DashboardSnapshot> {
    config.validate()?;

    let mut rng = make_rng(config.seed);
    let series = run_pipeline(&config.pipeline_params(), rng.as_mut());
    tracing::info!(
        days = series.len(),
        base_price = config.base_price,
        seed = ?config.seed,
        "generated simulated series"
    );

    let mut controller = PlaybackController::new(series, config.start_index).with_speed(config.speed)?;
    let visibility = config.visibility();

    controller.play();
    let mut ticks = 0usize;
    while config.ticks.map_or(true, |cap| ticks < cap) && controller.tick() {
        ticks += 1;
        let metrics = controller.metrics();
        tracing::debug!(
            index = controller.index(),
            rmse = metrics.rmse,
            mape = metrics.mape,
            directional_accuracy = metrics.directional_accuracy,
            "tick"
        );
        if ticks % PROGRESS_EVERY == 0 {
            tracing::info!(index = controller.index(), total = controller.len(), "playback progress");
        }
        if config.realtime {
            std::thread::sleep(controller.tick_interval());
        }
    }
    if config.ticks.is_some() {
        controller.pause();
    }
    tracing::info!(ticks, index = controller.index(), "playback stopped");

    let snap = snapshot(&controller, &visibility);
    if let Some(path) = &config.json_out {
        accuracy::write_json_report(path, &snap)?;
    }
    Ok(snap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn seeded(seed: u32) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn test_plays_to_the_end() {
        let snap = run(&seeded(1)).unwrap();
        assert_eq!(snap.total, 200);
        assert_eq!(snap.index, 199);
        assert!(!snap.running);
        assert!(!snap.metrics.is_zero());
    }

    #[test]
    fn test_tick_cap() {
        let config = Config {
            ticks: Some(5),
            ..seeded(2)
        };
        let snap = run(&config).unwrap();
        assert_eq!(snap.index, 105);
        assert!(!snap.running);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = run(&seeded(3)).unwrap();
        let b = run(&seeded(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_start_past_short_series_is_clamped() {
        let config = Config {
            days: 50,
            ..seeded(6)
        };
        let snap = run(&config).unwrap();
        assert_eq!(snap.total, 50);
        assert_eq!(snap.index, 50);
        assert!(!snap.running);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            speed: 9.0,
            ..seeded(4)
        };
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_json_snapshot_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/snapshot.json");
        let config = Config {
            days: 30,
            start_index: 10,
            json_out: Some(path.clone()),
            hide_predictions: true,
            ..seeded(5)
        };
        let snap = run(&config).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["index"], snap.index);
        assert_eq!(value["chart"].as_array().unwrap().len(), snap.index);
        assert!(value["chart"][0].get("predicted").is_none());
        assert!(value["chart"][0].get("refined").is_some());
        assert!(value["metrics"]["rmse"].is_number());
    }
}
