use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use hybrid_predictor::PipelineParams;
use serde::Deserialize;

use crate::controller::{validate_speed, DEFAULT_START_INDEX};
use crate::Visibility;

/// Longest simulation the CLI accepts
pub const MAX_DAYS: usize = 100_000;

/// Configuration for a playback run
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "playback")]
#[command(about = "Replay a simulated hybrid transformer + RL predictor and report its accuracy")]
#[serde(default)]
pub struct Config {
    /// Number of trading days to simulate
    #[arg(long, default_value_t = 200)]
    pub days: usize,

    /// Starting price of the random walk
    #[arg(long, default_value_t = 150.0)]
    pub base_price: f64,

    /// Seed for a reproducible run (omit for a fresh random run)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of days visible before playback starts (clamped to --days)
    #[arg(long, default_value_t = DEFAULT_START_INDEX)]
    pub start_index: usize,

    /// Playback speed multiplier (0.5 to 5.0, steps of 0.5)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Stop after this many ticks instead of playing to the end
    #[arg(long)]
    pub ticks: Option<usize>,

    /// Sleep between ticks like the live dashboard does
    #[arg(long)]
    pub realtime: bool,

    /// Leave base predictions out of the chart rows
    #[arg(long)]
    pub hide_predictions: bool,

    /// Leave refined predictions out of the chart rows
    #[arg(long)]
    pub hide_refined: bool,

    /// Write the final snapshot as JSON to this path
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// TOML file whose values replace the command line
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: 200,
            base_price: 150.0,
            seed: None,
            start_index: DEFAULT_START_INDEX,
            speed: 1.0,
            ticks: None,
            realtime: false,
            hide_predictions: false,
            hide_refined: false,
            json_out: None,
            config: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            anyhow::bail!("days must be greater than 0");
        }

        if self.days > MAX_DAYS {
            anyhow::bail!("days must not exceed {}, got {}", MAX_DAYS, self.days);
        }

        if !(self.base_price.is_finite() && self.base_price > 0.0) {
            anyhow::bail!("base_price must be positive, got {}", self.base_price);
        }

        validate_speed(self.speed)?;

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = toml::from_str(&content)?;
        config.config = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Command line, or the TOML file it points at
    pub fn resolve(self) -> Result<Self> {
        let mut config = match &self.config {
            Some(path) => Self::from_file(path)?,
            None => self,
        };
        config.start_index = config.start_index.min(config.days);
        Ok(config)
    }

    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams::new(self.days, self.base_price)
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            show_predictions: !self.hide_predictions,
            show_refined: !self.hide_refined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_cli() {
        let parsed = Config::parse_from(["playback"]);
        let default = Config::default();
        assert_eq!(parsed.days, default.days);
        assert_eq!(parsed.base_price, default.base_price);
        assert_eq!(parsed.start_index, default.start_index);
        assert_eq!(parsed.speed, default.speed);
        assert_eq!(parsed.log_level, default.log_level);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.speed = 1.3;
        assert!(config.validate().is_err());
        config.speed = 2.5;

        config.days = 0;
        assert!(config.validate().is_err());
        config.days = MAX_DAYS + 1;
        assert!(config.validate().is_err());
        config.days = 50;

        // start index past the series is clamped, not rejected
        assert!(config.validate().is_ok());

        config.base_price = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_flags() {
        let config = Config::parse_from([
            "playback",
            "--days",
            "30",
            "--seed",
            "7",
            "--start-index",
            "10",
            "--speed",
            "2.5",
            "--hide-refined",
        ]);
        assert_eq!(config.days, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.speed, 2.5);
        assert!(config.visibility().show_predictions);
        assert!(!config.visibility().show_refined);
        assert_eq!(config.pipeline_params().generator.days, 30);
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "days = 60").unwrap();
        writeln!(file, "seed = 11").unwrap();
        writeln!(file, "speed = 0.5").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.days, 60);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.speed, 0.5);
        assert_eq!(config.base_price, 150.0);
        assert_eq!(config.start_index, DEFAULT_START_INDEX);
        assert_eq!(config.config.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_resolve_prefers_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "days = 42").unwrap();
        writeln!(file, "start_index = 5").unwrap();

        let cli = Config::parse_from([
            "playback".to_string(),
            "--days".to_string(),
            "9".to_string(),
            "--config".to_string(),
            file.path().display().to_string(),
        ]);
        let resolved = cli.resolve().unwrap();
        assert_eq!(resolved.days, 42);
        assert_eq!(resolved.start_index, 5);
    }

    #[test]
    fn test_short_run_clamps_start_index() {
        let config = Config::parse_from(["playback", "--days", "50"]).resolve().unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_index, 50);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "days = \"many\"").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }
}
