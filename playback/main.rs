use anyhow::Result;
use clap::Parser;
use playback::logging::{init_logging, LoggingConfig};
use playback::Config;

fn main() -> Result<()> {
    let config = Config::parse().resolve()?;
    config.validate()?;

    init_logging(&LoggingConfig::new(&config.log_level))?;

    let snap = playback::run(&config)?;

    println!("\n{}", "=".repeat(60));
    println!("Hybrid Transformer + RL Predictor (simulated)");
    println!("{}", "=".repeat(60));
    println!("{snap}");
    println!();
    println!("{}", accuracy::render_benchmark_table(Some(&snap.metrics)));

    Ok(())
}
