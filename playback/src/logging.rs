use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    pub log_level: String,
    pub with_target: bool,
}

impl LoggingConfig {
    pub fn new(log_level: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
            with_target: false,
        }
    }

    /// RUST_LOG wins over the configured level
    pub fn filter(&self) -> anyhow::Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.log_level)?),
        }
    }
}

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(config.filter()?)
        .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
        .try_init()?;

    tracing::debug!(level = %config.log_level, "logging initialised");
    Ok(())
}
