pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod runner;
pub mod snapshot;

pub use config::Config;
pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use runner::run;
pub use snapshot::{snapshot, DashboardSnapshot, Visibility};
