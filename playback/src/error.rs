use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlaybackError {
    #[error("speed must be between 0.5 and 5.0 in steps of 0.5, got {0}")]
    InvalidSpeed(f64),
}
