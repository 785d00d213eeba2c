//! Error types for natal position calculation.

use thiserror::Error;
use zodiya_time::TimeError;

/// Errors from the natal calculator.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NatalError {
    /// Latitude or longitude is non-finite or outside its range.
    #[error("invalid coordinates: {field} = {value}")]
    InvalidCoordinates { field: &'static str, value: f64 },
    /// The birth instant is not a valid calendar date-time.
    #[error(transparent)]
    InvalidInstant(#[from] TimeError),
    /// No rising ecliptic point exists for this observer.
    #[error("ascendant undefined at latitude {latitude_deg}°")]
    AscendantUndefined { latitude_deg: f64 },
    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
