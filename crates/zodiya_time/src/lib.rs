//! Time-scale helpers for natal position computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Julian centuries since J2000.0, the time argument of every series
//! - `UtcInstant`, the civil date-time accepted by the natal calculator
//! - Greenwich Mean Sidereal Time and Local Sidereal Time

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::UtcInstant;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month,
    is_leap_year, jd_to_calendar, julian_centuries,
};
pub use sidereal::{gmst_rad, local_sidereal_time_rad, sidereal_angle_to_seconds};
