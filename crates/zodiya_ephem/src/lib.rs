//! Geocentric ecliptic positions of the Sun and the Moon.
//!
//! Both series are analytic and referred to the equinox of date. The Sun
//! carries the aberration + nutation correction (apparent longitude); the
//! Moon is the mean-equinox longitude of Meeus chapter 47.

pub mod lunar;
pub mod solar;

pub use lunar::LunarPosition;
