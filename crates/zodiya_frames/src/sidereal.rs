//! Apparent sidereal time: GMST corrected by the equation of the equinoxes.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 12.

use zodiya_time::{gmst_rad, sidereal_angle_to_seconds};

use crate::nutation::nutation;
use crate::obliquity::mean_obliquity_rad;
use crate::spherical::normalize_rad;

/// Equation of the equinoxes, Δψ·cos ε, in radians.
///
/// ε is the true obliquity (mean + Δε).
pub fn equation_of_equinoxes_rad(jd: f64) -> f64 {
    let n = nutation(jd);
    n.delta_psi_rad * (mean_obliquity_rad(jd) + n.delta_epsilon_rad).cos()
}

/// Greenwich Apparent Sidereal Time at a Julian Date, radians in [0, 2π).
pub fn apparent_sidereal_time_rad(jd: f64) -> f64 {
    normalize_rad(gmst_rad(jd) + equation_of_equinoxes_rad(jd))
}

/// Greenwich Apparent Sidereal Time as sidereal seconds of day in [0, 86400).
pub fn apparent_sidereal_time_seconds(jd: f64) -> f64 {
    sidereal_angle_to_seconds(apparent_sidereal_time_rad(jd))
}
