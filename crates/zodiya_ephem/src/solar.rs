//! Low-precision solar coordinates.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25
//! (eqs. 25.2-25.4 and the apparent-longitude correction). Accuracy is
//! about 0.01°, enough to place the Sun in a sign except within a few
//! minutes of an ingress.

use std::f64::consts::TAU;

/// Geometric mean longitude L₀ in degrees (not reduced).
pub fn mean_longitude_deg(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Mean anomaly M of the Sun in degrees (not reduced).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Equation of the centre C in degrees.
fn equation_of_centre_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// True geometric longitude ☉ = L₀ + C, radians in [0, 2π).
pub fn true_longitude_rad(t: f64) -> f64 {
    reduce((mean_longitude_deg(t) + equation_of_centre_deg(t)).to_radians())
}

/// Apparent longitude λ = ☉ − 0.00569° − 0.00478° sin Ω, radians in [0, 2π).
///
/// Ω = 125.04° − 1934.136° T is the longitude of the Moon's node used by
/// the combined aberration/nutation correction.
pub fn apparent_longitude_rad(t: f64) -> f64 {
    let omega = (125.04 - 1934.136 * t).to_radians();
    let deg = mean_longitude_deg(t) + equation_of_centre_deg(t) - 0.005_69 - 0.004_78 * omega.sin();
    reduce(deg.rem_euclid(360.0).to_radians())
}

fn reduce(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}
