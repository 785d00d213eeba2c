//! Mean and true obliquity of the ecliptic.
//!
//! Mean obliquity: Laskar's polynomial in U = T/100, valid to 0.01″ over
//! 1000 years around J2000 and to a few arcseconds over 10000 years.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 22.3.

use zodiya_time::julian_centuries;

use crate::nutation::nutation;

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_111_11;

/// Laskar coefficients in arcseconds, ascending powers of U.
const LASKAR_ARCSEC: [f64; 11] = [
    84_381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Mean obliquity of the ecliptic at a Julian Date, in radians.
pub fn mean_obliquity_rad(jd: f64) -> f64 {
    let u = julian_centuries(jd) / 100.0;
    let arcsec = LASKAR_ARCSEC.iter().rev().fold(0.0, |acc, &c| acc * u + c);
    (arcsec / 3600.0).to_radians()
}

/// True obliquity: mean obliquity plus nutation in obliquity (Δε), in radians.
pub fn true_obliquity_rad(jd: f64) -> f64 {
    mean_obliquity_rad(jd) + nutation(jd).delta_epsilon_rad
}
