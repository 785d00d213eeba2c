//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! The apparent sidereal time (GMST corrected by the equation of the
//! equinoxes) needs the nutation series and lives in
//! `zodiya_frames::sidereal`.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 12.4
//! (IAU 1982 expression, valid for any instant of the day).

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, SECONDS_PER_DAY, julian_centuries};

/// Greenwich Mean Sidereal Time at a given Julian Date.
///
/// θ₀ = 280.46061837° + 360.98564736629° × (JD − 2451545.0)
///      + 0.000387933° × T² − T³ / 38710000
///
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;

    let deg = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t2
        - t3 / 38_710_000.0;

    // Reduce in degrees first: the linear term reaches ~10⁶ degrees per
    // decade and would lose precision if converted before reduction.
    deg.rem_euclid(360.0).to_radians().rem_euclid(TAU)
}

/// Local Sidereal Time from a Greenwich sidereal angle and observer east longitude.
///
/// LST = GST + longitude_east_rad.
/// Returns radians in [0, 2π).
pub fn local_sidereal_time_rad(gst_rad: f64, longitude_east_rad: f64) -> f64 {
    (gst_rad + longitude_east_rad).rem_euclid(TAU)
}

/// Express a sidereal angle (radians) as sidereal seconds of day in [0, 86400).
pub fn sidereal_angle_to_seconds(angle_rad: f64) -> f64 {
    let s = angle_rad.rem_euclid(TAU) / TAU * SECONDS_PER_DAY;
    if s >= SECONDS_PER_DAY { 0.0 } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT → 13h10m46.3668s = 197.693195°
        let gmst = gmst_rad(2_446_895.5);
        let deg = gmst.to_degrees();
        assert!((deg - 197.693_195).abs() < 1e-5, "GMST = {deg}°");
    }

    #[test]
    fn gmst_meeus_example_12b() {
        // 1987 April 10, 19h21m00s UT → 8h34m57.0896s = 128.737873°
        let gmst = gmst_rad(2_446_896.306_25);
        let deg = gmst.to_degrees();
        assert!((deg - 128.737_873).abs() < 1e-5, "GMST = {deg}°");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn gmst_advances_about_a_degree_per_day() {
        let g1 = gmst_rad(2_451_545.0).to_degrees();
        let g2 = gmst_rad(2_451_546.0).to_degrees();
        let diff = (g2 - g1).rem_euclid(360.0);
        assert!((diff - 0.9856).abs() < 1e-3, "diff = {diff}°");
    }

    #[test]
    fn lst_east_offset() {
        let gst = 1.0;
        let lst = local_sidereal_time_rad(gst, PI / 2.0);
        let expected = (gst + PI / 2.0).rem_euclid(TAU);
        assert!((lst - expected).abs() < 1e-15);
    }

    #[test]
    fn lst_west_wraps() {
        let lst = local_sidereal_time_rad(0.1, -0.2);
        assert!((lst - (TAU - 0.1)).abs() < 1e-12);
    }

    #[test]
    fn seconds_of_day() {
        assert!((sidereal_angle_to_seconds(PI) - 43_200.0).abs() < 1e-9);
        assert_eq!(sidereal_angle_to_seconds(0.0), 0.0);
        let s = sidereal_angle_to_seconds(-1e-18);
        assert!((0.0..SECONDS_PER_DAY).contains(&s));
    }
}
