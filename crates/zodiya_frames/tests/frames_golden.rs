//! Golden values for obliquity, nutation and the horizon chain.
//!
//! Reference: Meeus, *Astronomical Algorithms* (2nd ed.), Example 22.a
//! (1987 April 10, 0h TD).

use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_2;
use zodiya_frames::{
    apparent_sidereal_time_rad, ecliptic_to_equatorial, horizontal_altitude, hour_angle_rad,
    mean_obliquity_rad, nutation, true_obliquity_rad,
};

const JD_22A: f64 = 2_446_895.5;

fn arcsec(rad: f64) -> f64 {
    rad.to_degrees() * 3600.0
}

#[test]
fn example_22a_full_chain() {
    let n = nutation(JD_22A);
    assert_abs_diff_eq!(arcsec(n.delta_psi_rad), -3.788, epsilon = 0.01);
    assert_abs_diff_eq!(arcsec(n.delta_epsilon_rad), 9.443, epsilon = 0.01);

    let eps0 = mean_obliquity_rad(JD_22A).to_degrees();
    assert_abs_diff_eq!(eps0, 23.440_946, epsilon = 1e-6);

    // ε = 23°26′36.850″
    let eps = true_obliquity_rad(JD_22A).to_degrees();
    assert_abs_diff_eq!(eps, 23.0 + 26.0 / 60.0 + 36.850 / 3600.0, epsilon = 1e-5);
}

#[test]
fn equatorial_point_of_ecliptic_has_matching_declination() {
    // sin δ = sin ε sin λ for β = 0.
    let eps = mean_obliquity_rad(JD_22A);
    for k in 0..24 {
        let lon = f64::from(k) * 15.0_f64.to_radians();
        let eq = ecliptic_to_equatorial(lon, eps);
        assert_abs_diff_eq!(eq.dec_rad.sin(), eps.sin() * lon.sin(), epsilon = 1e-12);
    }
}

#[test]
fn point_under_local_meridian_culminates() {
    // A point whose RA equals the sidereal time has H = 0 and altitude
    // 90° − |φ − δ|.
    let jd = JD_22A;
    let lst = apparent_sidereal_time_rad(jd);
    let lat = 38.92_f64.to_radians();
    let dec = 0.2;
    let h = hour_angle_rad(lst, lst);
    assert_abs_diff_eq!(h, 0.0, epsilon = 1e-15);
    let hp = horizontal_altitude(lat, dec, h);
    assert_abs_diff_eq!(hp.altitude_rad, FRAC_PI_2 - (lat - dec).abs(), epsilon = 1e-12);
}
