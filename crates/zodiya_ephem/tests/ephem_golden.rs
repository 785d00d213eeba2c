//! Golden values for the analytic Sun and Moon.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.): Example 25.a (Sun,
//! 1992 October 13 0h TD) and Example 47.a (Moon, 1992 April 12 0h TD).

use approx::assert_abs_diff_eq;
use zodiya_ephem::{lunar, solar};
use zodiya_time::{J2000_JD, julian_centuries};

#[test]
fn sun_example_25a() {
    let t = julian_centuries(2_448_908.5);
    let lon = solar::apparent_longitude_rad(t).to_degrees();
    assert_abs_diff_eq!(lon, 199.908_95, epsilon = 1e-4);
}

#[test]
fn moon_example_47a() {
    let p = lunar::position(2_448_724.5);
    // λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km
    assert_abs_diff_eq!(p.longitude_rad.to_degrees(), 133.162_655, epsilon = 1e-4);
    // Truncated latitude and distance series.
    assert_abs_diff_eq!(p.latitude_rad.to_degrees(), -3.229_126, epsilon = 2e-3);
    assert_abs_diff_eq!(p.distance_km, 368_409.7, epsilon = 30.0);
}

#[test]
fn j2000_reference_positions() {
    let sun = solar::apparent_longitude_rad(julian_centuries(J2000_JD)).to_degrees();
    assert_abs_diff_eq!(sun, 280.3726, epsilon = 1e-3);

    let moon = lunar::longitude_rad(J2000_JD).to_degrees();
    assert_abs_diff_eq!(moon, 223.319, epsilon = 1e-3);
}

#[test]
fn berlin_fixture_positions() {
    // 2024-01-01T15:30:00Z
    let jd = 2_460_311.145_833_333_5;
    let sun = solar::apparent_longitude_rad(julian_centuries(jd)).to_degrees();
    assert_abs_diff_eq!(sun, 280.700_47, epsilon = 1e-4);
    let moon = lunar::longitude_rad(jd).to_degrees();
    assert_abs_diff_eq!(moon, 163.621_63, epsilon = 1e-4);
}
