//! IAU 1980 nutation in longitude (Δψ) and obliquity (Δε).
//!
//! The series is truncated to the 33 terms of Table 22.A with an amplitude
//! of at least 0.0012″; the omitted terms sum to well under 0.1″, which
//! moves the apparent sidereal time by a few milliseconds.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 22,
//! Table 22.A (IAU 1980 theory of nutation).

use zodiya_time::julian_centuries;

/// Nutation angles at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude, radians.
    pub delta_psi_rad: f64,
    /// Nutation in obliquity, radians.
    pub delta_epsilon_rad: f64,
}

/// Compute the five fundamental arguments in radians.
///
/// `t` = Julian centuries since J2000.0.
///
/// Returns `[D, M, M′, F, Ω]` where:
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the ascending node of the Moon's mean orbit
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    [d, m, mp, f, om].map(|deg: f64| deg.rem_euclid(360.0).to_radians())
}

/// Table 22.A rows.
///
/// Each row: `[D, M, M′, F, Ω, ψ₀, ψ₁, ε₀, ε₁]`; Δψ term = (ψ₀ + ψ₁·T)·sin(arg),
/// Δε term = (ε₀ + ε₁·T)·cos(arg), amplitudes in units of 0.0001″.
#[rustfmt::skip]
static NUTATION_TERMS: [[f64; 9]; 33] = [
    //  D     M     M′    F     Ω        ψ₀       ψ₁       ε₀     ε₁
    [ 0.0,  0.0,  0.0,  0.0,  1.0, -171996.0, -174.2, 92025.0,  8.9],
    [-2.0,  0.0,  0.0,  2.0,  2.0,  -13187.0,   -1.6,  5736.0, -3.1],
    [ 0.0,  0.0,  0.0,  2.0,  2.0,   -2274.0,   -0.2,   977.0, -0.5],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,    2062.0,    0.2,  -895.0,  0.5],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,    1426.0,   -3.4,    54.0, -0.1],
    [ 0.0,  0.0,  1.0,  0.0,  0.0,     712.0,    0.1,    -7.0,  0.0],
    [-2.0,  1.0,  0.0,  2.0,  2.0,    -517.0,    1.2,   224.0, -0.6],
    [ 0.0,  0.0,  0.0,  2.0,  1.0,    -386.0,   -0.4,   200.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  2.0,    -301.0,    0.0,   129.0, -0.1],
    [-2.0, -1.0,  0.0,  2.0,  2.0,     217.0,   -0.5,   -95.0,  0.3],
    [-2.0,  0.0,  1.0,  0.0,  0.0,    -158.0,    0.0,     0.0,  0.0],
    [-2.0,  0.0,  0.0,  2.0,  1.0,     129.0,    0.1,   -70.0,  0.0],
    [ 0.0,  0.0, -1.0,  2.0,  2.0,     123.0,    0.0,   -53.0,  0.0],
    [ 2.0,  0.0,  0.0,  0.0,  0.0,      63.0,    0.0,     0.0,  0.0],
    [ 0.0,  0.0,  1.0,  0.0,  1.0,      63.0,    0.1,   -33.0,  0.0],
    [ 2.0,  0.0, -1.0,  2.0,  2.0,     -59.0,    0.0,    26.0,  0.0],
    [ 0.0,  0.0, -1.0,  0.0,  1.0,     -58.0,   -0.1,    32.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  1.0,     -51.0,    0.0,    27.0,  0.0],
    [-2.0,  0.0,  2.0,  0.0,  0.0,      48.0,    0.0,     0.0,  0.0],
    [ 0.0,  0.0, -2.0,  2.0,  1.0,      46.0,    0.0,   -24.0,  0.0],
    [ 2.0,  0.0,  0.0,  2.0,  2.0,     -38.0,    0.0,    16.0,  0.0],
    [ 0.0,  0.0,  2.0,  2.0,  2.0,     -31.0,    0.0,    13.0,  0.0],
    [ 0.0,  0.0,  2.0,  0.0,  0.0,      29.0,    0.0,     0.0,  0.0],
    [-2.0,  0.0,  1.0,  2.0,  2.0,      29.0,    0.0,   -12.0,  0.0],
    [ 0.0,  0.0,  0.0,  2.0,  0.0,      26.0,    0.0,     0.0,  0.0],
    [-2.0,  0.0,  0.0,  2.0,  0.0,     -22.0,    0.0,     0.0,  0.0],
    [ 0.0,  0.0, -1.0,  2.0,  1.0,      21.0,    0.0,   -10.0,  0.0],
    [ 0.0,  2.0,  0.0,  0.0,  0.0,      17.0,   -0.1,     0.0,  0.0],
    [ 2.0,  0.0, -1.0,  0.0,  1.0,      16.0,    0.0,    -8.0,  0.0],
    [-2.0,  2.0,  0.0,  2.0,  2.0,     -16.0,    0.1,     7.0,  0.0],
    [ 0.0,  1.0,  0.0,  0.0,  1.0,     -15.0,    0.0,     9.0,  0.0],
    [-2.0,  0.0,  1.0,  0.0,  1.0,     -13.0,    0.0,     7.0,  0.0],
    [ 0.0, -1.0,  0.0,  0.0,  1.0,     -12.0,    0.0,     6.0,  0.0],
];

/// 0.0001″ → radians.
const UNIT_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0 * 10_000.0);

/// Nutation in longitude and obliquity at a Julian Date.
///
/// Accuracy: ~0.01″ against the full IAU 1980 series.
pub fn nutation(jd: f64) -> Nutation {
    let t = julian_centuries(jd);
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;

    for row in &NUTATION_TERMS {
        let arg = row[0] * args[0]
            + row[1] * args[1]
            + row[2] * args[2]
            + row[3] * args[3]
            + row[4] * args[4];

        dpsi += (row[5] + row[6] * t) * arg.sin();
        deps += (row[7] + row[8] * t) * arg.cos();
    }

    Nutation {
        delta_psi_rad: dpsi * UNIT_TO_RAD,
        delta_epsilon_rad: deps * UNIT_TO_RAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arcsec(rad: f64) -> f64 {
        rad.to_degrees() * 3600.0
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = −3.788″, Δε = +9.443″
        let n = nutation(2_446_895.5);
        assert!((arcsec(n.delta_psi_rad) + 3.788).abs() < 0.01, "Δψ = {}″", arcsec(n.delta_psi_rad));
        assert!((arcsec(n.delta_epsilon_rad) - 9.443).abs() < 0.01, "Δε = {}″", arcsec(n.delta_epsilon_rad));
    }

    #[test]
    fn fundamental_arguments_meeus_22a() {
        // T = −0.127296372348: D = 136.9623°, M = 94.9792°, M′ = 229.2784°,
        // F = 143.4079°, Ω = 11.2531°
        let t = -0.127_296_372_348;
        let expected = [136.9623, 94.9792, 229.2784, 143.4079, 11.2531];
        for (got, want) in fundamental_arguments(t).iter().zip(expected) {
            assert!((got.to_degrees() - want).abs() < 1e-3, "{} vs {want}", got.to_degrees());
        }
    }

    #[test]
    fn amplitude_bounds() {
        for &jd in &[2_451_545.0, 2_455_000.5, 2_460_310.5, 2_470_000.5] {
            let n = nutation(jd);
            assert!(arcsec(n.delta_psi_rad).abs() < 19.0);
            assert!(arcsec(n.delta_epsilon_rad).abs() < 10.5);
        }
    }

    #[test]
    fn node_period_dominates() {
        // Ω has an 18.6-year period: Δψ repeats to within a few arcseconds.
        let jd = 2_451_545.0;
        let a = arcsec(nutation(jd).delta_psi_rad);
        let b = arcsec(nutation(jd + 6798.38).delta_psi_rad);
        assert!((a - b).abs() < 3.0, "Δψ {a}″ vs {b}″");
    }
}
