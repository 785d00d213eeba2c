//! Geocentric position of the Moon.
//!
//! Periodic terms of the ELP-2000/82 theory as abridged by Meeus:
//! the 59 largest longitude terms of Table 47.A, the 30 largest latitude
//! terms of Table 47.B, and the Σr column of the first 30 rows of
//! Table 47.A that carry one, in table order. Longitude is good to about
//! 10″, latitude to a few arcseconds, distance to ~20 km.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47.

use std::f64::consts::TAU;

use zodiya_time::julian_centuries;

/// Geocentric ecliptic coordinates of the Moon, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Ecliptic longitude in [0, 2π).
    pub longitude_rad: f64,
    /// Ecliptic latitude.
    pub latitude_rad: f64,
    /// Earth-Moon centre distance in kilometres.
    pub distance_km: f64,
}

/// Mean longitude L′ in degrees, referred to the mean equinox of date (eq. 47.1).
pub fn mean_longitude_deg(t: f64) -> f64 {
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0
}

/// Mean elongation D in degrees (eq. 47.2).
pub fn mean_elongation_deg(t: f64) -> f64 {
    297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t + t * t * t / 545_868.0
        - t * t * t * t / 113_065_000.0
}

/// Sun's mean anomaly M in degrees (eq. 47.3).
pub fn solar_mean_anomaly_deg(t: f64) -> f64 {
    357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t + t * t * t / 24_490_000.0
}

/// Moon's mean anomaly M′ in degrees (eq. 47.4).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t + t * t * t / 69_699.0
        - t * t * t * t / 14_712_000.0
}

/// Moon's argument of latitude F in degrees (eq. 47.5).
pub fn argument_of_latitude_deg(t: f64) -> f64 {
    93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t - t * t * t / 3_526_000.0
        + t * t * t * t / 863_310_000.0
}

/// Longitude and distance terms: `[D, M, M′, F, Σl coefficient]`, units 10⁻⁶ degree.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 59] = [
    //  D      M      M′     F          Σl
    [  0.0,   0.0,   1.0,   0.0,    6288774.0],
    [  2.0,   0.0,  -1.0,   0.0,    1274027.0],
    [  2.0,   0.0,   0.0,   0.0,     658314.0],
    [  0.0,   0.0,   2.0,   0.0,     213618.0],
    [  0.0,   1.0,   0.0,   0.0,    -185116.0],
    [  0.0,   0.0,   0.0,   2.0,    -114332.0],
    [  2.0,   0.0,  -2.0,   0.0,      58793.0],
    [  2.0,  -1.0,  -1.0,   0.0,      57066.0],
    [  2.0,   0.0,   1.0,   0.0,      53322.0],
    [  2.0,  -1.0,   0.0,   0.0,      45758.0],
    [  0.0,   1.0,  -1.0,   0.0,     -40923.0],
    [  1.0,   0.0,   0.0,   0.0,     -34720.0],
    [  0.0,   1.0,   1.0,   0.0,     -30383.0],
    [  2.0,   0.0,   0.0,  -2.0,      15327.0],
    [  0.0,   0.0,   1.0,   2.0,     -12528.0],
    [  0.0,   0.0,   1.0,  -2.0,      10980.0],
    [  4.0,   0.0,  -1.0,   0.0,      10675.0],
    [  0.0,   0.0,   3.0,   0.0,      10034.0],
    [  4.0,   0.0,  -2.0,   0.0,       8548.0],
    [  2.0,   1.0,  -1.0,   0.0,      -7888.0],
    [  2.0,   1.0,   0.0,   0.0,      -6766.0],
    [  1.0,   0.0,  -1.0,   0.0,      -5163.0],
    [  1.0,   1.0,   0.0,   0.0,       4987.0],
    [  2.0,  -1.0,   1.0,   0.0,       4036.0],
    [  2.0,   0.0,   2.0,   0.0,       3994.0],
    [  4.0,   0.0,   0.0,   0.0,       3861.0],
    [  2.0,   0.0,  -3.0,   0.0,       3665.0],
    [  0.0,   1.0,  -2.0,   0.0,      -2689.0],
    [  2.0,   0.0,  -1.0,   2.0,      -2602.0],
    [  2.0,  -1.0,  -2.0,   0.0,       2390.0],
    [  1.0,   0.0,   1.0,   0.0,      -2348.0],
    [  2.0,  -2.0,   0.0,   0.0,       2236.0],
    [  0.0,   1.0,   2.0,   0.0,      -2120.0],
    [  0.0,   2.0,   0.0,   0.0,      -2069.0],
    [  2.0,  -2.0,  -1.0,   0.0,       2048.0],
    [  2.0,   0.0,   1.0,  -2.0,      -1773.0],
    [  2.0,   0.0,   0.0,   2.0,      -1595.0],
    [  4.0,  -1.0,  -1.0,   0.0,       1215.0],
    [  0.0,   0.0,   2.0,   2.0,      -1110.0],
    [  3.0,   0.0,  -1.0,   0.0,       -892.0],
    [  2.0,   1.0,   1.0,   0.0,       -810.0],
    [  4.0,  -1.0,  -2.0,   0.0,        759.0],
    [  0.0,   2.0,  -1.0,   0.0,       -713.0],
    [  2.0,   2.0,  -1.0,   0.0,       -700.0],
    [  2.0,   1.0,  -2.0,   0.0,        691.0],
    [  2.0,  -1.0,   0.0,  -2.0,        596.0],
    [  4.0,   0.0,   1.0,   0.0,        549.0],
    [  0.0,   0.0,   4.0,   0.0,        537.0],
    [  4.0,  -1.0,   0.0,   0.0,        520.0],
    [  1.0,   0.0,  -2.0,   0.0,       -487.0],
    [  2.0,   1.0,   0.0,  -2.0,       -399.0],
    [  0.0,   0.0,   2.0,  -2.0,       -381.0],
    [  1.0,   1.0,   1.0,   0.0,        351.0],
    [  3.0,   0.0,  -2.0,   0.0,       -340.0],
    [  4.0,   0.0,  -3.0,   0.0,        330.0],
    [  2.0,  -1.0,   2.0,   0.0,        327.0],
    [  0.0,   2.0,   1.0,   0.0,       -323.0],
    [  1.0,   1.0,  -1.0,   0.0,        299.0],
    [  2.0,   0.0,   3.0,   0.0,        294.0],
];

/// Distance terms: `[D, M, M′, F, Σr coefficient]`, units 10⁻³ km.
///
/// Rows follow Table 47.A order (sorted by longitude amplitude), so a few
/// larger Σr terms further down the table are left out.
#[rustfmt::skip]
static DISTANCE_TERMS: [[f64; 5]; 30] = [
    [  0.0,   0.0,   1.0,   0.0,  -20905355.0],
    [  2.0,   0.0,  -1.0,   0.0,   -3699111.0],
    [  2.0,   0.0,   0.0,   0.0,   -2955968.0],
    [  0.0,   0.0,   2.0,   0.0,    -569925.0],
    [  0.0,   1.0,   0.0,   0.0,      48888.0],
    [  0.0,   0.0,   0.0,   2.0,      -3149.0],
    [  2.0,   0.0,  -2.0,   0.0,     246158.0],
    [  2.0,  -1.0,  -1.0,   0.0,    -152138.0],
    [  2.0,   0.0,   1.0,   0.0,    -170733.0],
    [  2.0,  -1.0,   0.0,   0.0,    -204586.0],
    [  0.0,   1.0,  -1.0,   0.0,    -129620.0],
    [  1.0,   0.0,   0.0,   0.0,     108743.0],
    [  0.0,   1.0,   1.0,   0.0,     104755.0],
    [  2.0,   0.0,   0.0,  -2.0,      10321.0],
    [  0.0,   0.0,   1.0,  -2.0,      79661.0],
    [  4.0,   0.0,  -1.0,   0.0,     -34782.0],
    [  0.0,   0.0,   3.0,   0.0,     -23210.0],
    [  4.0,   0.0,  -2.0,   0.0,     -21636.0],
    [  2.0,   1.0,  -1.0,   0.0,      24208.0],
    [  2.0,   1.0,   0.0,   0.0,      30824.0],
    [  1.0,   0.0,  -1.0,   0.0,      -8379.0],
    [  1.0,   1.0,   0.0,   0.0,     -16675.0],
    [  2.0,  -1.0,   1.0,   0.0,     -12831.0],
    [  2.0,   0.0,   2.0,   0.0,     -10445.0],
    [  4.0,   0.0,   0.0,   0.0,     -11650.0],
    [  2.0,   0.0,  -3.0,   0.0,      14403.0],
    [  0.0,   1.0,  -2.0,   0.0,      -7003.0],
    [  2.0,  -1.0,  -2.0,   0.0,      10056.0],
    [  1.0,   0.0,   1.0,   0.0,       6322.0],
    [  2.0,  -2.0,   0.0,   0.0,      -9884.0],
];

/// Latitude terms: `[D, M, M′, F, Σb coefficient]`, units 10⁻⁶ degree.
#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 30] = [
    [  0.0,   0.0,   0.0,   1.0,    5128122.0],
    [  0.0,   0.0,   1.0,   1.0,     280602.0],
    [  0.0,   0.0,   1.0,  -1.0,     277693.0],
    [  2.0,   0.0,   0.0,  -1.0,     173237.0],
    [  2.0,   0.0,  -1.0,   1.0,      55413.0],
    [  2.0,   0.0,  -1.0,  -1.0,      46271.0],
    [  2.0,   0.0,   0.0,   1.0,      32573.0],
    [  0.0,   0.0,   2.0,   1.0,      17198.0],
    [  2.0,   0.0,   1.0,  -1.0,       9266.0],
    [  0.0,   0.0,   2.0,  -1.0,       8822.0],
    [  2.0,  -1.0,   0.0,  -1.0,       8216.0],
    [  2.0,   0.0,  -2.0,  -1.0,       4324.0],
    [  2.0,   0.0,   1.0,   1.0,       4200.0],
    [  2.0,   1.0,   0.0,  -1.0,      -3359.0],
    [  2.0,  -1.0,  -1.0,   1.0,       2463.0],
    [  2.0,  -1.0,   0.0,   1.0,       2211.0],
    [  2.0,  -1.0,  -1.0,  -1.0,       2065.0],
    [  0.0,   1.0,  -1.0,  -1.0,      -1870.0],
    [  4.0,   0.0,  -1.0,  -1.0,       1828.0],
    [  0.0,   1.0,   0.0,   1.0,      -1794.0],
    [  0.0,   0.0,   0.0,   3.0,      -1749.0],
    [  0.0,   1.0,  -1.0,   1.0,      -1565.0],
    [  1.0,   0.0,   0.0,   1.0,      -1491.0],
    [  0.0,   1.0,   1.0,   1.0,      -1475.0],
    [  0.0,   1.0,   1.0,  -1.0,      -1410.0],
    [  0.0,   1.0,   0.0,  -1.0,      -1344.0],
    [  1.0,   0.0,   0.0,  -1.0,      -1335.0],
    [  0.0,   0.0,   3.0,   1.0,       1107.0],
    [  4.0,   0.0,   0.0,  -1.0,       1021.0],
    [  4.0,   0.0,  -1.0,   1.0,        833.0],
];

/// Mean Earth-Moon distance of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

struct Arguments {
    lp: f64,
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    e: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        Self {
            lp: mean_longitude_deg(t).rem_euclid(360.0).to_radians(),
            d: mean_elongation_deg(t).rem_euclid(360.0).to_radians(),
            m: solar_mean_anomaly_deg(t).rem_euclid(360.0).to_radians(),
            mp: mean_anomaly_deg(t).rem_euclid(360.0).to_radians(),
            f: argument_of_latitude_deg(t).rem_euclid(360.0).to_radians(),
            a1: (119.75 + 131.849 * t).rem_euclid(360.0).to_radians(),
            a2: (53.09 + 479_264.290 * t).rem_euclid(360.0).to_radians(),
            a3: (313.45 + 481_266.484 * t).rem_euclid(360.0).to_radians(),
            // Decreasing eccentricity of the Earth's orbit.
            e: 1.0 - 0.002_516 * t - 0.000_007_4 * t * t,
        }
    }

    /// Argument and E-weighted amplitude of one term.
    fn term(&self, row: &[f64; 5]) -> (f64, f64) {
        let arg = row[0] * self.d + row[1] * self.m + row[2] * self.mp + row[3] * self.f;
        let amp = row[4] * self.e.powi(row[1].abs() as i32);
        (arg, amp)
    }
}

fn sum_longitude(a: &Arguments) -> f64 {
    let periodic: f64 = LONGITUDE_TERMS
        .iter()
        .map(|row| {
            let (arg, amp) = a.term(row);
            amp * arg.sin()
        })
        .sum();
    // Venus, Jupiter and Earth flattening.
    periodic + 3958.0 * a.a1.sin() + 1962.0 * (a.lp - a.f).sin() + 318.0 * a.a2.sin()
}

fn sum_latitude(a: &Arguments) -> f64 {
    let periodic: f64 = LATITUDE_TERMS
        .iter()
        .map(|row| {
            let (arg, amp) = a.term(row);
            amp * arg.sin()
        })
        .sum();
    periodic - 2235.0 * a.lp.sin()
        + 382.0 * a.a3.sin()
        + 175.0 * (a.a1 - a.f).sin()
        + 175.0 * (a.a1 + a.f).sin()
        + 127.0 * (a.lp - a.mp).sin()
        - 115.0 * (a.lp + a.mp).sin()
}

fn sum_distance(a: &Arguments) -> f64 {
    DISTANCE_TERMS
        .iter()
        .map(|row| {
            let (arg, amp) = a.term(row);
            amp * arg.cos()
        })
        .sum()
}

/// Moon's geocentric ecliptic position at a Julian Date.
///
/// The JD is used directly as dynamical time.
pub fn position(jd: f64) -> LunarPosition {
    let t = julian_centuries(jd);
    let a = Arguments::at(t);

    let lon_deg = a.lp.to_degrees() + sum_longitude(&a) / 1.0e6;
    let lon = lon_deg.rem_euclid(360.0).to_radians();

    LunarPosition {
        longitude_rad: if lon >= TAU { 0.0 } else { lon },
        latitude_rad: (sum_latitude(&a) / 1.0e6).to_radians(),
        distance_km: MEAN_DISTANCE_KM + sum_distance(&a) / 1000.0,
    }
}

/// Moon's geocentric ecliptic longitude in radians, [0, 2π).
pub fn longitude_rad(jd: f64) -> f64 {
    position(jd).longitude_rad
}
