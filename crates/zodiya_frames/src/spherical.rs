//! Ecliptic → equatorial → horizontal transforms and angle normalization.
//!
//! All angles in radians unless a function name says otherwise.

use std::f64::consts::TAU;

/// Equatorial coordinates of a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in [0, 2π).
    pub ra_rad: f64,
    /// Declination in [−π/2, π/2].
    pub dec_rad: f64,
}

/// Altitude of a point above the local horizon, with the side of the
/// meridian it sits on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPoint {
    /// Altitude in [−π/2, π/2].
    pub altitude_rad: f64,
    /// sin of the local hour angle; negative east of the meridian (rising).
    pub sin_hour_angle: f64,
}

impl HorizonPoint {
    /// True when the point lies in the eastern half of the sky.
    pub fn is_rising(&self) -> bool {
        self.sin_hour_angle < 0.0
    }
}

/// Normalize an angle to [0, 2π).
pub fn normalize_rad(angle: f64) -> f64 {
    let r = angle.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Normalize an angle to [−π, π].
pub fn normalize_pm_pi(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}

/// Normalize degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Equatorial coordinates of the ecliptic point at longitude `lon_rad`
/// (latitude zero) for obliquity `eps_rad`.
///
/// α = atan2(sin λ cos ε, cos λ), δ = asin(sin ε sin λ).
pub fn ecliptic_to_equatorial(lon_rad: f64, eps_rad: f64) -> EquatorialCoords {
    let (sin_l, cos_l) = lon_rad.sin_cos();
    let (sin_e, cos_e) = eps_rad.sin_cos();
    EquatorialCoords {
        ra_rad: normalize_rad((sin_l * cos_e).atan2(cos_l)),
        dec_rad: (sin_e * sin_l).clamp(-1.0, 1.0).asin(),
    }
}

/// Local hour angle H = LST − α, normalized to [−π, π].
pub fn hour_angle_rad(lst_rad: f64, ra_rad: f64) -> f64 {
    normalize_pm_pi(lst_rad - ra_rad)
}

/// Altitude of a point with declination `dec_rad` at hour angle `ha_rad`
/// seen from latitude `lat_rad`.
///
/// sin h = sin φ sin δ + cos φ cos δ cos H, with the argument clamped to
/// [−1, 1] before asin.
pub fn horizontal_altitude(lat_rad: f64, dec_rad: f64, ha_rad: f64) -> HorizonPoint {
    let sin_alt =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    HorizonPoint {
        altitude_rad: sin_alt.clamp(-1.0, 1.0).asin(),
        sin_hour_angle: ha_rad.sin(),
    }
}
