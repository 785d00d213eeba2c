//! Ascendant: the ecliptic point rising on the eastern horizon.
//!
//! Found numerically rather than from the closed-form tangent formula.
//! A coarse scan of the whole ecliptic picks the rising candidate closest
//! to the horizon, then a bisection-style refinement with a halving step
//! walks it onto the horizon.
//!
//! Each candidate longitude λ is evaluated as:
//! 1. (α, δ) of the ecliptic point λ for obliquity ε
//! 2. H = LST − α, normalized to [−π, π]
//! 3. alt = asin(sin φ sin δ + cos φ cos δ cos H)
//! 4. rising iff sin H < 0

use std::f64::consts::{PI, TAU};

use log::trace;
use serde::{Deserialize, Serialize};
use zodiya_frames::{
    HorizonPoint, ecliptic_to_equatorial, horizontal_altitude, hour_angle_rad, normalize_rad,
};

use crate::error::NatalError;

/// Below this |cos φ| the observer is treated as standing on a pole.
const POLE_COS_LIMIT: f64 = 1e-9;

/// Finest coarse spacing accepted, in degrees (360 000 scan points).
pub const MIN_COARSE_STEP_DEG: f64 = 1e-3;

/// Past this many halvings δ falls below one ulp of λ.
pub const MAX_REFINE_ITERATIONS: u32 = 64;

/// Search parameters for the ascendant solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AscendantConfig {
    /// Spacing of the coarse scan in degrees. Range: [0.001, 360].
    pub coarse_step_deg: f64,
    /// Refinement step before the first halving, in degrees.
    pub initial_offset_deg: f64,
    /// Number of refinement rounds, at most 64.
    pub refine_iterations: u32,
}

impl Default for AscendantConfig {
    fn default() -> Self {
        Self {
            coarse_step_deg: 1.0,
            initial_offset_deg: 5.0,
            refine_iterations: 12,
        }
    }
}

impl AscendantConfig {
    /// Reject parameters the search cannot use in bounded time.
    pub fn validate(&self) -> Result<(), NatalError> {
        let step = self.coarse_step_deg;
        if !(MIN_COARSE_STEP_DEG..=360.0).contains(&step) {
            return Err(NatalError::InvalidConfig(format!(
                "coarse_step_deg must be in [{MIN_COARSE_STEP_DEG}, 360], got {step}"
            )));
        }
        let offset = self.initial_offset_deg;
        if !offset.is_finite() || offset <= 0.0 {
            return Err(NatalError::InvalidConfig(format!(
                "initial_offset_deg must be positive and finite, got {offset}"
            )));
        }
        if self.refine_iterations > MAX_REFINE_ITERATIONS {
            return Err(NatalError::InvalidConfig(format!(
                "refine_iterations must be at most {MAX_REFINE_ITERATIONS}, got {}",
                self.refine_iterations
            )));
        }
        Ok(())
    }
}

/// Altitude and side of the meridian of the ecliptic point `lon_rad`.
///
/// The ascendant is the rising point where the altitude vanishes.
pub fn ascendant_residual(lon_rad: f64, lst_rad: f64, lat_rad: f64, eps_rad: f64) -> HorizonPoint {
    let eq = ecliptic_to_equatorial(lon_rad, eps_rad);
    let ha = hour_angle_rad(lst_rad, eq.ra_rad);
    horizontal_altitude(lat_rad, eq.dec_rad, ha)
}

/// Ecliptic longitude of the Ascendant in radians, [0, 2π).
///
/// # Arguments
/// * `lst_rad` - local apparent sidereal time
/// * `lat_rad` - geodetic latitude, north positive
/// * `eps_rad` - obliquity of the ecliptic
///
/// # Errors
/// `InvalidConfig` for unusable search parameters, `AscendantUndefined` at
/// a geographic pole or when no rising point is found.
pub fn solve_ascendant(
    lst_rad: f64,
    lat_rad: f64,
    eps_rad: f64,
    config: &AscendantConfig,
) -> Result<f64, NatalError> {
    config.validate()?;

    let undefined = || NatalError::AscendantUndefined {
        latitude_deg: lat_rad.to_degrees(),
    };
    if lat_rad.cos().abs() < POLE_COS_LIMIT {
        return Err(undefined());
    }

    let evaluate = |lon: f64| {
        let hp = ascendant_residual(lon, lst_rad, lat_rad, eps_rad);
        hp.is_rising().then_some(hp.altitude_rad.abs())
    };

    // Coarse pass over offsets −π ..= π around the sidereal time.
    let step = config.coarse_step_deg.to_radians();
    let steps = (TAU / step + 1e-9).floor() as u32;
    let mut best: Option<(f64, f64)> = None;
    for i in 0..=steps {
        let candidate = normalize_rad(lst_rad - PI + f64::from(i) * step);
        if let Some(abs_alt) = evaluate(candidate) {
            if best.is_none_or(|(_, b)| abs_alt < b) {
                best = Some((candidate, abs_alt));
            }
        }
    }
    let (mut current, mut best_alt) = best.ok_or_else(undefined)?;
    trace!(
        "ascendant coarse: λ = {:.4}°, |alt| = {:.6}°",
        current.to_degrees(),
        best_alt.to_degrees()
    );

    let mut delta = config.initial_offset_deg.to_radians();
    for _ in 0..config.refine_iterations {
        delta /= 2.0;
        let candidates = [normalize_rad(current + delta), normalize_rad(current - delta)];
        for candidate in candidates {
            if let Some(abs_alt) = evaluate(candidate) {
                if abs_alt < best_alt {
                    best_alt = abs_alt;
                    current = candidate;
                }
            }
        }
    }
    trace!(
        "ascendant refined: λ = {:.6}°, |alt| = {:.2e}°",
        current.to_degrees(),
        best_alt.to_degrees()
    );

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.439_291_111 * PI / 180.0;

    /// Meeus eq. 14.2 with the quadrant chosen for the eastern horizon.
    fn closed_form(lst: f64, lat: f64, eps: f64) -> f64 {
        let y = lst.cos();
        let x = -(lst.sin() * eps.cos() + lat.tan() * eps.sin());
        normalize_rad(y.atan2(x))
    }

    fn angular_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn equator_at_zero_sidereal_time_rises_at_cancer_point() {
        let asc = solve_ascendant(0.0, 0.0, EPS, &AscendantConfig::default()).unwrap();
        assert!((asc.to_degrees() - 90.0).abs() < 0.01, "asc = {}", asc.to_degrees());
    }

    #[test]
    fn matches_closed_form_at_mid_latitudes() {
        let config = AscendantConfig::default();
        for lat_deg in [-60.0_f64, -45.0, -20.0, 0.0, 15.0, 38.9, 52.52, 60.0] {
            for k in 0..24 {
                let lst = (f64::from(k) * 15.0 + 0.3).to_radians();
                let lat = lat_deg.to_radians();
                let asc = solve_ascendant(lst, lat, EPS, &config).unwrap();
                let reference = closed_form(lst, lat, EPS);
                let gap = angular_gap(asc, reference).to_degrees();
                assert!(gap < 0.01, "lat {lat_deg} lst {k}h: gap {gap}°");
            }
        }
    }

    #[test]
    fn result_sits_on_eastern_horizon() {
        let lst = 346.692_8_f64.to_radians();
        let lat = 52.52_f64.to_radians();
        let asc = solve_ascendant(lst, lat, EPS, &AscendantConfig::default()).unwrap();
        let hp = ascendant_residual(asc, lst, lat, EPS);
        assert!(hp.is_rising());
        assert!(hp.altitude_rad.to_degrees().abs() < 0.01);
    }

    #[test]
    fn pole_is_undefined() {
        let err = solve_ascendant(1.0, PI / 2.0, EPS, &AscendantConfig::default()).unwrap_err();
        assert!(matches!(err, NatalError::AscendantUndefined { .. }));
        let err = solve_ascendant(1.0, -PI / 2.0, EPS, &AscendantConfig::default()).unwrap_err();
        assert!(matches!(err, NatalError::AscendantUndefined { .. }));
    }

    #[test]
    fn near_pole_still_solves() {
        let lat = 89.999_f64.to_radians();
        let asc = solve_ascendant(1.0, lat, EPS, &AscendantConfig::default()).unwrap();
        assert!((0.0..TAU).contains(&asc));
    }

    #[test]
    fn rejects_bad_steps() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY, 361.0, 1e-12, 1e-4, 9e-4] {
            let config = AscendantConfig {
                coarse_step_deg: step,
                ..AscendantConfig::default()
            };
            let err = solve_ascendant(1.0, 0.5, EPS, &config).unwrap_err();
            assert!(matches!(err, NatalError::InvalidConfig(_)), "step {step}");
        }
        let config = AscendantConfig {
            initial_offset_deg: 0.0,
            ..AscendantConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unbounded_refinement() {
        for iterations in [MAX_REFINE_ITERATIONS + 1, 1000, u32::MAX] {
            let config = AscendantConfig {
                refine_iterations: iterations,
                ..AscendantConfig::default()
            };
            let err = solve_ascendant(1.0, 0.5, EPS, &config).unwrap_err();
            assert!(matches!(err, NatalError::InvalidConfig(_)), "iterations {iterations}");
        }
        let config = AscendantConfig {
            coarse_step_deg: 1e-12,
            initial_offset_deg: 5.0,
            refine_iterations: u32::MAX,
        };
        assert!(matches!(config.validate(), Err(NatalError::InvalidConfig(_))));
    }

    #[test]
    fn accepts_limits() {
        let config = AscendantConfig {
            coarse_step_deg: MIN_COARSE_STEP_DEG,
            refine_iterations: MAX_REFINE_ITERATIONS,
            ..AscendantConfig::default()
        };
        assert!(config.validate().is_ok());
        let config = AscendantConfig {
            coarse_step_deg: 360.0,
            ..AscendantConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn finer_scan_without_refinement_lands_close() {
        let config = AscendantConfig {
            coarse_step_deg: 0.01,
            refine_iterations: 0,
            ..AscendantConfig::default()
        };
        let (lst, lat) = (2.0, 0.7);
        let asc = solve_ascendant(lst, lat, EPS, &config).unwrap();
        let gap = angular_gap(asc, closed_form(lst, lat, EPS)).to_degrees();
        assert!(gap < 0.05, "gap {gap}°");
    }

    #[test]
    fn deterministic() {
        let c = AscendantConfig::default();
        let a = solve_ascendant(4.2, -0.6, EPS, &c).unwrap();
        let b = solve_ascendant(4.2, -0.6, EPS, &c).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
