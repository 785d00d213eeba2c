//! Natal position orchestration.
//!
//! Pipeline: validate inputs → JD and centuries → mean obliquity and local
//! apparent sidereal time → Sun, Moon, Ascendant → signs.

use log::debug;
use serde::{Deserialize, Serialize};
use zodiya_ephem::{lunar, solar};
use zodiya_frames::{apparent_sidereal_time_rad, mean_obliquity_rad, normalize_deg};
use zodiya_time::{UtcInstant, julian_centuries, local_sidereal_time_rad};

use crate::ascendant::solve_ascendant;
use crate::config::NatalConfig;
use crate::error::NatalError;
use crate::geo::GeoLocation;
use crate::zodiac::{SignPosition, ZodiacSign, position_in_sign, sign_for};

/// Sun, Moon and Ascendant longitudes with their signs.
///
/// Longitudes are ecliptic degrees of date in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalPositions {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    /// Rising sign.
    pub ascendant: ZodiacSign,
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    pub ascendant_longitude: f64,
}

impl NatalPositions {
    pub fn sun_position(&self) -> SignPosition {
        position_in_sign(self.sun_longitude)
    }

    pub fn moon_position(&self) -> SignPosition {
        position_in_sign(self.moon_longitude)
    }

    pub fn ascendant_position(&self) -> SignPosition {
        position_in_sign(self.ascendant_longitude)
    }
}

/// Quantities shared by the three position computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalContext {
    /// Julian Date of the instant, used directly as dynamical time.
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    /// Mean obliquity of the ecliptic, radians.
    pub obliquity_rad: f64,
    /// Local apparent sidereal time, radians in [0, 2π).
    pub lst_rad: f64,
}

impl NatalContext {
    /// Derive the context for a validated instant and location.
    pub fn new(instant: &UtcInstant, location: &GeoLocation) -> Self {
        let jd = instant.to_jd();
        Self {
            jd,
            t: julian_centuries(jd),
            obliquity_rad: mean_obliquity_rad(jd),
            lst_rad: local_sidereal_time_rad(
                apparent_sidereal_time_rad(jd),
                location.longitude_rad(),
            ),
        }
    }
}

/// Natal position calculator with a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NatalCalculator {
    config: NatalConfig,
}

impl NatalCalculator {
    pub fn new(config: NatalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NatalConfig {
        &self.config
    }

    /// Compute positions for an instant and a latitude/longitude in degrees.
    pub fn calculate(
        &self,
        instant: &UtcInstant,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<NatalPositions, NatalError> {
        self.calculate_for(instant, &GeoLocation::new(latitude_deg, longitude_deg))
    }

    /// Compute positions for an instant and an observer location.
    pub fn calculate_for(
        &self,
        instant: &UtcInstant,
        location: &GeoLocation,
    ) -> Result<NatalPositions, NatalError> {
        location.validate()?;
        instant.validate()?;

        let ctx = NatalContext::new(instant, location);
        debug!(
            "natal: {instant} at ({}, {}): jd = {:.6}, T = {:.9}, ε = {:.6}°, LST = {:.6}°",
            location.latitude_deg,
            location.longitude_deg,
            ctx.jd,
            ctx.t,
            ctx.obliquity_rad.to_degrees(),
            ctx.lst_rad.to_degrees()
        );

        let sun = normalize_deg(solar::apparent_longitude_rad(ctx.t).to_degrees());
        let moon = normalize_deg(lunar::longitude_rad(ctx.jd).to_degrees());
        let asc_rad = solve_ascendant(
            ctx.lst_rad,
            location.latitude_rad(),
            ctx.obliquity_rad,
            &self.config.ascendant,
        )?;
        let asc = normalize_deg(asc_rad.to_degrees());

        Ok(NatalPositions {
            sun_sign: sign_for(sun),
            moon_sign: sign_for(moon),
            ascendant: sign_for(asc),
            sun_longitude: sun,
            moon_longitude: moon,
            ascendant_longitude: asc,
        })
    }
}

/// Compute natal positions with the default configuration.
///
/// # Errors
/// - `InvalidCoordinates` if a coordinate is non-finite or out of range
/// - `InvalidInstant` if the instant is not a valid calendar date-time
/// - `AscendantUndefined` at a geographic pole
pub fn calculate(
    instant: &UtcInstant,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NatalPositions, NatalError> {
    NatalCalculator::default().calculate(instant, latitude_deg, longitude_deg)
}
