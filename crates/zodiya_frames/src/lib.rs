//! Frame helpers for natal position computation.
//!
//! Provides the mean obliquity of the ecliptic, the IAU 1980 nutation
//! series, apparent sidereal time, and the ecliptic → equatorial →
//! horizontal chain used by the ascendant search.

pub mod nutation;
pub mod obliquity;
pub mod sidereal;
pub mod spherical;

pub use nutation::{Nutation, fundamental_arguments, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_rad, true_obliquity_rad};
pub use sidereal::{
    apparent_sidereal_time_rad, apparent_sidereal_time_seconds, equation_of_equinoxes_rad,
};
pub use spherical::{
    EquatorialCoords, HorizonPoint, ecliptic_to_equatorial, horizontal_altitude, hour_angle_rad,
    normalize_deg, normalize_pm_pi, normalize_rad,
};
