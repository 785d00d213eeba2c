//! Tropical zodiac signs and DMS (degrees-minutes-seconds) breakdown.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting
//! from Aries at the vernal equinox. Sign k owns the half-open interval
//! [30k, 30k + 30).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in ecliptic order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at a 0-based index, `None` past Pisces.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SIGNS.get(usize::from(index)).copied()
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Ecliptic longitude where the sign begins, in degrees.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * 30.0
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown sign name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// Sexagesimal split of an angle's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// 0..=359.
    pub degrees: u16,
    /// 0..=59.
    pub minutes: u8,
    /// [0, 60).
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:05.2}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Decimal degrees of a [`Dms`].
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + (f64::from(dms.minutes) + dms.seconds / 60.0) / 60.0
}

/// Split the magnitude of `deg` into degrees, arc-minutes and arc-seconds.
///
/// The sign is dropped and the magnitude reduced to one turn, so `-370.5`
/// gives 10°30′00″. Non-finite input gives zero.
pub fn deg_to_dms(deg: f64) -> Dms {
    let turn = reduce_deg(deg.abs());
    let degrees = turn.trunc();
    let arcmin = (turn - degrees) * 60.0;
    let minutes = arcmin.trunc();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (arcmin - minutes) * 60.0,
    }
}

/// Reduce a longitude to [0, 360); non-finite input collapses to 0.
fn reduce_deg(longitude_deg: f64) -> f64 {
    if !longitude_deg.is_finite() {
        return 0.0;
    }
    let r = longitude_deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Zodiac sign containing an ecliptic longitude in degrees.
///
/// Any finite longitude is accepted and reduced mod 360. Non-finite input
/// maps to Aries.
pub fn sign_for(longitude_deg: f64) -> ZodiacSign {
    let idx = (reduce_deg(longitude_deg) / 30.0).floor() as usize;
    ALL_SIGNS.get(idx).copied().unwrap_or(ZodiacSign::Aries)
}

/// Sign and in-sign offset of an ecliptic longitude in degrees.
pub fn position_in_sign(longitude_deg: f64) -> SignPosition {
    let lon = reduce_deg(longitude_deg);
    let sign = sign_for(lon);
    let degrees_in_sign = (lon - sign.start_deg()).clamp(0.0, 30.0 - f64::EPSILON * 32.0);
    SignPosition {
        sign,
        sign_index: sign.index(),
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}
