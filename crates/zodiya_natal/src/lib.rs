//! Natal positions: the Sun, the Moon and the Ascendant at a birth instant,
//! each mapped to its tropical zodiac sign.
//!
//! ```no_run
//! use zodiya_natal::calculate;
//! use zodiya_time::UtcInstant;
//!
//! let instant: UtcInstant = "2024-01-01T15:30:00Z".parse()?;
//! let p = calculate(&instant, 52.52, 13.405)?;
//! println!("Sun in {}, Moon in {}, rising {}", p.sun_sign, p.moon_sign, p.ascendant);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ascendant;
pub mod config;
pub mod error;
pub mod geo;
pub mod natal;
pub mod zodiac;

pub use ascendant::{
    AscendantConfig, MAX_REFINE_ITERATIONS, MIN_COARSE_STEP_DEG, ascendant_residual,
    solve_ascendant,
};
pub use config::NatalConfig;
pub use error::NatalError;
pub use geo::GeoLocation;
pub use natal::{NatalCalculator, NatalContext, NatalPositions, calculate};
pub use zodiac::{
    ALL_SIGNS, Dms, SignPosition, ZodiacSign, deg_to_dms, dms_to_deg, position_in_sign, sign_for,
};
pub use zodiya_time::UtcInstant;
