//! Properties of the sign partition and the DMS breakdown.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use zodiya_natal::{ALL_SIGNS, ZodiacSign, deg_to_dms, dms_to_deg, position_in_sign, sign_for};

#[quickcheck]
fn every_longitude_lands_in_exactly_one_sign(lon: f64) -> TestResult {
    if !lon.is_finite() || lon.abs() > 1e9 {
        return TestResult::discard();
    }
    let reduced = match lon.rem_euclid(360.0) {
        r if r >= 360.0 => 0.0,
        r => r,
    };
    // Division by 30 may round across a cusp.
    let phase = reduced.rem_euclid(30.0);
    if phase < 1e-9 || phase > 30.0 - 1e-9 {
        return TestResult::discard();
    }
    let owners: Vec<ZodiacSign> = ZodiacSign::all()
        .iter()
        .copied()
        .filter(|s| {
            let start = s.start_deg();
            reduced >= start && reduced < start + 30.0
        })
        .collect();
    TestResult::from_bool(owners.len() == 1 && owners[0] == sign_for(lon))
}

#[quickcheck]
fn owning_sign_matches_start_degree(index: u8, offset: u16) -> bool {
    let sign = ALL_SIGNS[usize::from(index % 12)];
    let within = f64::from(offset % 2999 + 1) / 100.0;
    sign_for(sign.start_deg() + within) == sign
}

#[quickcheck]
fn sign_is_periodic(lon: f64, turns: i8) -> TestResult {
    if !lon.is_finite() || lon.abs() > 1e6 {
        return TestResult::discard();
    }
    let shifted = lon + f64::from(turns) * 360.0;
    // Skip points a rounding step away from a cusp.
    let phase = lon.rem_euclid(30.0);
    if phase < 1e-6 || phase > 30.0 - 1e-6 {
        return TestResult::discard();
    }
    TestResult::from_bool(sign_for(shifted) == sign_for(lon))
}

#[quickcheck]
fn sign_for_is_total(lon: f64) -> bool {
    // NaN and ±∞ are accepted and fall back to Aries.
    let sign = sign_for(lon);
    lon.is_finite() || sign == ZodiacSign::Aries
}

#[quickcheck]
fn offset_within_sign_is_bounded(lon: f64) -> TestResult {
    if !lon.is_finite() || lon.abs() > 1e9 {
        return TestResult::discard();
    }
    let p = position_in_sign(lon);
    TestResult::from_bool(
        (0.0..30.0).contains(&p.degrees_in_sign)
            && p.sign == sign_for(lon)
            && p.sign_index == p.sign.index(),
    )
}

#[quickcheck]
fn dms_recomposes(deg: f64) -> TestResult {
    if !deg.is_finite() || deg.abs() >= 360.0 {
        return TestResult::discard();
    }
    let dms = deg_to_dms(deg);
    let back = dms_to_deg(&dms);
    TestResult::from_bool(
        dms.minutes < 60 && dms.seconds >= 0.0 && dms.seconds < 60.0 + 1e-9
            && (back - deg.abs()).abs() < 1e-9,
    )
}
