//! Numeric kernel shared by the rasterizers.
//!
//! Every place a continuous value becomes a grid coordinate goes through
//! [`round_to_grid`], so the whole crate agrees on one rounding mode
//! (half away from zero).

/// Smallest limit used by the open conics when none is given.
pub const MIN_CONIC_LIMIT: u32 = 50;

/// Multiplier applied to the conic parameter when deriving a default limit.
pub const CONIC_LIMIT_FACTOR: u32 = 5;

/// Largest radius, semi-axis or focal parameter after normalization.
///
/// Keeps the integer decision terms of the conics (products of up to three
/// dimensions and coordinates) inside `i64`.
pub const MAX_DIMENSION: i64 = 1 << 24;

/// Fractional part of a float, always in `[0, 1)`.
#[inline]
#[must_use]
pub fn fractional_part(v: f64) -> f64 {
    v - v.floor()
}

/// Complement of [`fractional_part`].
#[inline]
#[must_use]
pub fn reverse_fractional_part(v: f64) -> f64 {
    1.0 - fractional_part(v)
}

/// Round to the nearest grid cell, halves away from zero.
#[inline]
#[must_use]
pub fn round_to_grid(v: f64) -> i32 {
    v.round() as i32
}

/// Normalize a radius, semi-axis or focal parameter to `max(1, round(v))`,
/// capped at [`MAX_DIMENSION`].
///
/// Non-finite input collapses to 1 as well.
#[inline]
#[must_use]
pub fn normalize_dimension(v: f64) -> i64 {
    if !v.is_finite() {
        return 1;
    }
    (v.round() as i64).clamp(1, MAX_DIMENSION)
}

/// Default extent for the hyperbola and parabola: `max(50, 5 * param)`.
#[inline]
#[must_use]
pub fn default_limit(param: i64) -> i64 {
    i64::from(MIN_CONIC_LIMIT).max(i64::from(CONIC_LIMIT_FACTOR) * param)
}
